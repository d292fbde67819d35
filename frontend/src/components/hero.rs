//! Page heading component

use leptos::*;
use leptos_meta::Title;

use crate::config::APP_NAME;

#[component]
pub fn PageHeader(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <Title text=format!("{} - {}", title, APP_NAME)/>
        <div class="hero">
            <h1>{title}</h1>
            {subtitle.map(|text| view! { <p class="subtitle">{text}</p> })}
        </div>
    }
}
