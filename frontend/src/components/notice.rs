//! Inline status messages shown next to the control that triggered them.

use leptos::*;

/// Severity of an inline message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
    Info,
}

impl NoticeKind {
    fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Error => "notice error-message",
            NoticeKind::Success => "notice success-message",
            NoticeKind::Info => "notice info-message",
        }
    }
}

/// Shows `message` when it is set.
#[component]
pub fn Notice(kind: NoticeKind, #[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show
            when=move || message.with(|m| m.as_ref().is_some_and(|m| !m.is_empty()))
            fallback=|| view! { }
        >
            <p class=kind.css_class()>{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
