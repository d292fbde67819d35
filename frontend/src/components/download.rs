use leptos::*;

use crate::context::use_app;
use crate::types::FileReference;

/// Link downloading a backend file through `/download/`.
#[component]
pub fn DownloadLink(file: FileReference, #[prop(default = "Download Processed File")] label: &'static str) -> impl IntoView {
    let href = use_app().api().download_url(&file);
    view! {
        <a class="download-link" href=href download="">
            {label}
        </a>
    }
}
