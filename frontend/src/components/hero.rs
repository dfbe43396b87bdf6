//! Page title

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Resume Skill Extractor"</h1>
            <p class="subtitle">
                "Upload a PDF résumé to extract name, contact details, skills and experience."
            </p>
        </div>
    }
}
