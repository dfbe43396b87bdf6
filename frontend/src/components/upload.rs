//! File picker and upload button.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::config::ACCEPTED_MIME;
use crate::controller;
use crate::services::{file_info, BrowserAlert, HttpResumeApi};
use crate::state::{PageState, SelectedFile, UploadPhase};

#[component]
pub fn UploadSection(state: PageState, api: HttpResumeApi) -> impl IntoView {
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        let selected = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| SelectedFile {
                info: file_info(&file),
                handle: file,
            });

        match &selected {
            Some(file) => log::info!(
                "📄 Selected {} ({}, {} bytes)",
                file.info.name,
                file.info.mime,
                file.info.size
            ),
            None => log::debug!("File selection cleared"),
        }

        state.update(|s| s.select_file(selected));
    };

    let on_upload = move |_| {
        let api = api.clone();
        spawn_local(async move {
            let outcome = controller::upload(&api, &state, &BrowserAlert).await;
            log::debug!("Upload finished: {:?}", outcome);
        });
    };

    view! {
        <div class="upload-section">
            <input
                type="file"
                accept=ACCEPTED_MIME
                on:change=on_file_change
            />
            <button
                class="upload-button"
                on:click=on_upload
                disabled=move || !state.with(|s| s.can_upload())
            >
                {move || match state.with(|s| s.phase()) {
                    UploadPhase::Idle => "Upload",
                    UploadPhase::Uploading => "Processing...",
                }}
            </button>
        </div>
    }
}
