//! Result card for one extraction.

use leptos::*;

use crate::render::RecordView;
use crate::state::PageState;

/// Fields of one extraction result.
#[component]
pub fn RecordDetail(record: RecordView) -> impl IntoView {
    let fields = record
        .lines()
        .into_iter()
        .map(|line| {
            view! {
                <p><strong>{line.heading().to_string()}</strong>{line.tail().to_string()}</p>
            }
        })
        .collect_view();

    view! {
        <div class="record">
            {fields}
            <div>
                <strong>"Experience:"</strong>
                <ul>
                    {record
                        .experience
                        .into_iter()
                        .map(|exp| view! { <li>{exp}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// Response of the most recent successful upload.
#[component]
pub fn LatestResult(state: PageState) -> impl IntoView {
    let record = move || state.with(|s| s.latest().map(RecordView::from));

    view! {
        <Show
            when=move || state.with(|s| s.latest().is_some())
            fallback=|| view! { }
        >
            <div class="result-section">
                <h2>"Latest Upload"</h2>
                {move || record().map(|record| view! { <RecordDetail record=record/> })}
            </div>
        </Show>
    }
}
