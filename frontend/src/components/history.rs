//! Past uploads, one collapsible row per entry.

use leptos::*;

use crate::components::RecordDetail;
use crate::render::{format_timestamp, RecordView};
use crate::state::PageState;

#[component]
pub fn HistorySection(state: PageState) -> impl IntoView {
    view! {
        <h2>"Past Uploads"</h2>
        <div class="history-section">
            <For
                each=move || state.with(|s| s.history().to_vec()).into_iter().enumerate()
                key=|(idx, item)| (*idx, item.timestamp.clone(), item.name.clone())
                children=move |(idx, item)| {
                    let is_expanded = move || state.with(|s| s.is_expanded(idx));
                    let toggle = move |_| state.update(|s| s.toggle_expanded(idx));

                    let heading = format_timestamp(item.timestamp.as_deref());
                    let record = RecordView::from(&item);

                    view! {
                        <div class="history-item" class:expanded=is_expanded>
                            <button class="history-header" on:click=toggle>
                                {move || if is_expanded() { "▼ " } else { "▶ " }}
                                {heading}
                            </button>
                            <Show
                                when=is_expanded
                                fallback=|| view! { }
                            >
                                <RecordDetail record=record.clone()/>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}
