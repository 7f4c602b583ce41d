//! Dining table page: floor selector, live clock and the table grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page loads the floor list and selects the first floor. Each
//! selection issues one tagged table fetch. All state changes go through
//! `DiningState` transitions; this module only wires network results and
//! user events into them.

#[cfg(test)]
#[path = "dining_tables_test.rs"]
mod dining_tables_test;

use leptos::prelude::*;

use crate::components::clock::RealTimeClock;
use crate::components::floor_selector::FloorSelector;
use crate::components::table_card::TableCard;
use crate::config::ClientConfig;
use crate::net::types::FloorName;
use crate::state::dining::{DiningState, PageContent, TableRequest};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No tables available for the selected floor.";

/// Text shown in place of the grid, or `None` when the grid itself renders.
pub(crate) fn content_message(content: &PageContent) -> Option<String> {
    match content {
        PageContent::Loading => Some(LOADING_MESSAGE.to_owned()),
        PageContent::Error(message) => Some(message.clone()),
        PageContent::Empty => Some(EMPTY_MESSAGE.to_owned()),
        PageContent::Grid => None,
    }
}

/// Dining table page. Fetches floors on mount and tables per selected floor.
#[component]
pub fn DiningTablePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let state = RwSignal::new(DiningState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(load_floors(config.clone(), state));

    let on_floor_change = Callback::new(move |name: FloorName| {
        let request = state.try_update(|s| s.select_floor(name)).flatten();
        issue_table_fetch(&config, state, request);
    });
    // Cards may report a close while the page itself is being torn down.
    let on_modal_open = Callback::new(move |()| {
        let _ = state.try_update(DiningState::open_modal);
    });
    let on_modal_close = Callback::new(move |()| {
        let _ = state.try_update(DiningState::close_modal);
    });

    // Memos keep the grid from rebuilding on unrelated changes (modal blur).
    let content = Memo::new(move |_| state.with(DiningState::content));
    let tables = Memo::new(move |_| state.with(|s| s.tables.clone()));
    let floors = Memo::new(move |_| state.with(|s| s.floors.clone()));
    let selected = Memo::new(move |_| state.with(|s| s.selected_floor.clone()));
    let blurred = move || state.with(|s| s.modal_open);

    view! {
        <div class="dining-page" class:dining-page--blurred=blurred>
            <header class="dining-page__header">
                <h1 class="dining-page__title">"Dining Table"</h1>
                <RealTimeClock/>
            </header>
            <div class="dining-page__body">
                <div class="dining-page__grid">
                    {move || {
                        let content = content.get();
                        match content_message(&content) {
                            Some(message) => {
                                view! {
                                    <p
                                        class="dining-page__message"
                                        class:dining-page__message--error=matches!(content, PageContent::Error(_))
                                    >
                                        {message}
                                    </p>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <For
                                        each=move || tables.get()
                                        key=|table| table.id
                                        children=move |table| {
                                            view! {
                                                <TableCard
                                                    table=table
                                                    on_modal_open=on_modal_open
                                                    on_modal_close=on_modal_close
                                                />
                                            }
                                        }
                                    />
                                }
                                    .into_any()
                            }
                        }
                    }}
                </div>
                <FloorSelector floors=floors selected=selected on_floor_change=on_floor_change/>
            </div>
        </div>
    }
}

/// Load the floor list and kick off the first table fetch.
#[cfg(feature = "hydrate")]
async fn load_floors(config: ClientConfig, state: RwSignal<DiningState>) {
    match crate::net::api::fetch_floors(&config).await {
        Ok(floors) => {
            let request = state.try_update(|s| s.floors_succeeded(floors)).flatten();
            issue_table_fetch(&config, state, request);
        }
        Err(e) => {
            leptos::logging::error!("Error fetching floors: {e}");
            let _ = state.try_update(DiningState::floors_failed);
        }
    }
}

/// Spawn the fetch for a tagged table request. Completions whose tag is no
/// longer current are dropped by `DiningState`.
fn issue_table_fetch(config: &ClientConfig, state: RwSignal<DiningState>, request: Option<TableRequest>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(request) = request else {
            return;
        };
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_tables(&config, request.floor_id).await;
            if let Err(e) = &result {
                leptos::logging::error!("Error fetching tables for floor {}: {e}", request.floor_id);
            }
            let applied = state.try_update(|s| match result {
                Ok(tables) => s.tables_succeeded(request, tables),
                Err(_) => s.tables_failed(request),
            });
            if applied == Some(false) {
                leptos::logging::debug_warn!("discarded stale tables response for floor {}", request.floor_id);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, state, request);
    }
}
