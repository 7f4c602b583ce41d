//! Card for one dining table in the floor grid.
//!
//! DESIGN
//! ======
//! The card owns its details dialog but not the page blur; it reports dialog
//! open/close through callbacks so the page can blur its background. A card
//! disposed while its dialog is open (e.g. the grid swaps to "Loading..." on a
//! floor change) still reports the close from `on_cleanup`.

#[cfg(test)]
#[path = "table_card_test.rs"]
mod table_card_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::types::Table;

pub(crate) fn occupancy_label(seats_count: i64, capacity: i64) -> String {
    format!("{seats_count}/{capacity}")
}

pub(crate) fn time_range_label(start_time: &str, end_time: &str) -> String {
    match (start_time.is_empty(), end_time.is_empty()) {
        (true, true) => "--".to_owned(),
        (false, true) => start_time.to_owned(),
        (true, false) => end_time.to_owned(),
        (false, false) => format!("{start_time} - {end_time}"),
    }
}

pub(crate) fn status_label(is_ready: bool) -> &'static str {
    if is_ready { "Ready" } else { "Occupied" }
}

/// Open/closed state of one card's dialog, shared with its cleanup hook.
#[derive(Clone, Debug, Default)]
pub(crate) struct DialogFlag(Arc<AtomicBool>);

impl DialogFlag {
    /// Mark open. Returns `true` if the dialog was closed before.
    pub(crate) fn open(&self) -> bool {
        !self.0.swap(true, Ordering::Relaxed)
    }

    /// Mark closed. Returns `true` if the dialog was open before.
    pub(crate) fn close(&self) -> bool {
        self.0.swap(false, Ordering::Relaxed)
    }
}

/// Run `on_close` when the current owner is disposed with the dialog open.
pub(crate) fn close_on_cleanup(flag: DialogFlag, on_close: impl Fn() + Send + Sync + 'static) {
    on_cleanup(move || {
        if flag.close() {
            on_close();
        }
    });
}

/// A single table tile. Clicking it opens a details dialog.
#[component]
pub fn TableCard(table: Table, on_modal_open: Callback<()>, on_modal_close: Callback<()>) -> impl IntoView {
    let show_details = RwSignal::new(false);
    let flag = DialogFlag::default();
    close_on_cleanup(flag.clone(), move || on_modal_close.run(()));

    let open = {
        let flag = flag.clone();
        move |_| {
            if flag.open() {
                show_details.set(true);
                on_modal_open.run(());
            }
        }
    };
    let close = Callback::new(move |()| {
        if flag.close() {
            show_details.set(false);
            on_modal_close.run(());
        }
    });

    let occupancy = occupancy_label(table.seats_count, table.capacity);
    let time_range = time_range_label(&table.start_time, &table.end_time);
    let status = status_label(table.is_ready);
    let ready = table.is_ready;
    let table_id = table.id.to_string();
    let name = table.table_name.clone();

    view! {
        <button
            class="table-card"
            class:table-card--ready=ready
            class:table-card--occupied=!ready
            data-table-id=table_id
            on:click=open
        >
            <span class="table-card__name">{name}</span>
            <span class="table-card__time">{time_range}</span>
            <span class="table-card__seats">{occupancy}</span>
            <span class="table-card__status">{status}</span>
        </button>

        <Show when=move || show_details.get()>
            <TableDetailsDialog table=table.clone() on_close=close/>
        </Show>
    }
}

/// Modal listing every field of one table.
#[component]
fn TableDetailsDialog(table: Table, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{table.table_name.clone()}</h2>
                <dl class="dialog__fields">
                    <dt>"Time"</dt>
                    <dd>{time_range_label(&table.start_time, &table.end_time)}</dd>
                    <dt>"Seated"</dt>
                    <dd>{table.seats_count}</dd>
                    <dt>"Capacity"</dt>
                    <dd>{table.capacity}</dd>
                    <dt>"Status"</dt>
                    <dd>{status_label(table.is_ready)}</dd>
                </dl>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
