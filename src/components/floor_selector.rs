//! Vertical list of floor buttons beside the table grid.

#[cfg(test)]
#[path = "floor_selector_test.rs"]
mod floor_selector_test;

use leptos::prelude::*;

use crate::net::types::{Floor, FloorName};

pub(crate) fn floor_button_class(active: bool) -> &'static str {
    if active {
        "floor-selector__button floor-selector__button--active"
    } else {
        "floor-selector__button"
    }
}

/// One button per floor, in backend order. The selected floor is highlighted.
#[component]
pub fn FloorSelector(
    #[prop(into)] floors: Signal<Vec<Floor>>,
    #[prop(into)] selected: Signal<Option<FloorName>>,
    on_floor_change: Callback<FloorName>,
) -> impl IntoView {
    view! {
        <nav class="floor-selector">
            <For
                each=move || floors.get()
                key=|floor| floor.id
                children=move |floor| {
                    let name = floor.name.clone();
                    let label = floor.name.to_string();
                    let active_name = floor.name;
                    let class = move || {
                        floor_button_class(selected.with(|s| s.as_ref() == Some(&active_name)))
                    };
                    view! {
                        <button class=class on:click=move |_| on_floor_change.run(name.clone())>
                            {label}
                        </button>
                    }
                }
            />
        </nav>
    }
}
