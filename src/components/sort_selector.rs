//! Sort Selector Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::SortBy;
use crate::store::store_sort_by;

/// Drop-down for the display order of the list
#[component]
pub fn SortSelector() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <select
            prop:value=move || store_sort_by(&store).as_str()
            on:change=move |ev| {
                match event_target_value(&ev).parse::<SortBy>() {
                    Ok(sort_by) => ctx.set_sort_by(sort_by),
                    Err(e) => log::warn!("[SORT] {}", e),
                }
            }
        >
            {SortBy::ALL.iter().map(|sort_by| view! {
                <option value=sort_by.as_str()>{sort_by.label()}</option>
            }).collect_view()}
        </select>
    }
}
