//! Item Row Component
//!
//! Individual item in the packing list.

use std::sync::Arc;

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Item;

/// A single item row: packed checkbox, label, delete button
#[component]
pub fn ItemRow(item: Arc<Item>) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let packed = item.packed;
    let label = format!("{} {}", item.quantity, item.description);
    let text_class = if packed { "item-text packed" } else { "item-text" };

    view! {
        <li class="item-row">
            <input
                type="checkbox"
                prop:checked=packed
                on:change=move |_| ctx.toggle_packed(id)
            />
            <span class=text_class>{label}</span>
            <button class="delete-btn" on:click=move |_| ctx.delete_item(id)>"❌"</button>
        </li>
    }
}
