//! Add Item Form Component
//!
//! Quantity selector and description input. Validates the draft before
//! handing it to the store.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::draft::{parse_quantity, ItemDraft};

/// Form for appending new items to the list
#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(1u32);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut draft = ItemDraft {
            description: description.get(),
            quantity: quantity.get(),
        };
        match draft.validate(ctx.max_quantity) {
            Ok(item) => {
                ctx.add_item(item);
                draft.reset();
                set_description.set(draft.description);
                set_quantity.set(draft.quantity);
            }
            Err(e) => log::debug!("[FORM] not adding: {}", e),
        }
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>"What do you need for your next trip?"</h3>
            <select
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| {
                    match parse_quantity(&event_target_value(&ev), ctx.max_quantity) {
                        Ok(n) => set_quantity.set(n),
                        Err(e) => log::warn!("[FORM] bad quantity option: {}", e),
                    }
                }
            >
                {(1..=ctx.max_quantity).map(|n| view! {
                    <option value=n.to_string()>{n}</option>
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Item..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
