//! Packing List View Component
//!
//! Renders the current snapshot in the selected sort order, plus the
//! list actions (sort selector, clear button).

use leptos::prelude::*;

use crate::components::{ItemRow, SortSelector};
use crate::context::use_app_context;
use crate::sort::sorted_view;
use crate::store::{store_items, store_sort_by};

#[component]
pub fn PackingListView() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let rows = move || sorted_view(&store_items(&store), store_sort_by(&store));

    view! {
        <div class="list">
            <ul>
                <For
                    each=rows
                    key=|item| (item.id, item.packed)
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>
            <div class="actions">
                <SortSelector />
                <button on:click=move |_| ctx.clear_list()>"Clear list"</button>
            </div>
        </div>
    }
}
