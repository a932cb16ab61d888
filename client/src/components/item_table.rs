//! Item table with per-row edit and delete actions.

use items::Item;
use leptos::prelude::*;
use uuid::Uuid;

use crate::state::items::ItemsState;
use crate::util::date;

/// Table of all items with a numbered row per record and an empty-state row
/// when the list is empty.
#[component]
pub fn ItemTable(
    items: RwSignal<ItemsState>,
    on_edit: Callback<Item>,
    on_delete: Callback<Uuid>,
) -> impl IntoView {
    view! {
        <div class="item-table">
            <table>
                <thead>
                    <tr>
                        <th class="item-table__num">"No"</th>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Created At"</th>
                        <th class="item-table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !items.get().items.is_empty()
                        fallback=move || {
                            view! {
                                <tr>
                                    <td colspan="5" class="item-table__empty">
                                        "No items found. Create one to get started!"
                                    </td>
                                </tr>
                            }
                        }
                    >
                        {move || {
                            items
                                .get()
                                .items
                                .into_iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    let name = item.name.clone();
                                    let description = item.description.clone();
                                    let created = date::format_timestamp(&item.created_at);
                                    let delete_id = item.id;
                                    view! {
                                        <tr>
                                            <td class="item-table__num">{index + 1}</td>
                                            <td class="item-table__name">{name}</td>
                                            <td>{description}</td>
                                            <td class="item-table__created">{created}</td>
                                            <td class="item-table__actions">
                                                <button
                                                    class="btn"
                                                    on:click=move |_| on_edit.run(item.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| on_delete.run(delete_id)
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </tbody>
            </table>
        </div>
    }
}
