//! Items page — list, create, edit, and delete on a single screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It loads the item list on mount and after every
//! mutation re-fetches the full list, so the table always mirrors the
//! server. The modal form toggles between create and edit based on the
//! record it was opened from.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use items::Item;
use leptos::prelude::*;
use uuid::Uuid;

use crate::components::item_table::ItemTable;
use crate::state::form::ItemForm;
use crate::state::items::ItemsState;

/// Dialog heading for the current form mode.
fn dialog_title(editing: bool) -> &'static str {
    if editing { "Edit Item" } else { "Create New Item" }
}

/// Dialog sub-heading for the current form mode.
fn dialog_description(editing: bool) -> &'static str {
    if editing {
        "Make changes to your item here."
    } else {
        "Add a new item to your collection."
    }
}

/// Submit-button label for the current form mode.
fn submit_label(editing: bool) -> &'static str {
    if editing { "Update" } else { "Create" }
}

/// Re-fetch the full item list into shared state.
pub(crate) fn load_items(items: RwSignal<ItemsState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_items().await {
            Ok(list) => items.update(|s| s.apply_list(list)),
            Err(e) => items.update(|s| s.fail(e)),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = items;
}

/// Items page — table of items plus a create button and the modal form.
#[component]
pub fn ItemsPage() -> impl IntoView {
    let items = expect_context::<RwSignal<ItemsState>>();
    let form = RwSignal::new(ItemForm::for_create());
    let show_form = RwSignal::new(false);

    // Initial list load on mount.
    items.update(|s| s.begin_load());
    load_items(items);

    let on_create = move |_| {
        form.set(ItemForm::for_create());
        show_form.set(true);
    };

    let on_edit = Callback::new(move |item: Item| {
        form.set(ItemForm::for_edit(&item));
        show_form.set(true);
    });

    let on_delete = Callback::new(move |id: Uuid| {
        items.update(|s| s.begin_load());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_item(id).await {
                Ok(()) => load_items(items),
                Err(e) => items.update(|s| s.fail(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_cancel = Callback::new(move |_| show_form.set(false));

    view! {
        <div class="items-page">
            <header class="items-page__header toolbar">
                <h1 class="toolbar__title">"Items Management"</h1>
                <span class="toolbar__spacer"></span>
                <button class="btn btn--primary toolbar__new-item" on:click=on_create>
                    "+ Create New"
                </button>
            </header>

            <Show when=move || items.get().error.is_some()>
                <p class="items-page__error">{move || items.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !items.get().loading
                fallback=move || view! { <p class="items-page__loading">"Loading items..."</p> }
            >
                <ItemTable items=items on_edit=on_edit on_delete=on_delete/>
            </Show>

            <Show when=move || show_form.get()>
                <ItemFormDialog form=form items=items on_cancel=on_cancel/>
            </Show>
        </div>
    }
}

/// Modal dialog hosting the create/edit form.
#[component]
fn ItemFormDialog(
    form: RwSignal<ItemForm>,
    items: RwSignal<ItemsState>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = Callback::new(move |_| {
        let current = form.get();
        // Required-field semantics: a blank form does not submit.
        if !current.is_valid() {
            return;
        }
        let input = current.input();
        items.update(|s| s.begin_load());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match current.mode {
                crate::state::form::FormMode::Create => {
                    crate::net::api::create_item(&input).await.map(|_| ())
                }
                crate::state::form::FormMode::Edit { id } => {
                    crate::net::api::update_item(id, &input).await.map(|_| ())
                }
            };
            match result {
                Ok(()) => load_items(items),
                Err(e) => items.update(|s| s.fail(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = input;
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || dialog_title(form.get().is_edit())}</h2>
                <p class="dialog__hint">{move || dialog_description(form.get().is_edit())}</p>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Enter item name"
                        required=true
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            form.update(|f| f.name = event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__textarea"
                        placeholder="Enter item description"
                        rows="4"
                        required=true
                        prop:value=move || form.get().description
                        on:input=move |ev| {
                            form.update(|f| f.description = event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        {move || submit_label(form.get().is_edit())}
                    </button>
                </div>
            </div>
        </div>
    }
}
