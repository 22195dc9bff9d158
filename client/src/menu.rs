use leptos::prelude::*;

use tour_map_shared::LocationStore;

use crate::app::{Locations, MenuOpen};
use crate::controller::PopupController;
use crate::popup::PopupEvent;

/// `(identifier, name, link)` per location, in store order.
pub fn menu_entries(store: &LocationStore) -> Vec<(String, String, String)> {
    store
        .iter()
        .map(|location| {
            (
                location.identifier.clone(),
                location.name.clone(),
                location.link.clone(),
            )
        })
        .collect()
}

/// Side drawer listing every location.
#[component]
pub fn MenuDrawer(controller: PopupController) -> impl IntoView {
    let Locations(store) = expect_context();
    let MenuOpen(menu_open) = expect_context();

    view! {
        <aside
            id="menu-sidebar"
            class="menu-sidebar"
            aria-hidden=move || (!menu_open.get()).to_string()
            style="position: absolute; top: 0; left: 0; bottom: 0; width: 280px; z-index: 20; overflow-y: auto; background: #13161f; border-right: 1px solid #282c3e; transition: transform 0.2s;"
            style:transform=move || if menu_open.get() { "translateX(0)" } else { "translateX(-100%)" }
        >
            <ul class="menu-list" style="list-style: none; margin: 0; padding: 56px 0 16px;">
                {move || {
                    store
                        .with(menu_entries)
                        .into_iter()
                        .map(|(identifier, name, link)| {
                            let on_click = move |e: web_sys::MouseEvent| {
                                e.prevent_default();
                                controller.dispatch(PopupEvent::MenuActivate(identifier.clone()));
                            };
                            view! {
                                <li>
                                    <a
                                        href=link
                                        style="display: block; padding: 10px 20px; color: #e2e0d8; text-decoration: none; font-family: 'Inter', system-ui, sans-serif; font-size: 0.92rem;"
                                        on:click=on_click
                                    >
                                        {name}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </aside>
    }
}

/// Hamburger control that opens and closes the drawer.
#[component]
pub fn DrawerToggle() -> impl IntoView {
    let MenuOpen(menu_open) = expect_context();

    view! {
        <button
            type="button"
            class="hamburger"
            aria-label="Menu"
            aria-controls="menu-sidebar"
            aria-expanded=move || menu_open.get().to_string()
            style="position: absolute; top: 12px; left: 12px; z-index: 21; width: 36px; height: 36px; background: #13161f; border: 1px solid #282c3e; border-radius: 6px; cursor: pointer; color: #e2e0d8; font-size: 1.2rem; line-height: 1;"
            on:click=move |e: web_sys::MouseEvent| {
                e.stop_propagation();
                menu_open.update(|open| *open = !*open);
            }
        >
            "\u{2630}"
        </button>
    }
}
