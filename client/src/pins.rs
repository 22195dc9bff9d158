use leptos::prelude::*;

use tour_map_shared::{Location, LocationStore};

use crate::app::Locations;
use crate::controller::PopupController;
use crate::popup::PopupEvent;

/// Inline placement for a pin: percentage offsets plus optional stacking order.
pub fn pin_style(location: &Location) -> String {
    let mut style = format!("left: {}%; top: {}%;", location.left, location.top);
    if let Some(z) = location.z_index {
        style.push_str(&format!(" z-index: {z};"));
    }
    style
}

/// One entry per location, in store order.
pub fn pin_entries(store: &LocationStore) -> Vec<(String, String, String)> {
    store
        .iter()
        .map(|location| {
            (
                location.identifier.clone(),
                location.name.clone(),
                pin_style(location),
            )
        })
        .collect()
}

#[component]
pub fn Pins(controller: PopupController) -> impl IntoView {
    let Locations(store) = expect_context();

    view! {
        <div class="pins-container" style="position: absolute; inset: 0;">
            {move || {
                store
                    .with(pin_entries)
                    .into_iter()
                    .map(|(identifier, name, placement)| view! {
                        <Pin identifier=identifier name=name placement=placement controller=controller />
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn Pin(
    identifier: String,
    name: String,
    placement: String,
    controller: PopupController,
) -> impl IntoView {
    let on_enter = {
        let identifier = identifier.clone();
        move |_: web_sys::MouseEvent| controller.dispatch(PopupEvent::PinEnter(identifier.clone()))
    };
    let on_click = {
        let identifier = identifier.clone();
        move |e: web_sys::MouseEvent| {
            e.prevent_default();
            controller.dispatch(PopupEvent::PinActivate(identifier.clone()));
        }
    };
    let active_id = identifier.clone();

    view! {
        <button
            type="button"
            class="pin"
            class:pin-active=move || controller.is_active(&active_id)
            data-identifier=identifier
            aria-label=name
            style=format!("position: absolute; transform: translate(-50%, -100%); {placement}")
            on:mouseenter=on_enter
            on:mouseleave=move |_| controller.dispatch(PopupEvent::PinLeave)
            on:click=on_click
        ></button>
    }
}
