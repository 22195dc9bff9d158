#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::controller::PopupController;
use crate::popup::PopupEvent;

const POPUP_SELECTOR: &str = ".popup";
const PIN_SELECTOR: &str = ".pin";
const DRAWER_SELECTOR: &str = ".menu-sidebar";
const DRAWER_TOGGLE_SELECTOR: &str = ".hamburger";

/// Where a click landed, relative to the widget's interactive regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub in_popup: bool,
    pub on_pin: bool,
    pub in_drawer: bool,
    pub on_drawer_toggle: bool,
}

impl ClickTarget {
    /// Classify an event target. Anything that isn't an element is outside everything.
    pub fn from_event(event: &web_sys::Event) -> Self {
        let Some(element) = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return Self::default();
        };
        let within = |selector: &str| matches!(element.closest(selector), Ok(Some(_)));
        Self {
            in_popup: within(POPUP_SELECTOR),
            on_pin: within(PIN_SELECTOR),
            in_drawer: within(DRAWER_SELECTOR),
            on_drawer_toggle: within(DRAWER_TOGGLE_SELECTOR),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRoute {
    pub close_drawer: bool,
    pub dismiss_popup: bool,
}

/// Decide what a document click does. Both checks are independent.
pub fn route_click(target: ClickTarget, drawer_open: bool, popup_pinned: bool) -> ClickRoute {
    let close_drawer = drawer_open && !target.in_drawer && !target.on_drawer_toggle;
    let dismiss_popup = popup_pinned
        && !target.in_popup
        && !target.on_pin
        && !target.in_drawer
        && !target.on_drawer_toggle;
    ClickRoute {
        close_drawer,
        dismiss_popup,
    }
}

struct ClickBinding {
    document: web_sys::Document,
    _handler: Closure<dyn Fn(web_sys::MouseEvent)>,
}

thread_local! {
    static CLICK_BINDING: RefCell<Option<ClickBinding>> = const { RefCell::new(None) };
}

/// Install the document click listener, replacing any earlier one.
pub fn install(menu_open: RwSignal<bool>, controller: PopupController) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    uninstall();

    let handler = Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |e: web_sys::MouseEvent| {
        let target = ClickTarget::from_event(&e);
        let route = route_click(
            target,
            menu_open.get_untracked(),
            controller.is_pinned_untracked(),
        );
        if route.close_drawer {
            menu_open.set(false);
        }
        if route.dismiss_popup {
            controller.dispatch(PopupEvent::DismissClick);
        }
    });

    if document
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        CLICK_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(ClickBinding {
                document,
                _handler: handler,
            });
        });
    }
}

pub fn uninstall() {
    CLICK_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old.document.remove_event_listener_with_callback(
                "click",
                old._handler.as_ref().unchecked_ref(),
            );
        }
    });
}
