mod app;
mod click_router;
mod config;
mod controller;
mod hide_timer;
mod loader;
mod menu;
mod pins;
mod popup;
mod popup_view;

use leptos::mount::mount_to;
use leptos::prelude::*;
use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::JsCast;

use crate::config::WidgetConfig;

thread_local! {
    static APP_MOUNT_HANDLE: RefCell<Option<Box<dyn Any>>> = RefCell::new(None);
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let mount_target = document
        .get_element_by_id("app")
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(target) = mount_target else {
        return;
    };
    let config = WidgetConfig::from_element(&target);

    APP_MOUNT_HANDLE.with(move |slot| {
        // A second main() (dev reload) must not leave the old widget's listeners alive.
        let _old = slot.borrow_mut().take();
        let handle = mount_to(target, move || view! { <app::App config=config /> });
        *slot.borrow_mut() = Some(Box::new(handle));
    });
}
