use leptos::prelude::*;

use tour_map_shared::LocationStore;

use crate::click_router;
use crate::config::WidgetConfig;
use crate::controller::PopupController;
use crate::loader;
use crate::menu::{DrawerToggle, MenuDrawer};
use crate::pins::Pins;
use crate::popup_view::Popup;

/// Newtype wrappers so each signal gets its own Leptos context slot.
#[derive(Clone, Copy)]
pub(crate) struct Locations(pub RwSignal<LocationStore>);
#[derive(Clone, Copy)]
pub(crate) struct MenuOpen(pub RwSignal<bool>);

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let locations: RwSignal<LocationStore> = RwSignal::new(LocationStore::default());
    let menu_open: RwSignal<bool> = RwSignal::new(false);
    let controller = PopupController::new();

    provide_context(Locations(locations));
    provide_context(MenuOpen(menu_open));

    // Load the location data once on mount.
    let data_url = config.data_url.clone();
    Effect::new(move || {
        loader::load_into(data_url.clone(), locations);
    });

    Effect::new(move || {
        click_router::install(menu_open, controller);
        on_cleanup(click_router::uninstall);
    });

    view! {
        <div
            class="map-wrapper"
            class:menu-open=move || menu_open.get()
            style="position: relative; width: 100%; overflow: hidden;"
        >
            <DrawerToggle />
            <MenuDrawer controller=controller />
            <div class="map-container" style="position: relative; width: 100%;">
                <img
                    class="map-image"
                    src=config.map_image_url
                    alt=config.map_alt
                    style="display: block; width: 100%; height: auto;"
                />
                <Pins controller=controller />
            </div>
            <Popup controller=controller />
        </div>
    }
}
