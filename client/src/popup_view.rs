use leptos::prelude::*;

use tour_map_shared::Location;

use crate::app::Locations;
use crate::config::POPUP_BUTTON_LABEL;
use crate::controller::PopupController;
use crate::popup::PopupEvent;

/// What the popup displays for one location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopupContent {
    pub name: String,
    /// `(src, alt)`; `None` hides the image slot.
    pub image: Option<(String, String)>,
    pub description_html: String,
    pub button_href: String,
    pub button_label: &'static str,
}

impl PopupContent {
    pub fn for_location(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            image: location
                .image_url()
                .map(|src| (src.to_string(), location.name.clone())),
            description_html: location.description.clone(),
            button_href: location.link.clone(),
            button_label: POPUP_BUTTON_LABEL,
        }
    }
}

/// The single shared popup. Content follows the active location.
#[component]
pub fn Popup(controller: PopupController) -> impl IntoView {
    let Locations(store) = expect_context();

    let content = Memo::new(move |_| {
        let Some(identifier) = controller.active_identifier() else {
            return PopupContent::default();
        };
        store
            .with(|store| store.get(&identifier).map(PopupContent::for_location))
            .unwrap_or_default()
    });

    let name = move || content.with(|c| c.name.clone());
    let image_src = move || {
        content.with(|c| c.image.as_ref().map(|(src, _)| src.clone()).unwrap_or_default())
    };
    let image_alt = move || {
        content.with(|c| c.image.as_ref().map(|(_, alt)| alt.clone()).unwrap_or_default())
    };
    let image_hidden = move || content.with(|c| c.image.is_none());

    view! {
        <div
            class="popup-overlay"
            class:visible=move || controller.is_visible()
            style="position: absolute; right: 24px; top: 50%; transform: translateY(-50%); z-index: 30;"
            style:display=move || if controller.is_visible() { "block" } else { "none" }
            on:mouseenter=move |_| controller.dispatch(PopupEvent::PopupEnter)
            on:mouseleave=move |_| controller.dispatch(PopupEvent::PopupLeave)
        >
            <div
                class="popup"
                style="width: 320px; background: #161921; border: 1px solid #282c3e; border-radius: 8px; overflow: hidden; box-shadow: 0 4px 16px rgba(0,0,0,0.5); color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif;"
            >
                <img
                    class="popup-image"
                    src=image_src
                    alt=image_alt
                    hidden=image_hidden
                    style="width: 100%; height: auto;"
                />
                <div style="padding: 14px 16px;">
                    <h2 class="popup-name" style="margin: 0 0 8px; font-size: 1.05rem;">{name}</h2>
                    <div
                        class="popup-description"
                        style="font-size: 0.85rem; line-height: 1.45;"
                        inner_html=move || content.with(|c| c.description_html.clone())
                    />
                    <a
                        class="popup-button"
                        href=move || content.with(|c| c.button_href.clone())
                        style="display: inline-block; margin-top: 12px; padding: 8px 14px; background: #f5c542; color: #13161f; border-radius: 4px; text-decoration: none; font-size: 0.78rem; font-weight: 700; letter-spacing: 0.04em;"
                    >
                        {move || content.with(|c| c.button_label)}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::PopupContent;
    use serde_json::json;
    use tour_map_shared::Location;

    fn location(value: serde_json::Value) -> Location {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn content_without_image_hides_image_slot() {
        let alpha = location(json!({
            "identifier": "a",
            "name": "Alpha",
            "description": "<p>A</p>",
            "link": "#a",
            "left": 10,
            "top": 20
        }));
        let content = PopupContent::for_location(&alpha);

        assert_eq!(content.name, "Alpha");
        assert_eq!(content.image, None);
        assert_eq!(content.description_html, "<p>A</p>");
        assert_eq!(content.button_href, "#a");
        assert_eq!(content.button_label, "ПОГЛЕДАЈ ВИРТУЕЛНУ ТУРУ");
    }

    #[test]
    fn blank_image_string_hides_image_slot() {
        let loc = location(json!({
            "identifier": "b", "name": "Beta", "left": 0, "top": 0, "image": ""
        }));
        assert_eq!(PopupContent::for_location(&loc).image, None);
    }

    #[test]
    fn image_uses_location_name_as_alt() {
        let loc = location(json!({
            "identifier": "c", "name": "Gamma", "left": 0, "top": 0, "image": "img/gamma.jpg"
        }));
        assert_eq!(
            PopupContent::for_location(&loc).image,
            Some(("img/gamma.jpg".to_string(), "Gamma".to_string()))
        );
    }

    #[test]
    fn description_markup_is_kept_verbatim() {
        let loc = location(json!({
            "identifier": "d", "name": "Delta", "left": 0, "top": 0,
            "description": "<strong>Open</strong> <em>daily</em><br>9&ndash;17"
        }));
        assert_eq!(
            PopupContent::for_location(&loc).description_html,
            "<strong>Open</strong> <em>daily</em><br>9&ndash;17"
        );
    }
}
