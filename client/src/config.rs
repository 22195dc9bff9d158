pub const DATA_PATH: &str = "assets/data.json";
/// Bumped whenever the data file changes so cached copies are not reused.
pub const DATA_VERSION: &str = "1.0.3";
pub const DEFAULT_MAP_IMAGE: &str = "assets/map.jpg";

/// Fixed label of the popup call-to-action.
pub const POPUP_BUTTON_LABEL: &str = "ПОГЛЕДАЈ ВИРТУЕЛНУ ТУРУ";

const ATTR_LOCATIONS_URL: &str = "data-locations-url";
const ATTR_MAP_IMAGE: &str = "data-map-image";
const ATTR_MAP_ALT: &str = "data-map-alt";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub data_url: String,
    pub map_image_url: String,
    pub map_alt: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            data_url: format!("{DATA_PATH}?v={DATA_VERSION}"),
            map_image_url: DEFAULT_MAP_IMAGE.to_string(),
            map_alt: String::new(),
        }
    }
}

impl WidgetConfig {
    /// Read overrides from the mount element's `data-*` attributes.
    pub fn from_element(element: &web_sys::Element) -> Self {
        Self::from_lookup(|name| element.get_attribute(name))
    }

    /// Build from an attribute lookup. Missing or blank values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            data_url: read(ATTR_LOCATIONS_URL).unwrap_or(defaults.data_url),
            map_image_url: read(ATTR_MAP_IMAGE).unwrap_or(defaults.map_image_url),
            map_alt: read(ATTR_MAP_ALT).unwrap_or(defaults.map_alt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WidgetConfig;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn default_data_url_is_versioned() {
        assert_eq!(
            WidgetConfig::default().data_url,
            "assets/data.json?v=1.0.3"
        );
    }

    #[test]
    fn no_attributes_yields_defaults() {
        assert_eq!(WidgetConfig::from_lookup(lookup(&[])), WidgetConfig::default());
    }

    #[test]
    fn attributes_override_defaults() {
        let config = WidgetConfig::from_lookup(lookup(&[
            ("data-locations-url", "/static/places.json"),
            ("data-map-image", "/static/campus.png"),
            ("data-map-alt", "Campus map"),
        ]));
        assert_eq!(config.data_url, "/static/places.json");
        assert_eq!(config.map_image_url, "/static/campus.png");
        assert_eq!(config.map_alt, "Campus map");
    }

    #[test]
    fn blank_attributes_are_ignored() {
        let config = WidgetConfig::from_lookup(lookup(&[
            ("data-locations-url", "   "),
            ("data-map-image", ""),
        ]));
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn attribute_values_are_trimmed() {
        let config = WidgetConfig::from_lookup(lookup(&[("data-map-image", "  a.jpg \n")]));
        assert_eq!(config.map_image_url, "a.jpg");
    }
}
