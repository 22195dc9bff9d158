use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use tour_map_shared::{LocationStore, LocationsDocument};

/// Fetch the locations document.
pub async fn fetch_locations(url: &str) -> Result<LocationsDocument, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<LocationsDocument>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

/// Load the store once. On failure the store stays empty; there is no retry.
pub fn load_into(url: String, store: RwSignal<LocationStore>) {
    spawn_local(async move {
        let document = match fetch_locations(&url).await {
            Ok(document) => document,
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load data: {e}").into());
                return;
            }
        };

        let (loaded, skipped) = LocationStore::from_document(document);
        for record in &skipped {
            web_sys::console::warn_1(
                &format!("Skipping location #{}: {}", record.index, record.reason).into(),
            );
        }
        web_sys::console::info_1(&format!("locations_loaded={}", loaded.len()).into());
        store.set(loaded);
    });
}
