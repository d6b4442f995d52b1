//! Constellation intro scene
//!
//! Points sampled from an SVG silhouette drift with sinusoidal jitter and
//! link up with their neighbors, forming a breathing particle web behind
//! the scene's Enter/Credits navigation.
//!
//! The silhouette is fetched and sampled once at startup; the animator then
//! redraws every display refresh for the lifetime of the page.

pub mod asset;
pub mod field;
pub mod sampler;
pub mod time;

#[cfg(any(feature = "wasm", feature = "native"))]
pub mod app;
#[cfg(any(feature = "wasm", feature = "native"))]
pub mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web {
    use crate::app::ConstellationApp;
    use crate::{asset, sampler};
    use kurbo::Size;
    use tracing::{info, warn};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        // Initialize tracing for browser console
        tracing_wasm::set_as_global_default();

        wasm_bindgen_futures::spawn_local(async {
            let window = web_sys::window().expect("no window");
            let canvas = window
                .document()
                .expect("no document")
                .get_element_by_id("canvas")
                .expect("no canvas element")
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .expect("not a canvas element");

            // Canvas pixel space is the viewport at load; the silhouette is
            // not re-fitted on resize
            let canvas_size = Size::new(
                window
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(800.0),
                window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(600.0),
            );

            let svg_url = js_sys::eval("window.__constellation_svg")
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| asset::DEFAULT_SVG_PATH.to_string());

            // Phase one: fetch and sample. A failure leaves the scene empty
            // but keeps the navigation buttons alive.
            let points = match load_points(&svg_url, canvas_size).await {
                Ok(points) => points,
                Err(e) => {
                    warn!(error = %e, url = %svg_url, "Constellation asset unavailable");
                    Vec::new()
                }
            };
            info!(points = points.len(), "Silhouette sampled, starting scene");

            // Phase two: run the per-frame loop for the page lifetime
            eframe::WebRunner::new()
                .start(
                    canvas,
                    eframe::WebOptions::default(),
                    Box::new(move |cc| Ok(Box::new(ConstellationApp::new(cc, points)))),
                )
                .await
                .expect("Failed to start eframe");
        });
    }

    async fn load_points(
        url: &str,
        canvas: Size,
    ) -> Result<Vec<kurbo::Point>, asset::AssetError> {
        let text = asset::fetch_text(url).await?;
        sampler::sample_constellation(&text, canvas)
    }
}
