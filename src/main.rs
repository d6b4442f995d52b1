//! Native desktop viewer for the constellation scene
//!
//! Run with: cargo run --bin constellation-viewer --features native

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use constellation_vis::app::ConstellationApp;
    use constellation_vis::{asset, sampler};
    use kurbo::Size;
    use tracing::warn;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,constellation_vis=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let svg_path = std::env::var("CONSTELLATION_SVG")
        .unwrap_or_else(|_| asset::DEFAULT_SVG_PATH.to_string());

    const WINDOW: Size = Size::new(1280.0, 720.0);

    // The silhouette is fitted to the initial window size, once. Load or
    // parse failure leaves the scene empty, buttons still shown.
    let points = asset::read_text(std::path::Path::new(&svg_path))
        .and_then(|text| sampler::sample_constellation(&text, WINDOW))
        .unwrap_or_else(|e| {
            warn!(error = %e, path = %svg_path, "Constellation asset unavailable");
            Vec::new()
        });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW.width as f32, WINDOW.height as f32])
            .with_title("constellation"),
        ..Default::default()
    };

    eframe::run_native(
        "constellation",
        options,
        Box::new(move |cc| Ok(Box::new(ConstellationApp::new(cc, points)))),
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
