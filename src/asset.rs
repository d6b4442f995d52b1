//! Asset loading for the SVG silhouette
//!
//! One fetch (browser) or file read (native), attempted exactly once.
//! A failure means the effect simply never gets its points; the caller
//! decides how loud to be about it.

use thiserror::Error;

/// Default location of the silhouette asset, relative to the page / cwd.
pub const DEFAULT_SVG_PATH: &str = "assets/earth.svg";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to fetch asset: {0}")]
    Fetch(String),
    #[error("failed to read asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse SVG: {0}")]
    Svg(#[from] usvg::Error),
}

/// Fetch the asset as text via the browser `fetch` API.
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub async fn fetch_text(url: &str) -> Result<String, AssetError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| AssetError::Fetch("no window".into()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| AssetError::Fetch("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(AssetError::Fetch(format!(
            "HTTP {} fetching {url}",
            response.status()
        )));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| AssetError::Fetch("response body is not text".into()))
}

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
fn js_error(e: wasm_bindgen::JsValue) -> AssetError {
    AssetError::Fetch(format!("{e:?}"))
}

/// Read the asset from disk (native viewer).
#[cfg(not(target_arch = "wasm32"))]
pub fn read_text(path: &std::path::Path) -> Result<String, AssetError> {
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_missing_file_is_an_io_error() {
        let err = read_text(std::path::Path::new("no/such/asset.svg")).unwrap_err();
        assert!(matches!(err, AssetError::Io(_)));
    }
}
