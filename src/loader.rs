use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::core::scene::{fallback_room, SceneDoc};

/// Fetch and parse the room description. Any failure, network or schema,
/// silently falls back to the procedural room so the experience always runs.
pub async fn load_scene(url: &str) -> SceneDoc {
    match fetch_scene(url).await {
        Ok(doc) => {
            log::info!("[loader] scene '{}' loaded, {} meshes", url, doc.meshes.len());
            doc
        }
        Err(e) => {
            log::warn!("[loader] scene '{}' unavailable ({}), using fallback room", url, e);
            fallback_room()
        }
    }
}

async fn fetch_scene(url: &str) -> anyhow::Result<SceneDoc> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch failed: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("http status {}", resp.status());
    }
    let text_promise = resp
        .text()
        .map_err(|e| anyhow::anyhow!("text() failed: {:?}", e))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow::anyhow!("body read failed: {:?}", e))?;
    let text = text_value
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("body is not a string"))?;
    SceneDoc::parse(&text)
}
