//! Calls into the Leaflet bridge script (`assets/leaflet_bridge.js`).
//!
//! Commands are pushed onto `window.hotelMapQueue`; the bridge drains the queue once Leaflet and the
//! map container are available, so calls made before the scripts finish loading are not lost.

use anyhow::Context;
use common::{map_view::MapViewConfig, marker_popup::MarkerPayload};
use dioxus::prelude::*;
use serde::Serialize;


#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapInitPayload<'a> {
    container_id: &'a str,
    #[serde(flatten)]
    config: &'a MapViewConfig,
}

fn bridge_command(name: &str, payload: &impl Serialize) -> anyhow::Result<String> {
    let name_js = serde_json::to_string(name)?;
    let payload_js = serde_json::to_string(payload).with_context(|| format!("failed to serialize {name} payload"))?;
    Ok(format!(
        "(window.hotelMapQueue = window.hotelMapQueue || []).push([{name_js}, {payload_js}]); return true;"
    ))
}

async fn send_command(name: &str, payload: &impl Serialize) -> anyhow::Result<()> {
    let js = bridge_command(name, payload)?;
    document::eval(&js)
        .await
        .map_err(|e| anyhow::anyhow!("leaflet bridge command {name} failed: {e:?}"))?;
    Ok(())
}

pub async fn init_map(container_id: &str, config: &MapViewConfig) -> anyhow::Result<()> {
    send_command("init", &MapInitPayload { container_id, config }).await
}

/// Replaces the markers on the map. The bridge reconciles by marker key.
pub async fn set_markers(markers: &[MarkerPayload]) -> anyhow::Result<()> {
    send_command("setMarkers", &markers).await
}
