use std::collections::BTreeMap;

use strata_core::entities::{MapLayer, RenderableLayer};
use strata_core::enums::LayerType;

use crate::error::LayerError;
use crate::source::LayerSource;

/// Render the visible layers, in input order, each with the live feature
/// count of its type's data source. A type without a source counts zero.
#[must_use]
pub fn compose(
    layers: &[MapLayer],
    sources: &BTreeMap<LayerType, &dyn LayerSource>,
) -> Vec<RenderableLayer> {
    layers
        .iter()
        .filter(|layer| layer.visible)
        .map(|layer| RenderableLayer {
            id: layer.id.clone(),
            name: layer.name.clone(),
            layer_type: layer.layer_type,
            opacity: layer.opacity,
            color: layer.color.clone(),
            icon: layer.icon.clone(),
            feature_count: sources
                .get(&layer.layer_type)
                .map_or(0, |source| source.feature_count()),
        })
        .collect()
}

/// Flip the visibility of the layer with `id` and return its new state.
///
/// # Errors
///
/// Returns `LayerError::NotFound` if no layer has that id; nothing changes.
pub fn toggle(layers: &mut [MapLayer], id: &str) -> Result<bool, LayerError> {
    let layer = find_mut(layers, id)?;
    layer.visible = !layer.visible;
    tracing::debug!(layer = id, visible = layer.visible, "toggled layer");
    Ok(layer.visible)
}

/// Set the opacity of the layer with `id`, clamped to `[0, 1]`. NaN counts
/// as fully transparent. Returns the stored value.
///
/// # Errors
///
/// Returns `LayerError::NotFound` if no layer has that id.
pub fn set_opacity(layers: &mut [MapLayer], id: &str, opacity: f64) -> Result<f64, LayerError> {
    let layer = find_mut(layers, id)?;
    layer.opacity = if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    };
    Ok(layer.opacity)
}

/// Ids of the layers currently hidden.
#[must_use]
pub fn hidden_ids(layers: &[MapLayer]) -> Vec<String> {
    layers
        .iter()
        .filter(|layer| !layer.visible)
        .map(|layer| layer.id.clone())
        .collect()
}

fn find_mut<'a>(layers: &'a mut [MapLayer], id: &str) -> Result<&'a mut MapLayer, LayerError> {
    layers
        .iter_mut()
        .find(|layer| layer.id == id)
        .ok_or_else(|| LayerError::NotFound { id: id.to_string() })
}
