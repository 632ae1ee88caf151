use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::LayerType;

/// A named, toggle-able thematic layer. Presentational only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MapLayer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    pub visible: bool,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
    pub color: String,
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

/// A visible layer merged with the live size of its data source.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RenderableLayer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    pub opacity: f64,
    pub color: String,
    pub icon: String,
    pub feature_count: usize,
}
