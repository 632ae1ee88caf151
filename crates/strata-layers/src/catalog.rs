//! The thematic layers every site map starts with.

use strata_core::entities::MapLayer;
use strata_core::enums::LayerType;

/// Id of the catalog layer for `layer_type`, e.g. `findings-layer`.
#[must_use]
pub fn layer_id(layer_type: LayerType) -> String {
    format!("{}-layer", layer_type.as_str())
}

/// One visible layer per [`LayerType`], in catalog order.
#[must_use]
pub fn default_layers() -> Vec<MapLayer> {
    LayerType::ALL.iter().map(|&t| catalog_entry(t)).collect()
}

fn catalog_entry(layer_type: LayerType) -> MapLayer {
    let (name, color, icon, opacity, description) = match layer_type {
        LayerType::Sites => (
            "Sites",
            "#4F46E5",
            "landmark",
            1.0,
            "Archaeological sites of the project",
        ),
        LayerType::Findings => (
            "Findings",
            "#059669",
            "gem",
            1.0,
            "Finds and samples with recorded coordinates",
        ),
        LayerType::Chronology => (
            "Chronology",
            "#DC2626",
            "hourglass",
            0.8,
            "Dated contexts and periods",
        ),
        LayerType::Context => (
            "Environmental context",
            "#EA580C",
            "mountain",
            0.6,
            "Geology, vegetation and water sources",
        ),
        LayerType::Grid => (
            "Excavation grid",
            "#7C3AED",
            "grid",
            0.7,
            "Excavation units of the active grid",
        ),
    };

    MapLayer {
        id: layer_id(layer_type),
        name: name.to_string(),
        layer_type,
        visible: true,
        opacity,
        color: color.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
    }
}
