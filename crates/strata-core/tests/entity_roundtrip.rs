//! Serde roundtrip and JsonSchema validation tests for the entity types.
//!
//! Coordinates use binary-exact values so float roundtrips compare equal.

use chrono::Utc;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use strata_core::Coordinate;
use strata_core::entities::*;
use strata_core::enums::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(recovered, val, "serde roundtrip failed for {}", stringify!($ty));

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn square(south: f64, west: f64, side: f64) -> Vec<Coordinate> {
    let sw = Coordinate::new(south, west);
    vec![
        sw,
        Coordinate::new(south, west + side),
        Coordinate::new(south + side, west + side),
        Coordinate::new(south + side, west),
        sw,
    ]
}

roundtrip_and_validate!(
    measurement_roundtrip,
    Measurement,
    Measurement {
        id: "msr-a3f8b2c1".into(),
        kind: MeasurementMode::Distance,
        points: vec![Coordinate::new(-34.5, -58.25), Coordinate::new(-34.5, -58.125)],
        value: 11_470.5,
        unit: "m".into(),
        label: "Distance: 11470.50 m".into(),
        created_at: Utc::now(),
        site_id: Some("site-1".into()),
    }
);

roundtrip_and_validate!(
    grid_system_roundtrip,
    GridSystem,
    GridSystem {
        id: "grd-00ff00ff".into(),
        site_id: None,
        origin: Coordinate::new(-34.5, -58.25),
        cell_size: 5.0,
        rows: 1,
        cols: 1,
        orientation: 0.0,
        cells: vec![GridCell {
            label: "A1".into(),
            row: 0,
            col: 0,
            polygon: square(-34.5, -58.25, 0.125),
            center: Coordinate::new(-34.4375, -58.1875),
            size_m: 5.0,
            status: GridUnitStatus::Active,
            excavated: true,
            depth: 0.75,
            finding_ids: vec!["fnd-1".into()],
            soil_layers: vec![SoilLayer {
                depth: 0.5,
                description: "dark brown silty loam".into(),
                finding_ids: vec!["fnd-1".into()],
            }],
            notes: Some("hearth feature in NE quadrant".into()),
        }],
    }
);

roundtrip_and_validate!(
    map_layer_roundtrip,
    MapLayer,
    MapLayer {
        id: "grid-layer".into(),
        name: "Excavation grid".into(),
        layer_type: LayerType::Grid,
        visible: true,
        opacity: 0.5,
        color: "#7C3AED".into(),
        icon: "grid".into(),
        description: String::new(),
    }
);

roundtrip_and_validate!(
    binning_report_roundtrip,
    BinningReport,
    BinningReport {
        cells: vec![CellAggregate {
            label: "B2".into(),
            finding_count: 2,
            excavated: true,
            min_depth: Some(0.25),
            max_depth: Some(1.5),
            finding_ids: vec!["fnd-1".into(), "fnd-2".into()],
        }],
        unassigned: vec![UnassignedFindingWarning {
            finding_id: "fnd-9".into(),
            coordinate: Coordinate::new(10.0, 10.0),
            depth: 0.0,
        }],
        invalid_depth: vec![InvalidDepthWarning {
            finding_id: "fnd-10".into(),
            depth: -0.5,
        }],
    }
);

roundtrip_and_validate!(
    site_context_roundtrip,
    SiteContext,
    SiteContext::new(Coordinate::new(-34.5, -58.25), GridConfig::default()).with_site_id("site-7")
);

#[test]
fn measurement_serializes_kind_as_type() {
    let measurement = Measurement {
        id: "msr-00000000".into(),
        kind: MeasurementMode::Area,
        points: Vec::new(),
        value: 0.0,
        unit: "m²".into(),
        label: String::new(),
        created_at: Utc::now(),
        site_id: None,
    };
    let json = serde_json::to_value(&measurement).unwrap();
    assert_eq!(json["type"], "area");
    assert!(json.get("kind").is_none());
}

#[test]
fn grid_cell_metadata_defaults_when_missing() {
    let json = serde_json::json!({
        "label": "C3",
        "row": 2,
        "col": 2,
        "polygon": [],
        "center": {"latitude": 0.0, "longitude": 0.0},
        "size_m": 1.0
    });
    let cell: GridCell = serde_json::from_value(json).unwrap();
    assert_eq!(cell.status, GridUnitStatus::Planned);
    assert!(!cell.excavated);
    assert_eq!(cell.depth, 0.0);
    assert!(cell.soil_layers.is_empty());
}
