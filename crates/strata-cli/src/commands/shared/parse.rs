use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Read a JSON document from `path`.
pub fn read_json_file<T>(path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use strata_core::entities::FindingLocation;
    use strata_core::enums::GridUnitStatus;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn parses_snake_case_enum() {
        let status: GridUnitStatus = parse_enum("completed", "status").unwrap();
        assert_eq!(status, GridUnitStatus::Completed);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<GridUnitStatus>("backfilled", "status").unwrap_err();
        assert!(err.to_string().contains("invalid status 'backfilled'"));
    }

    #[test]
    fn reads_finding_locations_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("findings.json");
        std::fs::write(
            &path,
            r#"[{"finding_id": "fnd-1", "coordinate": {"latitude": -34.5, "longitude": -58.25}, "depth": 0.5}]"#,
        )
        .unwrap();

        let locations: Vec<FindingLocation> = read_json_file(&path).unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].finding_id, "fnd-1");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_json_file::<Vec<FindingLocation>>(Path::new("/no/such/findings.json"))
            .unwrap_err();
        assert!(err.to_string().contains("/no/such/findings.json"));
    }
}
