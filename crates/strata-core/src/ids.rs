//! ID prefixes and generation.
//!
//! IDs have the shape `{prefix}-{8 hex chars}`, e.g. `msr-3fa4b2c1`.

use crate::errors::CoreError;

pub const PREFIX_GRID: &str = "grd";
pub const PREFIX_MEASUREMENT: &str = "msr";

/// Generate a new prefixed random identifier.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|error| anyhow::anyhow!("failed to read random bytes for id: {error}"))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_has_prefix_and_hex_suffix() {
        let id = generate_id(PREFIX_MEASUREMENT).unwrap();
        assert!(id.starts_with("msr-"), "unexpected id: {id}");
        assert_eq!(id.len(), 12);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_ids_differ() {
        let a = generate_id(PREFIX_GRID).unwrap();
        let b = generate_id(PREFIX_GRID).unwrap();
        assert_ne!(a, b);
    }
}
