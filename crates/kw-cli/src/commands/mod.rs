pub mod check;
pub mod interpret;
pub mod list;

use std::path::Path;

use kw_core::{ParseCandidate, WorldState};

/// Load and validate a scene snapshot from a JSON file.
fn load_world(path: &Path) -> Result<WorldState, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("invalid scene {}: {e}", path.display()))
}

/// Load parse candidates from a JSON file.
fn load_parses(path: &Path) -> Result<Vec<ParseCandidate>, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("invalid parses {}: {e}", path.display()))
}
