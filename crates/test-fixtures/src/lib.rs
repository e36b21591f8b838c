//! Shared fixtures for NetCoupler tests: golden JSON files, seeded data
//! simulation, and a scripted model fitter.

pub mod scripted;
pub mod simulate;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub use scripted::ScriptedFitter;
pub use simulate::{simulate_chain, simulate_exposure_chain, Simulator};

/// Root directory of the golden files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use netcoupler_core::table::DataTable;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "golden directory not found");
    }

    #[test]
    fn all_golden_files_exist() {
        let files = [
            "network/chain_edges.json",
            "network/with_isolated.json",
            "tables/small_panel.json",
            "links/abc_scenario.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn all_golden_files_parse_as_json() {
        let mut total = 0;
        for dir in ["network", "tables", "links"] {
            for file in list_fixtures(dir) {
                let content = std::fs::read_to_string(&file)
                    .unwrap_or_else(|e| panic!("Failed to read {}: {}", file.display(), e));
                let _: serde_json::Value = serde_json::from_str(&content)
                    .unwrap_or_else(|e| panic!("Failed to parse {}: {}", file.display(), e));
                total += 1;
            }
        }
        assert_eq!(total, 4);
    }

    #[test]
    fn small_panel_loads_as_table() {
        let table: DataTable = load_fixture("tables/small_panel.json");
        assert_eq!(table.n_rows(), 6);
        assert_eq!(table.column_names(), &["exposure", "m1", "m2", "age", "sex"]);
        assert_eq!(table.numeric("m2").unwrap()[3], None);
    }
}
