//! Test fixtures for the oro workspace: belief factories and golden datasets.
//!
//! Factories mirror the defaults of the upstream belief row factory so that
//! tests across crates build beliefs the same way.

pub mod factories;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

pub use factories::{chain_links, linear_chain, BeliefFactory};

/// Golden freshness datasets shipped with this crate.
pub const GOLDEN_FRESHNESS: [&str; 2] = ["scenarios", "chains"];

/// Directory of this crate, fixed at compile time so every workspace
/// member resolves the same files.
fn fixtures_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Path of a golden freshness dataset by name, e.g. `"scenarios"`.
pub fn golden_path(name: &str) -> PathBuf {
    fixtures_root()
        .join("golden")
        .join("freshness")
        .join(format!("{name}.json"))
}

/// Deserialize a fixture file relative to the crate root.
///
/// # Panics
/// Panics with the offending path when the file is missing or malformed.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    read_json(&fixtures_root().join(relative_path))
}

/// A fixture file as untyped JSON.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Deserialize a golden freshness dataset by name.
pub fn load_golden<T: DeserializeOwned>(name: &str) -> T {
    read_json(&golden_path(name))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> T {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("fixture {} is not valid JSON for this type: {e}", path.display()))
}
