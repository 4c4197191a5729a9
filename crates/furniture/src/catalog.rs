//! Furniture catalog: what can be placed, how big it is, what color it gets.
//!
//! Catalog files are JSON arrays of definitions:
//!
//! ```json
//! [{ "name": "沙發", "aliases": ["sofa"], "size": [2.0, 0.9, 0.9] }]
//! ```

use crate::CatalogError;
use glam::Vec3;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::{fs, path::Path};
use tracing::debug;

/// Footprint used when a definition omits `size`.
pub const DEFAULT_SIZE: [f32; 3] = [1.0, 1.0, 1.0];

/// Color given to furniture without an assigned default.
pub const FALLBACK_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

const GRAY: [f32; 3] = [0.5, 0.5, 0.5];

/// One catalog entry as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct FurnitureDefinition {
    /// Canonical name.
    pub name: String,
    /// Other names that resolve to this entry.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Bounding size (x, y, z).
    #[serde(default = "default_size")]
    pub size: [f32; 3],
    /// RGB color; defaults by name when omitted.
    #[serde(default)]
    pub color: Option<[f32; 3]>,
}

fn default_size() -> [f32; 3] {
    DEFAULT_SIZE
}

/// A placeable piece of furniture.
#[derive(Debug, Clone, PartialEq)]
pub struct Prefab {
    /// Canonical name.
    pub name: String,
    /// Bounding size.
    pub size: Vec3,
    /// RGB color.
    pub color: [f32; 3],
}

/// Default color for a piece of furniture by canonical name.
pub fn default_color(name: &str) -> [f32; 3] {
    match name {
        "沙發" | "sofa" => [1.0, 0.0, 0.0],
        "餐桌" | "dining table" => [0.6, 0.4, 0.2],
        "椅子" | "chair" => [0.0, 0.0, 1.0],
        "床" | "bed" => [0.0, 1.0, 0.0],
        "花瓶" | "落地燈" | "電腦" | "電腦桌" | "電腦椅" | "vase" | "floor lamp" | "computer"
        | "computer desk" | "computer chair" => GRAY,
        _ => {
            debug!(name, "no default color assigned; using fallback");
            FALLBACK_COLOR
        }
    }
}

/// Name-indexed set of prefabs.
#[derive(Debug, Clone, Default)]
pub struct FurnitureCatalog {
    prefabs: Vec<Prefab>,
    index: BTreeMap<String, usize>,
}

impl FurnitureCatalog {
    /// Build a catalog from definitions, rejecting duplicate names.
    pub fn new(definitions: Vec<FurnitureDefinition>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for def in definitions {
            let slot = catalog.prefabs.len();
            for name in std::iter::once(&def.name).chain(def.aliases.iter()) {
                let key = name.trim().to_string();
                if catalog.index.insert(key.clone(), slot).is_some() {
                    return Err(CatalogError::Duplicate(key));
                }
            }
            let color = def.color.unwrap_or_else(|| default_color(&def.name));
            catalog.prefabs.push(Prefab {
                name: def.name,
                size: Vec3::from_array(def.size),
                color,
            });
        }
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(input: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<FurnitureDefinition> = serde_json::from_str(input)?;
        Self::new(definitions)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// The furniture the speech front-end knows about.
    pub fn builtin() -> Self {
        let entry = |name: &str, alias: &str, size: [f32; 3]| FurnitureDefinition {
            name: name.to_string(),
            aliases: vec![alias.to_string()],
            size,
            color: None,
        };
        let definitions = vec![
            entry("沙發", "sofa", [2.0, 0.9, 0.9]),
            entry("餐桌", "dining table", [1.6, 0.75, 0.9]),
            entry("椅子", "chair", [0.5, 0.9, 0.5]),
            entry("床", "bed", [2.0, 0.6, 1.6]),
            entry("花瓶", "vase", [0.3, 0.5, 0.3]),
            entry("落地燈", "floor lamp", [0.4, 1.7, 0.4]),
            entry("電腦", "computer", [0.5, 0.4, 0.2]),
            entry("電腦桌", "computer desk", [1.4, 0.75, 0.7]),
            entry("電腦椅", "computer chair", [0.6, 1.1, 0.6]),
        ];
        match Self::new(definitions) {
            Ok(catalog) => catalog,
            Err(err) => unreachable!("builtin catalog is valid: {err}"),
        }
    }

    /// Look up by name or alias.
    pub fn get(&self, name: &str) -> Option<&Prefab> {
        self.index.get(name.trim()).map(|&slot| &self.prefabs[slot])
    }

    /// Number of distinct prefabs.
    pub fn len(&self) -> usize {
        self.prefabs.len()
    }

    /// True when nothing can be placed.
    pub fn is_empty(&self) -> bool {
        self.prefabs.is_empty()
    }
}
