use thiserror::Error;

/// Errors raised while applying a furniture command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FurnitureError {
    /// The action verb is not one of remove/place/move/rotate.
    #[error("unknown furniture action '{0}'")]
    UnknownAction(String),
    /// The command names an object that is not in the scene.
    #[error("no object named '{0}' in the scene")]
    UnknownObject(String),
    /// `Place` named furniture the catalog does not know.
    #[error("no furniture called '{0}' in the catalog")]
    UnknownPrefab(String),
}

/// Errors emitted while loading a furniture catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Wrap IO errors when reading the catalog file.
    #[error("failed to read furniture catalog: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse furniture catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two entries share a name or alias.
    #[error("furniture name '{0}' is defined twice")]
    Duplicate(String),
}
