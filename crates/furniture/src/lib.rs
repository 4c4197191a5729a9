#![warn(missing_docs)]
//! Furniture placement from spoken commands.
//!
//! A command names an action (remove, place, move, rotate), one or two
//! objects, and optional direction/distance/angle tokens. The
//! [`FurnitureController`] resolves those tokens against the camera and the
//! floor and updates an in-memory [`FurnitureScene`].

pub mod camera;
pub mod catalog;
pub mod engine;
mod error;
pub mod scene;
pub mod tokens;

pub use camera::CameraRig;
pub use catalog::{FurnitureCatalog, FurnitureDefinition, Prefab};
pub use engine::{look_rotation, FurnitureCommand, FurnitureController, Outcome};
pub use error::{CatalogError, FurnitureError};
pub use scene::{FurnitureScene, SceneObject, DEFAULT_FLOOR_SIZE, FLOOR_NAMES};
pub use tokens::{distance_units, parse_angle, Action, Corner, Direction};
