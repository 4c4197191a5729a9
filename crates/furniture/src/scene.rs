//! In-memory room: a floor, a camera, and named furniture.

use crate::CameraRig;
use glam::{Quat, Vec3};
use std::collections::BTreeMap;

/// Names that refer to the floor itself.
pub const FLOOR_NAMES: [&str; 2] = ["地板", "floor"];

/// Default floor footprint.
pub const DEFAULT_FLOOR_SIZE: Vec3 = Vec3::new(20.0, 0.1, 20.0);

/// A positioned object.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Lookup name.
    pub name: String,
    /// Centre position.
    pub position: Vec3,
    /// Orientation.
    pub rotation: Quat,
    /// Bounding size.
    pub size: Vec3,
    /// RGB color.
    pub color: [f32; 3],
}

impl SceneObject {
    /// Object at `position` with identity rotation.
    pub fn new(name: impl Into<String>, position: Vec3, size: Vec3, color: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            position,
            rotation: Quat::IDENTITY,
            size,
            color,
        }
    }

    /// Direction the object's front (+Z) faces.
    pub fn facing(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// The room.
#[derive(Debug, Clone)]
pub struct FurnitureScene {
    floor: SceneObject,
    camera: CameraRig,
    objects: BTreeMap<String, SceneObject>,
}

impl Default for FurnitureScene {
    fn default() -> Self {
        Self::new(DEFAULT_FLOOR_SIZE, 870.0)
    }
}

impl FurnitureScene {
    /// Empty room with a floor of `floor_size` at the origin and an overhead
    /// camera `camera_height` above it.
    pub fn new(floor_size: Vec3, camera_height: f32) -> Self {
        let floor = SceneObject::new(FLOOR_NAMES[0], Vec3::ZERO, floor_size, [0.8, 0.8, 0.8]);
        let camera = CameraRig::overhead(floor.position, camera_height);
        Self {
            floor,
            camera,
            objects: BTreeMap::new(),
        }
    }

    /// The floor.
    pub fn floor(&self) -> &SceneObject {
        &self.floor
    }

    /// The viewer camera.
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Mutable camera, for re-aiming the view.
    pub fn camera_mut(&mut self) -> &mut CameraRig {
        &mut self.camera
    }

    /// Look up furniture or the floor by name.
    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        let name = name.trim();
        if FLOOR_NAMES.contains(&name) {
            return Some(&self.floor);
        }
        self.objects.get(name)
    }

    /// Furniture lookup; never returns the floor.
    pub fn get(&self, name: &str) -> Option<&SceneObject> {
        self.objects.get(name.trim())
    }

    /// Mutable furniture lookup. The floor is not movable.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.get_mut(name.trim())
    }

    /// Add or replace an object.
    pub fn insert(&mut self, object: SceneObject) -> Option<SceneObject> {
        self.objects.insert(object.name.clone(), object)
    }

    /// Take an object out of the room.
    pub fn remove(&mut self, name: &str) -> Option<SceneObject> {
        self.objects.remove(name.trim())
    }

    /// Furniture in name order.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Number of furniture pieces.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the room is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
