//! Applies furniture commands to a [`FurnitureScene`].
//!
//! Commands are independent of each other except for one piece of memory:
//! the last distance token sets the step used by later commands until a new
//! distance replaces it. Corner commands never change that step.

use crate::tokens::{distance_units, parse_angle, Action, Direction, DEFAULT_DISTANCE};
use crate::{FurnitureCatalog, FurnitureError, FurnitureScene, SceneObject};
use glam::{Quat, Vec3};
use std::fmt;
use tracing::{debug, warn};

/// Positions closer than this are treated as the same point.
const COINCIDENT_EPSILON: f32 = 1e-6;

/// A decoded furniture instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct FurnitureCommand {
    /// What to do.
    pub action: Action,
    /// Object acted on.
    pub object1: String,
    /// Optional reference object.
    pub object2: Option<String>,
    /// Optional direction.
    pub direction: Option<Direction>,
    /// Raw distance token.
    pub distance: Option<String>,
    /// Raw angle token.
    pub angle: Option<String>,
}

impl FurnitureCommand {
    /// A command with only an action and a subject.
    pub fn new(action: Action, object1: impl Into<String>) -> Self {
        Self {
            action,
            object1: object1.into(),
            object2: None,
            direction: None,
            distance: None,
            angle: None,
        }
    }
}

/// What a command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The object was deleted.
    Removed {
        /// Object name.
        name: String,
    },
    /// The object was created at `position`.
    Placed {
        /// Object name.
        name: String,
        /// Final position.
        position: Vec3,
    },
    /// The object was shifted.
    Moved {
        /// Object name.
        name: String,
        /// Position before.
        from: Vec3,
        /// Position after.
        to: Vec3,
    },
    /// The object was turned.
    Rotated {
        /// Object name.
        name: String,
        /// Orientation after.
        rotation: Quat,
    },
    /// Nothing changed.
    Unchanged {
        /// Object name.
        name: String,
        /// Why.
        reason: String,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Removed { name } => write!(f, "Removed {name}"),
            Outcome::Placed { name, position } => write!(
                f,
                "Placed {name} at {:.2} {:.2} {:.2}",
                position.x, position.y, position.z
            ),
            Outcome::Moved { name, to, .. } => {
                write!(f, "Moved {name} to {:.2} {:.2} {:.2}", to.x, to.y, to.z)
            }
            Outcome::Rotated { name, rotation } => {
                let facing = *rotation * Vec3::Z;
                write!(
                    f,
                    "Rotated {name} to face {:.2} {:.2} {:.2}",
                    facing.x, facing.y, facing.z
                )
            }
            Outcome::Unchanged { name, reason } => write!(f, "{name} unchanged: {reason}"),
        }
    }
}

/// Orientation whose +Z axis points along `direction`, keeping +Y up.
pub fn look_rotation(direction: Vec3) -> Quat {
    let dir = direction.normalize();
    let yaw = dir.x.atan2(dir.z);
    let pitch = -dir.y.clamp(-1.0, 1.0).asin();
    Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch)
}

/// Owns the scene and applies commands to it.
#[derive(Debug, Clone)]
pub struct FurnitureController {
    scene: FurnitureScene,
    catalog: FurnitureCatalog,
    default_offset: f32,
}

impl FurnitureController {
    /// Controller over `scene` placing furniture from `catalog`.
    pub fn new(scene: FurnitureScene, catalog: FurnitureCatalog) -> Self {
        Self {
            scene,
            catalog,
            default_offset: DEFAULT_DISTANCE,
        }
    }

    /// Start with a different remembered step.
    pub fn with_default_offset(mut self, offset: f32) -> Self {
        self.default_offset = offset;
        self
    }

    /// The room.
    pub fn scene(&self) -> &FurnitureScene {
        &self.scene
    }

    /// Mutable room access.
    pub fn scene_mut(&mut self) -> &mut FurnitureScene {
        &mut self.scene
    }

    /// Step currently applied to directional commands.
    pub fn default_offset(&self) -> f32 {
        self.default_offset
    }

    /// Apply one command.
    pub fn apply(&mut self, cmd: &FurnitureCommand) -> Result<Outcome, FurnitureError> {
        let is_corner = cmd.direction.is_some_and(Direction::is_corner);
        if let Some(token) = cmd.distance.as_deref().filter(|t| !t.trim().is_empty()) {
            if !is_corner {
                self.default_offset = distance_units(token);
                debug!(offset = self.default_offset, token, "distance updated");
            }
        }

        match cmd.action {
            Action::Remove => self.remove(&cmd.object1),
            Action::Place => self.place(cmd),
            Action::Move => self.shift(cmd),
            Action::Rotate => self.rotate(cmd),
        }
    }

    fn remove(&mut self, name: &str) -> Result<Outcome, FurnitureError> {
        self.scene
            .remove(name)
            .map(|object| Outcome::Removed { name: object.name })
            .ok_or_else(|| FurnitureError::UnknownObject(name.to_string()))
    }

    fn place(&mut self, cmd: &FurnitureCommand) -> Result<Outcome, FurnitureError> {
        let prefab = self
            .catalog
            .get(&cmd.object1)
            .ok_or_else(|| FurnitureError::UnknownPrefab(cmd.object1.clone()))?;
        let size = prefab.size;
        let color = prefab.color;

        self.scene.remove(&cmd.object1);
        let position = self.placement_position(cmd.direction, size);
        let name = cmd.object1.trim().to_string();
        self.scene
            .insert(SceneObject::new(name.clone(), position, size, color));
        Ok(Outcome::Placed { name, position })
    }

    fn shift(&mut self, cmd: &FurnitureCommand) -> Result<Outcome, FurnitureError> {
        let from = self.subject_position(&cmd.object1)?;
        let reference = match cmd.direction {
            Some(Direction::Center) => Some(self.scene.floor().position),
            _ => None,
        };
        let step = self.direction_vector(cmd.direction, from, reference) * self.default_offset;
        let to = from + step;

        if let Some(object) = self.scene.find_mut(&cmd.object1) {
            object.position = to;
        }
        Ok(Outcome::Moved {
            name: cmd.object1.trim().to_string(),
            from,
            to,
        })
    }

    fn rotate(&mut self, cmd: &FurnitureCommand) -> Result<Outcome, FurnitureError> {
        let position = self.subject_position(&cmd.object1)?;
        let name = cmd.object1.trim().to_string();

        let target = match (cmd.direction, cmd.object2.as_deref()) {
            (Some(Direction::Center), _) => Some(self.scene.floor().position),
            (_, Some(other)) if !other.trim().is_empty() => {
                let found = self.scene.find(other).map(|object| object.position);
                if found.is_none() {
                    warn!(look_at = other, "look target not in the scene; turning by angle");
                }
                found
            }
            _ => None,
        };

        let rotation = match target {
            Some(target) => {
                let look = target - position;
                if look.length_squared() < COINCIDENT_EPSILON {
                    warn!(object = %name, "target coincides with the object; cannot face it");
                    return Ok(Outcome::Unchanged {
                        name,
                        reason: "target is at the same position".to_string(),
                    });
                }
                look_rotation(look)
            }
            None => {
                let degrees = parse_angle(cmd.angle.as_deref());
                let current = self
                    .scene
                    .find(&name)
                    .map_or(Quat::IDENTITY, |object| object.rotation);
                current * Quat::from_rotation_y(degrees.to_radians())
            }
        };

        if let Some(object) = self.scene.find_mut(&name) {
            object.rotation = rotation;
        }
        Ok(Outcome::Rotated { name, rotation })
    }

    fn subject_position(&self, name: &str) -> Result<Vec3, FurnitureError> {
        self.scene
            .get(name)
            .map(|object| object.position)
            .ok_or_else(|| FurnitureError::UnknownObject(name.to_string()))
    }

    /// Unit vector for `direction`. Planar directions follow the camera;
    /// up, down and corners are world-fixed. `Center` points from `from`
    /// toward `reference`. Missing directions fall back to camera-right.
    pub fn direction_vector(
        &self,
        direction: Option<Direction>,
        from: Vec3,
        reference: Option<Vec3>,
    ) -> Vec3 {
        let camera = self.scene.camera();
        match direction {
            Some(Direction::Left) => -camera.planar_right(),
            Some(Direction::Right) | Some(Direction::Beside) | None => camera.planar_right(),
            Some(Direction::Front) => camera.planar_forward(),
            Some(Direction::Back) => -camera.planar_forward(),
            Some(Direction::Up) => Vec3::Y,
            Some(Direction::Down) => -Vec3::Y,
            Some(Direction::Center) => reference
                .map(|target| (target - from).normalize_or_zero())
                .unwrap_or(Vec3::ZERO),
            Some(Direction::Corner(corner)) => {
                let (x, z) = corner.signs();
                Vec3::new(x, 0.0, z).normalize()
            }
        }
    }

    /// Where `Place` puts an object of footprint `size`.
    ///
    /// Corners inset the object by half its footprint so it sits inside the
    /// floor; `Center` is the floor centre; anything else is one remembered
    /// step from the centre along the direction.
    pub fn placement_position(&self, direction: Option<Direction>, size: Vec3) -> Vec3 {
        let floor = self.scene.floor();
        let base = floor.position;
        match direction {
            Some(Direction::Corner(corner)) => {
                let (sx, sz) = corner.signs();
                let half_floor = floor.size * 0.5;
                let half_object = size * 0.5;
                base + Vec3::new(
                    sx * (half_floor.x - half_object.x),
                    0.0,
                    sz * (half_floor.z - half_object.z),
                )
            }
            Some(Direction::Center) => base,
            other => base + self.direction_vector(other, base, None) * self.default_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Corner;

    fn controller() -> FurnitureController {
        FurnitureController::new(FurnitureScene::default(), FurnitureCatalog::builtin())
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn look_rotation_points_z_at_target() {
        for dir in [Vec3::X, -Vec3::Z, Vec3::new(1.0, 1.0, 1.0), Vec3::new(-2.0, -0.5, 3.0)] {
            let rotation = look_rotation(dir);
            assert!(approx(rotation * Vec3::Z, dir.normalize()), "{dir:?}");
        }
    }

    #[test]
    fn place_on_the_left_uses_camera_axes() {
        let mut ctl = controller();
        let mut cmd = FurnitureCommand::new(Action::Place, "sofa");
        cmd.direction = Some(Direction::Left);
        cmd.distance = Some("some".to_string());
        let outcome = ctl.apply(&cmd).unwrap();
        assert_eq!(
            outcome,
            Outcome::Placed {
                name: "sofa".to_string(),
                position: Vec3::new(-10.0, 0.0, 0.0)
            }
        );
        assert_eq!(ctl.default_offset(), 10.0);
    }

    #[test]
    fn corner_placement_is_inset_and_keeps_distance() {
        let mut ctl = controller().with_default_offset(0.1);
        let mut cmd = FurnitureCommand::new(Action::Place, "bed");
        cmd.direction = Some(Direction::Corner(Corner::LowerRight));
        cmd.distance = Some("some".to_string());
        let Outcome::Placed { position, .. } = ctl.apply(&cmd).unwrap() else {
            panic!("expected placement");
        };
        // Bed footprint is 2.0 x 1.6 on a 20 x 20 floor.
        assert!(approx(position, Vec3::new(9.0, 0.0, -9.2)));
        assert_eq!(ctl.default_offset(), 0.1);
    }

    #[test]
    fn move_uses_remembered_distance() {
        let mut ctl = controller();
        ctl.apply(&FurnitureCommand::new(Action::Place, "chair")).unwrap();

        let mut cmd = FurnitureCommand::new(Action::Move, "chair");
        cmd.direction = Some(Direction::Front);
        cmd.distance = Some("a little bit".to_string());
        ctl.apply(&cmd).unwrap();

        cmd.distance = None;
        cmd.direction = Some(Direction::Up);
        let outcome = ctl.apply(&cmd).unwrap();
        let Outcome::Moved { to, .. } = outcome else {
            panic!("expected move");
        };
        // Placed one unit right of centre, then 0.1 forward and 0.1 up.
        assert!(approx(to, Vec3::new(1.0, 0.1, 0.1)));
    }

    #[test]
    fn move_toward_center() {
        let mut ctl = controller();
        let mut place = FurnitureCommand::new(Action::Place, "vase");
        place.direction = Some(Direction::Front);
        place.distance = Some("some".to_string());
        ctl.apply(&place).unwrap();

        let mut cmd = FurnitureCommand::new(Action::Move, "vase");
        cmd.direction = Some(Direction::Center);
        cmd.distance = Some("a bit".to_string());
        let Outcome::Moved { from, to, .. } = ctl.apply(&cmd).unwrap() else {
            panic!("expected move");
        };
        assert!(approx(from, Vec3::new(0.0, 0.0, 10.0)));
        assert!(approx(to, Vec3::new(0.0, 0.0, 9.0)));
    }

    #[test]
    fn rotate_by_angle_accumulates() {
        let mut ctl = controller();
        ctl.apply(&FurnitureCommand::new(Action::Place, "chair")).unwrap();
        let mut cmd = FurnitureCommand::new(Action::Rotate, "chair");
        cmd.angle = Some("45度".to_string());
        ctl.apply(&cmd).unwrap();
        ctl.apply(&cmd).unwrap();
        let facing = ctl.scene().find("chair").unwrap().facing();
        assert!(approx(facing, Vec3::X));
    }

    #[test]
    fn rotate_toward_another_object() {
        let mut ctl = controller();
        ctl.apply(&FurnitureCommand::new(Action::Place, "chair")).unwrap();
        let mut table = FurnitureCommand::new(Action::Place, "dining table");
        table.direction = Some(Direction::Left);
        ctl.apply(&table).unwrap();

        let mut cmd = FurnitureCommand::new(Action::Rotate, "chair");
        cmd.object2 = Some("dining table".to_string());
        ctl.apply(&cmd).unwrap();
        assert!(approx(ctl.scene().find("chair").unwrap().facing(), -Vec3::X));
    }

    #[test]
    fn rotate_toward_missing_object_turns_by_angle() {
        let mut ctl = controller();
        ctl.apply(&FurnitureCommand::new(Action::Place, "chair")).unwrap();

        let mut cmd = FurnitureCommand::new(Action::Rotate, "chair");
        cmd.object2 = Some("piano".to_string());
        cmd.angle = Some("90".to_string());
        assert!(matches!(ctl.apply(&cmd).unwrap(), Outcome::Rotated { .. }));
        assert!(approx(ctl.scene().find("chair").unwrap().facing(), Vec3::X));
    }

    #[test]
    fn rotate_toward_coincident_object_is_a_no_op() {
        let mut ctl = controller();
        ctl.apply(&FurnitureCommand::new(Action::Place, "chair")).unwrap();
        ctl.apply(&FurnitureCommand::new(Action::Place, "vase")).unwrap();

        let mut cmd = FurnitureCommand::new(Action::Rotate, "chair");
        cmd.object2 = Some("vase".to_string());
        let outcome = ctl.apply(&cmd).unwrap();
        assert!(matches!(outcome, Outcome::Unchanged { .. }));
        assert_eq!(ctl.scene().find("chair").unwrap().rotation, Quat::IDENTITY);
    }

    #[test]
    fn missing_objects_and_prefabs_are_reported() {
        let mut ctl = controller();
        assert_eq!(
            ctl.apply(&FurnitureCommand::new(Action::Remove, "sofa")),
            Err(FurnitureError::UnknownObject("sofa".to_string()))
        );
        assert_eq!(
            ctl.apply(&FurnitureCommand::new(Action::Move, "sofa")),
            Err(FurnitureError::UnknownObject("sofa".to_string()))
        );
        assert_eq!(
            ctl.apply(&FurnitureCommand::new(Action::Place, "piano")),
            Err(FurnitureError::UnknownPrefab("piano".to_string()))
        );
        assert!(ctl.scene().is_empty());
    }

    #[test]
    fn place_replaces_and_remove_deletes() {
        let mut ctl = controller();
        ctl.apply(&FurnitureCommand::new(Action::Place, "床")).unwrap();
        let mut again = FurnitureCommand::new(Action::Place, "床");
        again.direction = Some(Direction::Center);
        ctl.apply(&again).unwrap();
        assert_eq!(ctl.scene().len(), 1);
        assert_eq!(ctl.scene().find("床").unwrap().position, Vec3::ZERO);

        let outcome = ctl.apply(&FurnitureCommand::new(Action::Remove, "床")).unwrap();
        assert_eq!(outcome.to_string(), "Removed 床");
        assert!(ctl.scene().is_empty());
    }
}
