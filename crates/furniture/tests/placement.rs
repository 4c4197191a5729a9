//! Placement scenarios against a floor of known size.

use glam::Vec3;
use tabletalk_furniture::{
    Action, Direction, FurnitureCatalog, FurnitureCommand, FurnitureController, FurnitureScene,
    Outcome,
};

fn controller_with_crate() -> FurnitureController {
    let catalog = FurnitureCatalog::from_json_str(
        r#"[{ "name": "crate", "size": [2.0, 1.0, 2.0] }]"#,
    )
    .expect("catalog parses");
    let scene = FurnitureScene::new(Vec3::new(20.0, 0.1, 20.0), 870.0);
    FurnitureController::new(scene, catalog)
}

fn place(ctl: &mut FurnitureController, token: &str) -> Vec3 {
    let mut cmd = FurnitureCommand::new(Action::Place, "crate");
    cmd.direction = Direction::parse(token);
    match ctl.apply(&cmd).expect("placement succeeds") {
        Outcome::Placed { position, .. } => position,
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn corner_upper_left_is_inset_by_half_the_footprint() {
    let mut ctl = controller_with_crate();
    let position = place(&mut ctl, "corner-upper-left");

    // True corner is (-10, 10); a 2x2 crate sits 1 unit inside on both axes.
    assert_eq!(position, Vec3::new(-9.0, 0.0, 9.0));
}

#[test]
fn every_corner_stays_on_the_floor() {
    let mut ctl = controller_with_crate();
    let expected = [
        ("左上角", Vec3::new(-9.0, 0.0, 9.0)),
        ("右上角", Vec3::new(9.0, 0.0, 9.0)),
        ("左下角", Vec3::new(-9.0, 0.0, -9.0)),
        ("右下角", Vec3::new(9.0, 0.0, -9.0)),
    ];
    for (token, want) in expected {
        assert_eq!(place(&mut ctl, token), want, "{token}");
        assert_eq!(ctl.scene().len(), 1);
    }
}

#[test]
fn distance_memory_survives_between_commands() {
    let mut ctl = controller_with_crate();

    let mut cmd = FurnitureCommand::new(Action::Place, "crate");
    cmd.direction = Direction::parse("右");
    cmd.distance = Some("一些".to_string());
    ctl.apply(&cmd).unwrap();
    assert_eq!(ctl.default_offset(), 10.0);

    // Corner commands ignore their distance token.
    let mut corner = FurnitureCommand::new(Action::Place, "crate");
    corner.direction = Direction::parse("corner-lower-left");
    corner.distance = Some("a little bit".to_string());
    ctl.apply(&corner).unwrap();
    assert_eq!(ctl.default_offset(), 10.0);

    let mut back = FurnitureCommand::new(Action::Move, "crate");
    back.direction = Direction::parse("back");
    let Outcome::Moved { from, to, .. } = ctl.apply(&back).unwrap() else {
        panic!("expected a move");
    };
    assert_eq!(to - from, Vec3::new(0.0, 0.0, -10.0));
}

#[test]
fn yawed_camera_changes_planar_directions() {
    let mut ctl = controller_with_crate();
    ctl.scene_mut().camera_mut().rotate(std::f32::consts::PI, 0.0);
    let position = place(&mut ctl, "right");
    assert!((position - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
}
