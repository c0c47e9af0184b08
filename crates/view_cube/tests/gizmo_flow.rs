mod common;

use common::{MockCamera, MockControls, MockRenderer, ResourceCounter};
use glam::{Quat, UVec2, Vec2, Vec3};
use overlay::{Placement, Rgb, ViewportRect};
use settings::ViewCubeOptions;
use view_cube::{PointerEvent, Region, ViewCubeError, ViewCubeGizmo};

const CANVAS: UVec2 = UVec2::new(800, 600);
const DT: f32 = 1.0 / 60.0;

fn gizmo(resources: &mut ResourceCounter) -> ViewCubeGizmo {
    ViewCubeGizmo::attach_to(resources, ViewCubeOptions::default()).unwrap()
}

/// Pointer over the top-right overlay at the given overlay NDC.
fn pointer_at(ndc: Vec2) -> PointerEvent {
    let x = 650.0 + (ndc.x + 1.0) * 75.0;
    let y = (1.0 - ndc.y) * 75.0;
    PointerEvent::new(x, y, CANVAS)
}

fn run_to_completion(
    gizmo: &mut ViewCubeGizmo,
    camera: &mut MockCamera,
    controls: &mut MockControls,
) -> usize {
    let mut frames = 0;
    while gizmo.is_animating() {
        gizmo.update(DT, camera, Some(&mut *controls));
        frames += 1;
        assert!(frames < 1_000, "animation did not converge");
    }
    frames
}

fn assert_same_rotation(a: Quat, b: Quat) {
    for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
        assert!((a * axis).abs_diff_eq(b * axis, 1e-4), "{a:?} vs {b:?}");
    }
}

#[test]
fn front_click_in_top_right_corner_targets_identity() {
    let mut resources = ResourceCounter::default();
    let mut gizmo = gizmo(&mut resources);
    let camera = MockCamera::facing_front(Vec3::ZERO, 5.0);
    gizmo.sync_orientation(camera.orientation);

    assert_eq!(
        gizmo.overlay().viewport_rect(CANVAS),
        ViewportRect::new(650, 450, 150, 150)
    );
    // Render-target y 475 is pointer y 125: inside the overlay.
    assert!(gizmo
        .overlay()
        .pointer_ndc(Vec2::new(725.0, 125.0), CANVAS)
        .is_some());

    let clicked = gizmo.on_pointer_click(PointerEvent::new(725.0, 75.0, CANVAS), &camera);
    assert_eq!(clicked, Some(Region::Front));
    let state = gizmo.animator().state().copied().unwrap();
    assert_eq!(state.target, Quat::IDENTITY);
}

#[test]
fn clicks_outside_the_overlay_do_nothing() {
    let mut resources = ResourceCounter::default();
    let mut gizmo = gizmo(&mut resources);
    let camera = MockCamera::facing_front(Vec3::ZERO, 5.0);

    // Pointer space has y down, so this is below the top-right overlay.
    let below = PointerEvent::new(725.0, 475.0, CANVAS);
    assert_eq!(gizmo.on_pointer_click(below, &camera), None);
    assert!(!gizmo.is_animating());

    gizmo.on_pointer_move(pointer_at(Vec2::ZERO));
    assert_eq!(gizmo.hovered(), Some(Region::Front));
    assert_eq!(gizmo.on_pointer_move(below), None);
    assert_eq!(gizmo.hovered(), Some(Region::Front));
}

#[test]
fn top_click_ends_looking_down_from_above_the_pivot() {
    let mut resources = ResourceCounter::default();
    let mut gizmo = gizmo(&mut resources);
    let pivot = Vec3::new(1.0, 2.0, 3.0);
    let mut controls = MockControls {
        target: pivot,
        ..Default::default()
    };
    gizmo.set_pivot_source(Some(&controls));

    // Looking slightly down from the front, so the top face shows above center.
    let orientation = Quat::from_rotation_x(-30f32.to_radians());
    let mut camera = MockCamera {
        position: pivot + orientation * Vec3::Z * 10.0,
        orientation,
        projection_updates: 0,
    };
    gizmo.update(DT, &mut camera, Some(&mut controls));

    let pointer = pointer_at(Vec2::new(0.0, 0.45));
    assert_eq!(gizmo.on_pointer_move(pointer), Some(Region::Top));
    assert_eq!(gizmo.on_pointer_click(pointer, &camera), Some(Region::Top));

    let frames = run_to_completion(&mut gizmo, &mut camera, &mut controls);
    // 60 degrees at one turn per second.
    assert!((9..=12).contains(&frames), "{frames}");
    assert_same_rotation(camera.orientation, Quat::from_rotation_x(-90f32.to_radians()));
    assert!(camera
        .position
        .abs_diff_eq(Vec3::new(0.0, 10.0, 0.0) + pivot, 1e-3));
    assert_eq!(controls.updates, frames);
    assert_eq!(camera.projection_updates, frames);
}

#[test]
fn hover_highlights_every_primitive_of_the_region() {
    let mut resources = ResourceCounter::default();
    let mut gizmo = gizmo(&mut resources);
    let face = Rgb::from_hex(0xdddddd);
    let hover = Rgb::from_hex(0xf2f5ce);

    // Top right corner of the front face: the top front right corner region.
    let pointer = pointer_at(Vec2::new(0.45, 0.45));
    for _ in 0..2 {
        assert_eq!(gizmo.on_pointer_move(pointer), Some(Region::TopFrontRightCorner));
        for primitive in gizmo.cube().group().primitives() {
            match primitive.name {
                Some(Region::TopFrontRightCorner) => assert_eq!(primitive.color, hover),
                Some(_) => assert_eq!(primitive.color, face),
                None => assert_eq!(primitive.color, Rgb::from_hex(0xcccccc)),
            }
        }
    }
    assert_eq!(gizmo.cube().primitives_named(Region::TopFrontRightCorner).count(), 3);

    gizmo.clear_hover();
    assert_eq!(gizmo.hovered(), None);
    assert!(gizmo
        .cube()
        .group()
        .primitives()
        .iter()
        .filter(|p| p.name.is_some())
        .all(|p| p.color == face));
}

#[test]
fn click_while_animating_redirects() {
    let mut resources = ResourceCounter::default();
    let mut gizmo = gizmo(&mut resources);
    let mut controls = MockControls::default();
    let orientation = Quat::from_rotation_x(-30f32.to_radians());
    let mut camera = MockCamera {
        position: orientation * Vec3::Z * 4.0,
        orientation,
        projection_updates: 0,
    };
    gizmo.update(DT, &mut camera, None);
    gizmo.on_pointer_click(pointer_at(Vec2::new(0.0, 0.45)), &camera);
    for _ in 0..3 {
        gizmo.update(DT, &mut camera, Some(&mut controls));
    }
    assert!(gizmo.is_animating());
    let midway = camera.orientation;

    // Whatever lies under the center now becomes the new target.
    let second = gizmo
        .on_pointer_click(pointer_at(Vec2::ZERO), &camera)
        .expect("the cube always covers the overlay center");
    let state = gizmo.animator().state().copied().unwrap();
    assert!(state.current.abs_diff_eq(midway, 1e-6));
    assert!(state.target.abs_diff_eq(second.target_quat(), 1e-6));
    assert!((state.radius - 4.0).abs() < 1e-3);

    run_to_completion(&mut gizmo, &mut camera, &mut controls);
    assert_same_rotation(camera.orientation, second.target_quat());
}

#[test]
fn overlay_mirrors_inverse_camera_orientation() {
    let mut resources = ResourceCounter::default();
    let mut gizmo = gizmo(&mut resources);
    let orientation = Quat::from_euler(glam::EulerRot::YXZ, 0.7, -0.3, 0.0);
    let mut camera = MockCamera {
        position: orientation * Vec3::Z * 3.0,
        orientation,
        projection_updates: 0,
    };
    gizmo.update(DT, &mut camera, None);
    assert!(gizmo
        .cube()
        .group()
        .rotation()
        .abs_diff_eq(orientation.inverse(), 1e-6));
    // Idle frames never touch the camera.
    assert_eq!(camera.projection_updates, 0);
}

#[test]
fn pivot_follows_the_controls_target() {
    let mut resources = ResourceCounter::default();
    let mut gizmo = gizmo(&mut resources);
    let mut camera = MockCamera::facing_front(Vec3::ZERO, 5.0);
    let mut controls = MockControls {
        target: Vec3::X,
        ..Default::default()
    };
    assert_eq!(gizmo.pivot(), Vec3::ZERO);

    gizmo.set_pivot_source(Some(&controls));
    assert_eq!(gizmo.pivot(), Vec3::X);

    controls.target = Vec3::new(0.0, 0.0, -2.0);
    gizmo.update(DT, &mut camera, Some(&mut controls));
    assert_eq!(gizmo.pivot(), Vec3::new(0.0, 0.0, -2.0));

    gizmo.set_pivot_source(None);
    gizmo.update(DT, &mut camera, Some(&mut controls));
    assert_eq!(gizmo.pivot(), Vec3::ZERO);
}

#[test]
fn render_overlay_restores_renderer_state() {
    let mut resources = ResourceCounter::default();
    let gizmo = gizmo(&mut resources);
    let mut renderer = MockRenderer::new(800, 600);

    gizmo.render_overlay(&mut renderer);

    assert_eq!(renderer.draws, vec![(ViewportRect::new(650, 450, 150, 150), 55)]);
    assert_eq!(renderer.depth_clears, 1);
    assert_eq!(renderer.viewport, ViewportRect::new(0, 0, 800, 600));
    assert!(renderer.auto_clear);
    assert!(!renderer.scissor_test);
}

#[test]
fn other_placements_render_in_their_corner() {
    let mut resources = ResourceCounter::default();
    let options = ViewCubeOptions {
        pos: Placement::BottomLeft,
        dimension: 120,
        ..Default::default()
    };
    let mut gizmo = ViewCubeGizmo::attach_to(&mut resources, options).unwrap();
    let mut renderer = MockRenderer::new(800, 600);
    gizmo.render_overlay(&mut renderer);
    assert_eq!(renderer.draws[0].0, ViewportRect::new(0, 0, 120, 120));

    // Bottom-left in render space is the bottom of pointer space.
    let camera = MockCamera::facing_front(Vec3::ZERO, 5.0);
    let clicked = gizmo.on_pointer_click(PointerEvent::new(60.0, 540.0, CANVAS), &camera);
    assert_eq!(clicked, Some(Region::Front));
}

#[test]
fn repeated_build_and_dispose_leaks_nothing() {
    let mut resources = ResourceCounter::default();
    let mut renderer = MockRenderer::new(640, 480);
    let mut gizmos = Vec::new();
    for _ in 0..8 {
        let gizmo = gizmo(&mut resources);
        gizmo.render_overlay(&mut renderer);
        gizmos.push(gizmo);
    }
    assert_eq!(resources.textures.len(), 8 * 6);
    for gizmo in gizmos {
        gizmo.dispose(&mut resources);
    }
    assert_eq!(resources.outstanding(), 0);
}

#[test]
fn failed_build_releases_partial_allocations() {
    // 3: a face material fails, so its label texture is already allocated.
    // 20: a corner material fails after every face was built.
    for fail_after in [0, 3, 20] {
        let mut resources = ResourceCounter::failing_material_after(fail_after);
        let result = ViewCubeGizmo::attach_to(&mut resources, ViewCubeOptions::default());
        assert!(matches!(result, Err(ViewCubeError::Resource(_))));
        assert_eq!(resources.outstanding(), 0, "fail after {fail_after}");
    }
}

#[test]
fn invalid_options_allocate_nothing() {
    let mut resources = ResourceCounter::default();
    let options = ViewCubeOptions {
        border: 1.5,
        ..Default::default()
    };
    let result = ViewCubeGizmo::attach_to(&mut resources, options);
    assert!(matches!(result, Err(ViewCubeError::Settings(_))));
    assert_eq!(resources.outstanding(), 0);
}
