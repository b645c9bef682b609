use glam::{Vec2, Vec3};
use kite_editor::camera3d::Camera3D;
use kite_editor::entity_registry::{EntityKind, EntityRegistry};
use kite_editor::picking;
use winit::dpi::PhysicalSize;

const VIEWPORT: PhysicalSize<u32> = PhysicalSize { width: 800, height: 600 };

fn camera() -> Camera3D {
    Camera3D::editor_default()
}

fn screen_for(camera: &Camera3D, world: Vec3) -> Vec2 {
    camera.project_point(world, VIEWPORT).expect("point in front of camera")
}

#[test]
fn cast_hits_the_entity_under_the_cursor() {
    let mut registry = EntityRegistry::default();
    let sphere = registry.add_sphere(Vec3::new(0.0, 2.0, 0.0), 1.5, Vec3::ONE);
    let camera = camera();
    let screen = screen_for(&camera, Vec3::new(0.0, 2.0, 0.0));

    let hit = picking::cast(&registry, &camera, VIEWPORT, screen, |_| true).expect("hit");
    assert_eq!(hit.id, sphere);
    assert_eq!(hit.kind, EntityKind::Sphere);
    assert!(hit.distance > 0.0);
}

#[test]
fn cast_returns_the_nearest_of_two_hits() {
    let mut registry = EntityRegistry::default();
    let camera = camera();
    let front_center = Vec3::new(0.0, 2.0, 0.0);
    let ray_dir = (front_center - camera.position).normalize();
    let behind_center = front_center + ray_dir * 6.0;

    let front = registry.add_sphere(front_center, 1.0, Vec3::ONE);
    let _behind = registry.add_sphere(behind_center, 1.0, Vec3::ONE);

    let screen = screen_for(&camera, front_center);
    let hit = picking::cast(&registry, &camera, VIEWPORT, screen, |_| true).expect("hit");
    assert_eq!(hit.id, front, "nearer sphere must win");
}

#[test]
fn predicate_filters_nearer_entities_out() {
    let mut registry = EntityRegistry::default();
    let box_center = Vec3::new(0.0, 2.0, 0.0);
    registry.add_box(box_center, 2.0, Vec3::ONE);
    let camera = camera();
    let screen = screen_for(&camera, box_center);

    let through_box =
        picking::cast(&registry, &camera, VIEWPORT, screen, |kind| kind == EntityKind::Ground)
            .expect("ray continues to the ground");
    assert_eq!(through_box.kind, EntityKind::Ground);
    assert!(through_box.point.y.abs() < 1e-3);
}

#[test]
fn decorations_are_rejected_by_the_standard_predicates() {
    let mut registry = EntityRegistry::default();
    let sphere_center = Vec3::new(0.0, 2.0, 0.0);
    let sphere = registry.add_sphere(sphere_center, 1.5, Vec3::ONE);
    let decoration = registry.add_decoration(sphere).expect("outline");
    let camera = camera();
    let screen = screen_for(&camera, sphere_center);

    let selectable =
        picking::cast(&registry, &camera, VIEWPORT, screen, EntityKind::selectable).expect("hit");
    assert_eq!(selectable.id, sphere);

    let creatable =
        picking::cast(&registry, &camera, VIEWPORT, screen, EntityKind::creatable_against)
            .expect("hit");
    assert_eq!(creatable.id, sphere);
    assert_ne!(creatable.id, decoration);
}

#[test]
fn empty_space_click_is_not_an_error() {
    let registry = EntityRegistry::default();
    let camera = camera();
    // Top edge of the viewport: the ray leaves the ground plane's extent.
    let miss = picking::cast(&registry, &camera, VIEWPORT, Vec2::new(400.0, 0.0), |_| true);
    assert!(miss.is_none());

    let nothing_eligible = picking::cast(
        &registry,
        &camera,
        VIEWPORT,
        screen_for(&camera, Vec3::ZERO),
        |_| false,
    );
    assert!(nothing_eligible.is_none());
}

#[test]
fn ground_hit_lands_at_the_clicked_world_point() {
    let registry = EntityRegistry::default();
    let camera = camera();
    let target = Vec3::new(3.0, 0.0, -1.0);
    let screen = screen_for(&camera, target);

    let hit = picking::cast(&registry, &camera, VIEWPORT, screen, EntityKind::creatable_against)
        .expect("ground hit");
    assert_eq!(hit.kind, EntityKind::Ground);
    assert!(hit.point.distance(target) < 1e-2, "hit {:?} should be near {target:?}", hit.point);
}

#[test]
fn viewport_dimensions_are_read_per_cast() {
    let mut registry = EntityRegistry::default();
    let sphere_center = Vec3::new(4.0, 1.0, 2.0);
    let sphere = registry.add_sphere(sphere_center, 1.0, Vec3::ONE);
    let camera = camera();

    let small = PhysicalSize::new(400, 300);
    let screen = camera.project_point(sphere_center, small).expect("projects");
    let hit = picking::cast(&registry, &camera, small, screen, EntityKind::selectable).expect("hit");
    assert_eq!(hit.id, sphere);

    let large = PhysicalSize::new(1600, 1200);
    let screen = camera.project_point(sphere_center, large).expect("projects");
    let hit = picking::cast(&registry, &camera, large, screen, EntityKind::selectable).expect("hit");
    assert_eq!(hit.id, sphere);
}
