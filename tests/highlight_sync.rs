use glam::Vec3;
use kite_editor::entity_registry::{EntityId, EntityKind, EntityRegistry, Shape};
use kite_editor::highlight::HighlightSync;
use kite_editor::selection::SelectionSet;

fn assert_invariant(highlight: &HighlightSync, selection: &SelectionSet, registry: &EntityRegistry) {
    let decorated: Vec<EntityId> = highlight.decorated().collect();
    assert_eq!(decorated, selection.list(), "decoration map domain must equal the selection");
    for id in selection.iter() {
        let decoration = highlight.decoration_for(id).expect("decoration present");
        let record = registry.get(decoration).expect("decoration record is live");
        assert_eq!(record.kind, EntityKind::Selection);
    }
    let live_decorations =
        registry.pickable().filter(|record| record.kind == EntityKind::Selection).count();
    assert_eq!(live_decorations, highlight.count(), "no orphaned decoration entities");
}

#[test]
fn decorations_follow_the_selection_through_arbitrary_edits() {
    let mut registry = EntityRegistry::default();
    let a = registry.add_box(Vec3::new(0.0, 1.0, 0.0), 2.0, Vec3::ONE);
    let b = registry.add_sphere(Vec3::new(5.0, 2.0, 0.0), 2.0, Vec3::ONE);
    let c = registry.add_sphere(Vec3::new(-5.0, 1.0, 3.0), 1.0, Vec3::ONE);
    let mut selection = SelectionSet::new();
    let mut highlight = HighlightSync::new();

    selection.add(&[a]);
    highlight.sync(&selection, &mut registry);
    assert_invariant(&highlight, &selection, &registry);

    selection.add(&[b, c]);
    highlight.sync(&selection, &mut registry);
    assert_invariant(&highlight, &selection, &registry);

    selection.remove(&[b]);
    highlight.sync(&selection, &mut registry);
    assert_invariant(&highlight, &selection, &registry);

    selection.replace(&[b]);
    highlight.sync(&selection, &mut registry);
    assert_invariant(&highlight, &selection, &registry);

    selection.clear();
    highlight.sync(&selection, &mut registry);
    assert_invariant(&highlight, &selection, &registry);
    assert_eq!(highlight.count(), 0);
}

#[test]
fn repeated_sync_is_stable() {
    let mut registry = EntityRegistry::default();
    let a = registry.add_box(Vec3::ZERO, 1.0, Vec3::ONE);
    let mut selection = SelectionSet::new();
    let mut highlight = HighlightSync::new();

    selection.add(&[a]);
    highlight.sync(&selection, &mut registry);
    let decoration = highlight.decoration_for(a).expect("decoration");
    let entities = registry.len();

    highlight.sync(&selection, &mut registry);
    highlight.sync(&selection, &mut registry);
    assert_eq!(highlight.decoration_for(a), Some(decoration), "decoration must not be rebuilt");
    assert_eq!(registry.len(), entities, "no duplicate decorations");
}

#[test]
fn deselected_decorations_are_destroyed_in_the_registry() {
    let mut registry = EntityRegistry::default();
    let a = registry.add_sphere(Vec3::ZERO, 1.0, Vec3::ONE);
    let b = registry.add_sphere(Vec3::new(4.0, 1.0, 0.0), 1.0, Vec3::ONE);
    let mut selection = SelectionSet::new();
    let mut highlight = HighlightSync::new();

    selection.add(&[a, b]);
    highlight.sync(&selection, &mut registry);
    let decoration_a = highlight.decoration_for(a).expect("decoration for a");

    selection.remove(&[a]);
    highlight.sync(&selection, &mut registry);
    assert!(registry.get(decoration_a).is_none(), "stale decoration must be removed");
    assert!(highlight.decoration_for(a).is_none());
    assert!(highlight.decoration_for(b).is_some());
}

#[test]
fn outline_shape_matches_the_underlying_entity() {
    let mut registry = EntityRegistry::default();
    let cube = registry.add_box(Vec3::new(1.0, 1.0, 1.0), 2.0, Vec3::ONE);
    let sphere = registry.add_sphere(Vec3::new(-3.0, 2.0, 0.0), 1.5, Vec3::ONE);
    let mut selection = SelectionSet::new();
    let mut highlight = HighlightSync::new();

    selection.add(&[cube, sphere]);
    highlight.sync(&selection, &mut registry);

    let cube_outline = registry
        .get(highlight.decoration_for(cube).expect("cube decoration"))
        .expect("record");
    assert_eq!(cube_outline.shape, Shape::Cube { size: 2.0 });
    assert_eq!(cube_outline.position, Vec3::new(1.0, 1.0, 1.0));
    assert!(cube_outline.wireframe);

    let sphere_outline = registry
        .get(highlight.decoration_for(sphere).expect("sphere decoration"))
        .expect("record");
    assert_eq!(sphere_outline.shape, Shape::Sphere { radius: 1.5 });
}
