use crate::camera3d::Camera3D;
use crate::config::SpawnConfig;
use crate::entity_registry::{EntityId, EntityKind, EntityRegistry};
use crate::picking::{self, RaycastHit};
use glam::{Vec2, Vec3};
use rand::Rng;
use winit::dpi::PhysicalSize;

/// Center of a sphere externally tangent to an existing sphere at the clicked
/// surface point: the centers end up separated by exactly the radius sum.
pub fn tangent_sphere_center(
    struck_center: Vec3,
    surface_point: Vec3,
    new_radius: f32,
    struck_radius: f32,
) -> Vec3 {
    let normal = (surface_point - struck_center).normalize();
    struck_center + normal * (new_radius + struck_radius)
}

/// Spawn center for a new box of edge length `size` flush against the struck
/// surface. Stale hit ids fall back to point-based placement.
pub fn box_spawn_position(hit: &RaycastHit, registry: &EntityRegistry, size: f32) -> Vec3 {
    let above_point = Vec3::new(hit.point.x, hit.point.y + size * 0.5, hit.point.z);
    match hit.kind {
        EntityKind::Box => match registry.get(hit.id) {
            Some(struck) => Vec3::new(
                hit.point.x,
                struck.position.y + struck.shape.extent() * 0.5 + size * 0.5,
                hit.point.z,
            ),
            None => above_point,
        },
        EntityKind::Sphere => match registry.get(hit.id) {
            Some(struck) => Vec3::new(
                struck.position.x,
                struck.position.y + struck.shape.extent() + size * 0.5,
                struck.position.z,
            ),
            None => above_point,
        },
        EntityKind::Ground | EntityKind::Selection => above_point,
    }
}

/// Spawn center for a new sphere of radius `radius` flush against the struck
/// surface. Against another sphere the new one is placed externally tangent
/// at the clicked angular position rather than stacked vertically.
pub fn sphere_spawn_position(hit: &RaycastHit, registry: &EntityRegistry, radius: f32) -> Vec3 {
    let above_point = Vec3::new(hit.point.x, hit.point.y + radius, hit.point.z);
    match hit.kind {
        EntityKind::Sphere => match registry.get(hit.id) {
            Some(struck) => {
                tangent_sphere_center(struck.position, hit.point, radius, struck.shape.extent())
            }
            None => above_point,
        },
        EntityKind::Box => match registry.get(hit.id) {
            Some(struck) => Vec3::new(
                struck.position.x,
                struck.position.y + struck.shape.extent() * 0.5 + radius,
                struck.position.z,
            ),
            None => above_point,
        },
        EntityKind::Ground | EntityKind::Selection => above_point,
    }
}

pub(crate) fn random_color(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(rng.gen(), rng.gen(), rng.gen())
}

/// Create-tool controller: resolves a click against the scene and inserts a
/// randomly sized, randomly colored object flush with whatever was struck.
pub struct Creation {
    spawn: SpawnConfig,
}

impl Creation {
    pub fn new(spawn: SpawnConfig) -> Self {
        Self { spawn }
    }

    /// Returns the created entity, or `None` when the click struck nothing
    /// creatable-against. Not creating anything is the normal outcome for an
    /// empty-space click, not an error.
    pub fn create_box_at(
        &self,
        registry: &mut EntityRegistry,
        camera: &Camera3D,
        viewport: PhysicalSize<u32>,
        screen: Vec2,
    ) -> Option<EntityId> {
        let hit = picking::cast(registry, camera, viewport, screen, EntityKind::creatable_against)?;
        let mut rng = rand::thread_rng();
        let size = rng.gen_range(self.spawn.box_size_min..self.spawn.box_size_max);
        let color = random_color(&mut rng);
        let position = box_spawn_position(&hit, registry, size);
        Some(registry.add_box(position, size, color))
    }

    pub fn create_sphere_at(
        &self,
        registry: &mut EntityRegistry,
        camera: &Camera3D,
        viewport: PhysicalSize<u32>,
        screen: Vec2,
    ) -> Option<EntityId> {
        let hit = picking::cast(registry, camera, viewport, screen, EntityKind::creatable_against)?;
        let mut rng = rand::thread_rng();
        let radius = rng.gen_range(self.spawn.sphere_radius_min..self.spawn.sphere_radius_max);
        let color = random_color(&mut rng);
        let position = sphere_spawn_position(&hit, registry, radius);
        Some(registry.add_sphere(position, radius, color))
    }
}
