use crate::camera3d::{Camera3D, Ray};
use crate::entity_registry::{EntityId, EntityKind, EntityRecord, EntityRegistry, Shape};
use glam::{Vec2, Vec3};
use winit::dpi::PhysicalSize;

/// Nearest eligible intersection along a viewport pick ray. Transient: holds
/// plain data, never references into the registry.
#[derive(Debug, Clone, Copy)]
pub struct RaycastHit {
    pub id: EntityId,
    pub kind: EntityKind,
    pub point: Vec3,
    pub distance: f32,
}

pub fn ray_sphere_intersection(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let mut t = -b - sqrt_d;
    if t < 0.0 {
        t = -b + sqrt_d;
    }
    if t < 0.0 {
        return None;
    }
    Some(t)
}

pub fn ray_aabb_intersection(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_min: f32 = 0.0;
    let mut t_max: f32 = f32::INFINITY;
    let origin = ray.origin.to_array();
    let dir = ray.dir.to_array();
    let min = min.to_array();
    let max = max.to_array();
    for axis in 0..3 {
        if dir[axis].abs() < 1e-6 {
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return None;
            }
        } else {
            let inv_d = 1.0 / dir[axis];
            let mut t1 = (min[axis] - origin[axis]) * inv_d;
            let mut t2 = (max[axis] - origin[axis]) * inv_d;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }
    }
    if t_max < 0.0 {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

/// Intersection with a horizontal plane of bounded lateral extent.
pub fn ray_ground_intersection(ray: &Ray, center: Vec3, half_extent: f32) -> Option<f32> {
    if ray.dir.y.abs() < 1e-6 {
        return None;
    }
    let t = (center.y - ray.origin.y) / ray.dir.y;
    if t < 0.0 {
        return None;
    }
    let hit = ray.point_at(t);
    if (hit.x - center.x).abs() > half_extent || (hit.z - center.z).abs() > half_extent {
        return None;
    }
    Some(t)
}

fn intersect_record(ray: &Ray, record: &EntityRecord) -> Option<f32> {
    match record.shape {
        Shape::Plane { half_extent } => ray_ground_intersection(ray, record.position, half_extent),
        Shape::Cube { size } => {
            let half = Vec3::splat(size * 0.5);
            ray_aabb_intersection(ray, record.position - half, record.position + half)
        }
        Shape::Sphere { radius } => ray_sphere_intersection(ray, record.position, radius),
    }
}

/// Resolves a viewport point to the nearest entity whose kind satisfies
/// `predicate`. The viewport size is taken per call, so resizes apply
/// immediately. `None` is the normal clicked-empty-space outcome.
pub fn cast(
    registry: &EntityRegistry,
    camera: &Camera3D,
    viewport: PhysicalSize<u32>,
    screen: Vec2,
    predicate: impl Fn(EntityKind) -> bool,
) -> Option<RaycastHit> {
    let ray = camera.viewport_ray(screen, viewport)?;
    let mut closest: Option<RaycastHit> = None;
    for record in registry.pickable() {
        if !predicate(record.kind) {
            continue;
        }
        let Some(distance) = intersect_record(&ray, record) else {
            continue;
        };
        match closest {
            Some(ref best) if distance >= best.distance => {}
            _ => {
                closest = Some(RaycastHit {
                    id: record.id,
                    kind: record.kind,
                    point: ray.point_at(distance),
                    distance,
                });
            }
        }
    }
    closest
}
