use glam::Vec3;
use std::collections::BTreeMap;
use std::fmt;

/// Stable handle for a scene entity. Ids are assigned monotonically and never
/// reused while the scene lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Handle for tests that need an id the registry never issued.
    pub fn dangling(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ground,
    Box,
    Sphere,
    Selection,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Ground => "Ground",
            EntityKind::Box => "Box",
            EntityKind::Sphere => "Sphere",
            EntityKind::Selection => "Selection",
        }
    }

    /// Kinds the select tool may pick.
    pub fn selectable(self) -> bool {
        matches!(self, EntityKind::Box | EntityKind::Sphere)
    }

    /// Kinds new objects may be created against.
    pub fn creatable_against(self) -> bool {
        matches!(self, EntityKind::Ground | EntityKind::Box | EntityKind::Sphere)
    }
}

/// Parametric geometry of a scene entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Plane { half_extent: f32 },
    Cube { size: f32 },
    Sphere { radius: f32 },
}

impl Shape {
    /// The scalar size parameter: cube edge length, sphere radius, or plane
    /// half-extent.
    pub fn extent(self) -> f32 {
        match self {
            Shape::Plane { half_extent } => half_extent,
            Shape::Cube { size } => size,
            Shape::Sphere { radius } => radius,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntityRecord {
    pub id: EntityId,
    pub kind: EntityKind,
    pub shape: Shape,
    pub position: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: Vec3,
    pub wireframe: bool,
}

/// Directional scene light. Not an entity: it has no id and is invisible to
/// picking.
#[derive(Debug, Clone)]
pub struct LightingData {
    pub direction: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for LightingData {
    fn default() -> Self {
        Self {
            direction: (Vec3::ZERO - Vec3::new(15.0, 20.0, 10.0)).normalize(),
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}

const GROUND_COLOR: Vec3 = Vec3::new(0.82, 0.71, 0.55);
const HIGHLIGHT_COLOR: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Owns every scene entity and the side data renderers draw from: kind,
/// parametric shape, and transform, keyed by id.
pub struct EntityRegistry {
    entries: BTreeMap<EntityId, EntityRecord>,
    next_id: u64,
    lighting: LightingData,
    grid_divisions: u32,
}

impl EntityRegistry {
    /// Sets up the permanent scene: a ground plane of `ground_extent` total
    /// width centered at the origin, plus default lighting.
    pub fn new(ground_extent: f32, grid_divisions: u32) -> Self {
        let mut registry = Self {
            entries: BTreeMap::new(),
            next_id: 0,
            lighting: LightingData::default(),
            grid_divisions,
        };
        registry.insert(
            EntityKind::Ground,
            Shape::Plane { half_extent: ground_extent * 0.5 },
            Vec3::ZERO,
            GROUND_COLOR,
            false,
        );
        registry
    }

    fn insert(
        &mut self,
        kind: EntityKind,
        shape: Shape,
        position: Vec3,
        color: Vec3,
        wireframe: bool,
    ) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            EntityRecord {
                id,
                kind,
                shape,
                position,
                rotation: Vec3::ZERO,
                scale: Vec3::ONE,
                color,
                wireframe,
            },
        );
        id
    }

    /// `size` must be positive; callers draw it from the spawn config.
    pub fn add_box(&mut self, position: Vec3, size: f32, color: Vec3) -> EntityId {
        self.insert(EntityKind::Box, Shape::Cube { size }, position, color, false)
    }

    /// `radius` must be positive; callers draw it from the spawn config.
    pub fn add_sphere(&mut self, position: Vec3, radius: f32, color: Vec3) -> EntityId {
        self.insert(EntityKind::Sphere, Shape::Sphere { radius }, position, color, false)
    }

    /// Creates a wireframe outline shaped and positioned like `target`.
    /// Returns `None` when the target is missing or not a solid object.
    pub fn add_decoration(&mut self, target: EntityId) -> Option<EntityId> {
        let record = self.entries.get(&target)?;
        if !matches!(record.kind, EntityKind::Box | EntityKind::Sphere) {
            return None;
        }
        let (shape, position) = (record.shape, record.position);
        Some(self.insert(EntityKind::Selection, shape, position, HIGHLIGHT_COLOR, true))
    }

    /// Removes an entity. Unknown ids are a no-op returning `false`.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn get(&self, id: EntityId) -> Option<&EntityRecord> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut EntityRecord> {
        self.entries.get_mut(&id)
    }

    /// Every entity a pick ray may test, in ascending id order.
    pub fn pickable(&self) -> impl Iterator<Item = &EntityRecord> {
        self.entries.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lighting(&self) -> &LightingData {
        &self.lighting
    }

    pub fn grid_divisions(&self) -> u32 {
        self.grid_divisions
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new(100.0, 20)
    }
}
