use crate::camera3d::Camera3D;
use crate::entity_registry::{EntityId, EntityKind, EntityRegistry};
use crate::picking;
use glam::Vec2;
use std::collections::BTreeSet;
use winit::dpi::PhysicalSize;

type ChangeCallback = Box<dyn FnMut(&[EntityId])>;

/// The set of currently selected entities.
///
/// The change callback fires at most once per operation, and only when
/// membership actually changed: re-adding a present id, removing an absent
/// one, or replacing the set with a permutation of itself stays silent.
#[derive(Default)]
pub struct SelectionSet {
    selected: BTreeSet<EntityId>,
    changed: Option<ChangeCallback>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_change_callback(&mut self, callback: impl FnMut(&[EntityId]) + 'static) {
        self.changed = Some(Box::new(callback));
    }

    pub fn clear_change_callback(&mut self) {
        self.changed = None;
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn has(&self, id: EntityId) -> bool {
        self.selected.contains(&id)
    }

    pub fn list(&self) -> Vec<EntityId> {
        self.selected.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.selected.iter().copied()
    }

    pub fn add(&mut self, ids: &[EntityId]) {
        let mut added = false;
        for &id in ids {
            added |= self.selected.insert(id);
        }
        if added {
            self.notify();
        }
    }

    pub fn remove(&mut self, ids: &[EntityId]) {
        let mut removed = false;
        for id in ids {
            removed |= self.selected.remove(id);
        }
        if removed {
            self.notify();
        }
    }

    /// Sets membership to exactly `ids`.
    pub fn replace(&mut self, ids: &[EntityId]) {
        let next: BTreeSet<EntityId> = ids.iter().copied().collect();
        if next != self.selected {
            self.selected = next;
            self.notify();
        }
    }

    pub fn clear(&mut self) {
        if !self.selected.is_empty() {
            self.selected.clear();
            self.notify();
        }
    }

    /// The select-tool gesture. Casts against selectable entities and applies
    /// the click: additive clicks toggle the struck entity, plain clicks make
    /// it the sole selection, and empty-space clicks clear unless additive.
    pub fn pick(
        &mut self,
        registry: &EntityRegistry,
        camera: &Camera3D,
        viewport: PhysicalSize<u32>,
        screen: Vec2,
        additive: bool,
    ) {
        match picking::cast(registry, camera, viewport, screen, EntityKind::selectable) {
            Some(hit) => {
                if self.has(hit.id) {
                    if additive {
                        self.remove(&[hit.id]);
                    } else {
                        self.replace(&[hit.id]);
                    }
                } else if additive {
                    self.add(&[hit.id]);
                } else {
                    self.replace(&[hit.id]);
                }
            }
            None => {
                if !additive {
                    self.clear();
                }
            }
        }
    }

    fn notify(&mut self) {
        let ids: Vec<EntityId> = self.selected.iter().copied().collect();
        if let Some(callback) = self.changed.as_mut() {
            callback(&ids);
        }
    }
}
