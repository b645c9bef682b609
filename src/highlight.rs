use crate::entity_registry::{EntityId, EntityRegistry};
use crate::selection::SelectionSet;
use std::collections::BTreeMap;

/// Reconciles wireframe outline decorations against the selection so the
/// rendered scene shows exactly the selected entities, no more, no less.
#[derive(Default)]
pub struct HighlightSync {
    /// Selected entity id -> decoration entity id.
    decorations: BTreeMap<EntityId, EntityId>,
}

impl HighlightSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the decoration map in line with the selection. Post-condition:
    /// the map's domain equals the selection membership exactly, and every
    /// value is a live decoration record in the registry.
    pub fn sync(&mut self, selection: &SelectionSet, registry: &mut EntityRegistry) {
        if selection.is_empty() {
            // Nothing selected: drop every decoration at once.
            for (_, decoration) in std::mem::take(&mut self.decorations) {
                registry.remove(decoration);
            }
            return;
        }

        let stale: Vec<EntityId> =
            self.decorations.keys().copied().filter(|id| !selection.has(*id)).collect();
        for id in stale {
            if let Some(decoration) = self.decorations.remove(&id) {
                registry.remove(decoration);
            }
        }

        for id in selection.iter() {
            if self.decorations.contains_key(&id) {
                continue;
            }
            if let Some(decoration) = registry.add_decoration(id) {
                self.decorations.insert(id, decoration);
            }
        }
    }

    pub fn decoration_for(&self, id: EntityId) -> Option<EntityId> {
        self.decorations.get(&id).copied()
    }

    pub fn decorated(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.decorations.keys().copied()
    }

    pub fn count(&self) -> usize {
        self.decorations.len()
    }
}
