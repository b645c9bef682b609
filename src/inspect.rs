use crate::entity_registry::{EntityId, EntityRecord, EntityRegistry};
use glam::Vec3;
use std::fmt;

/// One axis of an aggregated property: a single shared value, or the sentinel
/// meaning the value differs across the inspected entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisValue {
    Uniform(f32),
    Mixed,
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisValue::Uniform(value) => write!(f, "{value}"),
            AxisValue::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Rounds to three decimal digits. Applied before deduplication so near-equal
/// floats collapse into one bucket.
pub fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Aggregates transform properties across a multi-selection for display.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inspector;

impl Inspector {
    pub fn new() -> Self {
        Self
    }

    /// Per-axis aggregate of `extract` over the given ids. Unresolvable ids
    /// are skipped; if none resolve, the whole call is `None` and the caller
    /// picks a default display.
    pub fn aggregate(
        &self,
        registry: &EntityRegistry,
        ids: &[EntityId],
        extract: impl Fn(&EntityRecord) -> Vec3,
    ) -> Option<[AxisValue; 3]> {
        let mut axes: [Vec<f32>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        for &id in ids {
            let Some(record) = registry.get(id) else {
                continue;
            };
            let value = extract(record).to_array();
            for (axis, component) in axes.iter_mut().zip(value) {
                let rounded = round3(component);
                if !axis.contains(&rounded) {
                    axis.push(rounded);
                }
            }
        }
        if axes[0].is_empty() {
            return None;
        }
        Some([collapse(&axes[0]), collapse(&axes[1]), collapse(&axes[2])])
    }

    pub fn multi_position(
        &self,
        registry: &EntityRegistry,
        ids: &[EntityId],
    ) -> Option<[AxisValue; 3]> {
        self.aggregate(registry, ids, |record| record.position)
    }

    /// Rotation in degrees; conversion happens before rounding.
    pub fn multi_rotation_degrees(
        &self,
        registry: &EntityRegistry,
        ids: &[EntityId],
    ) -> Option<[AxisValue; 3]> {
        self.aggregate(registry, ids, |record| record.rotation * (180.0 / std::f32::consts::PI))
    }

    /// Scale as a percentage; conversion happens before rounding.
    pub fn multi_scale_percent(
        &self,
        registry: &EntityRegistry,
        ids: &[EntityId],
    ) -> Option<[AxisValue; 3]> {
        self.aggregate(registry, ids, |record| record.scale * 100.0)
    }
}

fn collapse(values: &[f32]) -> AxisValue {
    if values.len() == 1 {
        AxisValue::Uniform(values[0])
    } else {
        AxisValue::Mixed
    }
}
