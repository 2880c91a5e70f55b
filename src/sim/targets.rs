//! Checkpoint targets and the registry of live ones

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A checkpoint the camera must fly through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Stable identity within one world generation (1-based, in layout order)
    pub id: u32,
    pub center: Vec3,
    pub radius: f32,
    pub color: [f32; 4],
}

/// The live checkpoints, in layout order
///
/// Only shrinks between calls to `initialize`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetRegistry {
    targets: Vec<Target>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole live set (startup and world reset)
    pub fn initialize(&mut self, targets: impl IntoIterator<Item = Target>) {
        self.targets.clear();
        self.targets.extend(targets);
    }

    pub fn live_targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.targets.iter().any(|t| t.id == id)
    }

    /// Remove every target matching `predicate`, returning them in layout order.
    ///
    /// The predicate sees each target exactly once; survivors keep their order.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&Target) -> bool) -> Vec<Target> {
        let (removed, kept): (Vec<Target>, Vec<Target>) =
            self.targets.drain(..).partition(|t| predicate(t));
        self.targets = kept;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(id: u32, x: f32) -> Target {
        Target {
            id,
            center: Vec3::new(x, 0.0, 0.0),
            radius: 1.0,
            color: [1.0, 1.0, 0.0, 1.0],
        }
    }

    #[test]
    fn test_initialize_replaces_everything() {
        let mut registry = TargetRegistry::new();
        registry.initialize([target(1, 0.0), target(2, 1.0)]);
        registry.initialize([target(7, 5.0)]);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(7));
        assert!(!registry.contains(1));
    }

    #[test]
    fn test_remove_adjacent_targets() {
        // Consecutive matches must both be seen, none skipped
        let mut registry = TargetRegistry::new();
        registry.initialize((1..=5).map(|i| target(i, i as f32)));
        let removed = registry.remove_where(|t| t.id == 2 || t.id == 3);
        assert_eq!(removed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(
            registry.live_targets().iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 4, 5]
        );
    }

    #[test]
    fn test_predicate_sees_each_target_once() {
        let mut registry = TargetRegistry::new();
        registry.initialize((1..=4).map(|i| target(i, 0.0)));
        let mut seen = Vec::new();
        registry.remove_where(|t| {
            seen.push(t.id);
            true
        });
        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert!(registry.is_empty());
    }
}
