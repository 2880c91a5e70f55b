//! Proximity collision between the camera and live checkpoints

use glam::Vec3;

use super::targets::{Target, TargetRegistry};

/// True when `point` is strictly closer than `radius` to `center`
#[inline]
pub fn within_radius(point: Vec3, center: Vec3, radius: f32) -> bool {
    point.distance_squared(center) < radius * radius
}

/// Clear every checkpoint within `collision_radius` of the camera.
///
/// Every target is tested against the same camera position, so the outcome
/// does not depend on registry order. Returns the cleared targets.
pub fn check_collisions(
    camera_pos: Vec3,
    registry: &mut TargetRegistry,
    collision_radius: f32,
) -> Vec<Target> {
    let cleared =
        registry.remove_where(|target| within_radius(camera_pos, target.center, collision_radius));

    for target in &cleared {
        log::info!(
            "Checkpoint {} cleared at {:.1} units ({} left)",
            target.id,
            camera_pos.distance(target.center),
            registry.len()
        );
    }

    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn registry_of(centers: &[Vec3]) -> TargetRegistry {
        let mut registry = TargetRegistry::new();
        registry.initialize(centers.iter().enumerate().map(|(i, c)| Target {
            id: i as u32 + 1,
            center: *c,
            radius: 2.0,
            color: [1.0; 4],
        }));
        registry
    }

    #[test]
    fn test_boundary_is_not_a_hit() {
        let center = Vec3::new(3.0, 0.0, 0.0);
        assert!(!within_radius(Vec3::ZERO, center, 3.0));
        assert!(within_radius(Vec3::new(0.01, 0.0, 0.0), center, 3.0));
    }

    #[test]
    fn test_clears_only_nearby() {
        let mut registry = registry_of(&[
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, -2.0, 0.0),
        ]);
        let cleared = check_collisions(Vec3::ZERO, &mut registry, 3.0);
        assert_eq!(cleared.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(2));
    }

    #[test]
    fn test_clustered_targets_all_cleared() {
        let centers = [Vec3::new(0.5, 0.0, 0.0); 4];
        let mut registry = registry_of(&centers);
        let cleared = check_collisions(Vec3::ZERO, &mut registry, 3.0);
        assert_eq!(cleared.len(), 4);
        assert!(registry.is_empty());
    }

    proptest! {
        #[test]
        fn prop_second_check_clears_nothing(
            cam in prop::array::uniform3(-20.0f32..20.0),
            centers in prop::collection::vec(prop::array::uniform3(-20.0f32..20.0), 0..12),
            radius in 0.5f32..10.0,
        ) {
            let cam = Vec3::from_array(cam);
            let centers: Vec<Vec3> = centers.into_iter().map(Vec3::from_array).collect();
            let mut registry = registry_of(&centers);

            let first = check_collisions(cam, &mut registry, radius);
            prop_assert_eq!(first.len() + registry.len(), centers.len());
            let second = check_collisions(cam, &mut registry, radius);
            prop_assert!(second.is_empty());
        }

        #[test]
        fn prop_order_independent(
            cam in prop::array::uniform3(-20.0f32..20.0),
            centers in prop::collection::vec(prop::array::uniform3(-20.0f32..20.0), 0..12),
        ) {
            let cam = Vec3::from_array(cam);
            let forward: Vec<Vec3> = centers.iter().copied().map(Vec3::from_array).collect();
            let reversed: Vec<Vec3> = forward.iter().rev().copied().collect();

            let mut a = registry_of(&forward);
            let mut b = registry_of(&reversed);
            let mut cleared_a: Vec<[u32; 3]> = check_collisions(cam, &mut a, 5.0)
                .iter()
                .map(|t| t.center.to_array().map(f32::to_bits))
                .collect();
            let mut cleared_b: Vec<[u32; 3]> = check_collisions(cam, &mut b, 5.0)
                .iter()
                .map(|t| t.center.to_array().map(f32::to_bits))
                .collect();
            cleared_a.sort();
            cleared_b.sort();
            prop_assert_eq!(cleared_a, cleared_b);
        }
    }
}
