//! Enemy merge pass
//!
//! Runs once per tick after enemy movement. A single forward pass over the
//! enemy list: each enemy not yet absorbed seeds a cluster with every later,
//! unabsorbed enemy overlapping it. Overlaps that only chain through another
//! cluster member are left for following ticks, so big blobs grow gradually.

use glam::DVec2;

use super::collision::is_colliding;
use super::source::IdSource;
use super::state::Enemy;
use crate::consts::MERGE_SPEED_BONUS;

/// Fuse overlapping enemies, preserving the order of survivors
///
/// A merged enemy sits at the mean of its members' positions, has the sum of
/// their radii and the seed's speed plus `MERGE_SPEED_BONUS` per absorbed
/// enemy. Total radius is conserved.
pub fn merge_overlapping_enemies(enemies: &[Enemy], unique: &mut dyn IdSource) -> Vec<Enemy> {
    let mut absorbed = vec![false; enemies.len()];
    let mut merged = Vec::with_capacity(enemies.len());

    for (i, seed) in enemies.iter().enumerate() {
        if absorbed[i] {
            continue;
        }

        let cluster: Vec<usize> = (i + 1..enemies.len())
            .filter(|&j| !absorbed[j] && is_colliding(seed, &enemies[j]))
            .collect();

        if cluster.is_empty() {
            merged.push(seed.clone());
            continue;
        }

        let members = (cluster.len() + 1) as f64;
        let pos_sum = cluster
            .iter()
            .fold(seed.pos, |acc: DVec2, &j| acc + enemies[j].pos);
        let radius = seed.radius + cluster.iter().map(|&j| enemies[j].radius).sum::<f64>();

        for &j in &cluster {
            absorbed[j] = true;
        }

        let fused = Enemy {
            id: format!("jason{}", unique.next_id()),
            pos: pos_sum / members,
            radius,
            speed: seed.speed + MERGE_SPEED_BONUS * cluster.len() as f64,
        };
        log::debug!(
            "{} absorbed {} enemies into {} (radius {})",
            seed.id,
            cluster.len(),
            fused.id,
            fused.radius
        );
        merged.push(fused);
    }

    merged
}
