//! Enemy path-following system.
//!
//! Moves every enemy a fixed distance per tick along the waypoint path.

use hecs::World;

use rampart_core::components::{Enemy, PathProgress};
use rampart_core::types::{Position, Velocity};

/// Advance one enemy by `speed` toward its next waypoint.
///
/// When the waypoint is closer than one step the enemy snaps onto it and the
/// path index advances; the leftover distance is not carried over. Once the
/// enemy stands on the last waypoint, the following call marks `reached_end`.
pub fn advance_along_path(
    position: &mut Position,
    progress: &mut PathProgress,
    speed: f64,
    path: &[Position],
) {
    if progress.path_index + 1 >= path.len() {
        progress.reached_end = true;
        return;
    }

    let waypoint = path[progress.path_index + 1];
    let distance = position.distance_to(&waypoint);
    if distance < speed {
        *position = waypoint;
        progress.path_index += 1;
    } else {
        *position = position.advanced_by(&Velocity::toward(position, &waypoint, speed));
    }
}

/// Run path movement for all enemies.
pub fn run(world: &mut World, path: &[Position]) {
    for (_entity, (pos, progress, enemy)) in
        world.query_mut::<(&mut Position, &mut PathProgress, &Enemy)>()
    {
        if progress.reached_end {
            continue;
        }
        advance_along_path(pos, progress, enemy.speed, path);
    }
}
