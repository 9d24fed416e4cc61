use log::{debug, info};

use crate::entities::{Asteroid, Body, FlyingObject, Laser, Ship};

/// Per-axis proximity test: both `|dx|` and `|dy|` must be under the summed radii.
/// This is a box check, not a circular distance.
pub fn too_close(a: &Body, b: &Body) -> bool {
    let reach = a.radius + b.radius;
    (a.position.x - b.position.x).abs() < reach && (a.position.y - b.position.y).abs() < reach
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub asteroids_hit: usize,
    pub fragments_spawned: usize,
    pub ship_destroyed: bool,
    pub lasers_purged: usize,
    pub asteroids_purged: usize,
}

pub fn check_collisions(
    ship: &mut Ship,
    lasers: &mut Vec<Laser>,
    asteroids: &mut Vec<Asteroid>,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    let fragments = resolve_laser_hits(lasers, asteroids, &mut report);
    report.fragments_spawned = fragments.len();
    asteroids.extend(fragments);

    if ship.is_alive() && asteroids.iter().any(|a| a.is_alive() && too_close(&ship.body, &a.body)) {
        ship.kill();
        report.ship_destroyed = true;
        info!(
            "Ship destroyed at ({:.1}, {:.1})",
            ship.body.position.x, ship.body.position.y
        );
    }

    let (lasers_purged, asteroids_purged) = cleanup_zombies(lasers, asteroids);
    report.lasers_purged = lasers_purged;
    report.asteroids_purged = asteroids_purged;
    report
}

// Each laser registers at most one hit per pass. Fragments are buffered and
// only join the field after every laser has been checked.
fn resolve_laser_hits(
    lasers: &mut [Laser],
    asteroids: &mut [Asteroid],
    report: &mut CollisionReport,
) -> Vec<Asteroid> {
    let mut fragments = Vec::new();
    for laser in lasers.iter_mut() {
        if !laser.is_alive() {
            continue;
        }
        let target = asteroids
            .iter_mut()
            .find(|asteroid| asteroid.is_alive() && too_close(&laser.body, &asteroid.body));
        if let Some(asteroid) = target {
            laser.kill();
            asteroid.kill();
            let children = asteroid.split();
            debug!(
                "{:?} asteroid hit at ({:.1}, {:.1}), {} fragments",
                asteroid.size,
                asteroid.body.position.x,
                asteroid.body.position.y,
                children.len()
            );
            report.asteroids_hit += 1;
            fragments.extend(children);
        }
    }
    fragments
}

pub fn cleanup_zombies(lasers: &mut Vec<Laser>, asteroids: &mut Vec<Asteroid>) -> (usize, usize) {
    let lasers_before = lasers.len();
    lasers.retain(|laser| laser.is_alive());
    let asteroids_before = asteroids.len();
    asteroids.retain(|asteroid| asteroid.is_alive());
    (lasers_before - lasers.len(), asteroids_before - asteroids.len())
}
