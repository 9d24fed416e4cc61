use rand::SeedableRng;
use rand::rngs::StdRng;

use laser_asteroids::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use laser_asteroids::entities::{Asteroid, AsteroidSize, FlyingObject};
use laser_asteroids::input::Key;
use laser_asteroids::session::Session;
use laser_asteroids::types::{Vector2D, Velocity};

fn empty_session() -> Session {
    Session::empty(StdRng::seed_from_u64(0xA57E_701D))
}

#[test]
fn single_shot_flies_then_expires() {
    let mut session = empty_session();
    session.key_down(Key::SingleFire);
    session.key_up(Key::SingleFire);

    assert_eq!(session.lasers.len(), 1);
    let laser = &session.lasers[0];
    assert_eq!(laser.body.position, Vector2D::new(700.0, 350.0));
    assert!(laser.body.velocity.dx().abs() < 1e-9);
    assert!((laser.body.velocity.dy() - 10.0).abs() < 1e-9);

    for tick in 1..60 {
        session.update();
        assert!(session.lasers[0].is_alive(), "laser died early at tick {tick}");
    }
    session.update();
    assert!(session.lasers.iter().all(|l| !l.is_alive()));

    // Expired lasers are purged by the next collision pass.
    session.update();
    assert!(session.lasers.is_empty());
}

#[test]
fn laser_breaks_a_big_rock_into_three() {
    let mut session = empty_session();
    session.asteroids.push(Asteroid::new(
        AsteroidSize::Big,
        Vector2D::new(700.0, 420.0),
        Velocity::default(),
    ));
    session.key_down(Key::SingleFire);
    // The laser starts 70 below the rock and closes 10 per tick, so the
    // fourth collision pass is the first inside reach.
    for _ in 0..4 {
        session.update();
    }

    let sizes: Vec<AsteroidSize> = session.asteroids.iter().map(|a| a.size).collect();
    assert_eq!(sizes.len(), 3);
    assert_eq!(sizes.iter().filter(|s| **s == AsteroidSize::Medium).count(), 2);
    assert_eq!(sizes.iter().filter(|s| **s == AsteroidSize::Small).count(), 1);
    assert!(session.lasers.is_empty());
    assert!(session.ship.is_alive());
}

#[test]
fn drifting_into_a_rock_ends_the_game_until_restart() {
    let mut session = empty_session();
    session.asteroids.push(Asteroid::new(
        AsteroidSize::Small,
        Vector2D::new(760.0, 350.0),
        Velocity::new(-5.0, 0.0),
    ));
    for _ in 0..10 {
        session.update();
    }
    assert!(session.is_game_over());

    // A dead ship cannot shoot.
    session.key_down(Key::SpreadFire);
    assert!(session.lasers.is_empty());

    session.key_down(Key::Restart);
    assert!(!session.is_game_over());
    assert_eq!(session.asteroids.len(), 5);
    assert!(session.asteroids.iter().all(|a| a.size == AsteroidSize::Big && a.is_alive()));
    assert!(session.lasers.is_empty());
}

#[test]
fn everything_stays_on_screen() {
    let mut session = Session::with_seed(11);
    session.key_down(Key::ThrustForward);
    session.key_down(Key::TurnLeft);
    session.key_down(Key::RapidFire);
    for _ in 0..500 {
        session.update();
        let bodies = std::iter::once(session.ship.body())
            .chain(session.lasers.iter().map(|l| l.body()))
            .chain(session.asteroids.iter().map(|a| a.body()));
        for body in bodies {
            assert!((0.0..=SCREEN_WIDTH).contains(&body.position.x));
            assert!((0.0..=SCREEN_HEIGHT).contains(&body.position.y));
            assert!(body.velocity.dx().abs() <= 50.0);
            assert!(body.velocity.dy().abs() <= 50.0);
        }
    }
}
