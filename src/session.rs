use std::f64::consts::TAU;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::{CollisionReport, check_collisions};
use crate::constants::*;
use crate::entities::{Asteroid, AsteroidSize, FlyingObject, Laser, Ship};
use crate::input::{self, HeldKeys, Key};
use crate::rendering::Canvas;
use crate::types::{Vector2D, Velocity};

pub struct Session {
    pub ship: Ship,
    pub lasers: Vec<Laser>,
    pub asteroids: Vec<Asteroid>,
    pub held_keys: HeldKeys,
    pub width: f64,
    pub height: f64,
    pub tick: u64,
    rng: StdRng,
}

impl Session {
    pub fn new(rng: StdRng) -> Self {
        let mut session = Session::empty(rng);
        session.restart();
        session
    }

    pub fn with_seed(seed: u64) -> Self {
        Session::new(StdRng::seed_from_u64(seed))
    }

    pub fn empty(rng: StdRng) -> Self {
        Session {
            ship: Ship::new(),
            lasers: Vec::new(),
            asteroids: Vec::new(),
            held_keys: HeldKeys::new(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            tick: 0,
            rng,
        }
    }

    // Throws away the ship, lasers and asteroids and deals a new field.
    // Held keys survive so a key still physically down stays down.
    pub fn restart(&mut self) {
        self.ship = Ship::new();
        self.lasers.clear();
        self.asteroids.clear();
        for _ in 0..INITIAL_ROCK_COUNT {
            let asteroid = self.spawn_big_asteroid();
            self.asteroids.push(asteroid);
        }
        info!(
            "Session restarted at tick {} with {} asteroids",
            self.tick,
            self.asteroids.len()
        );
    }

    // Big rocks enter from the left or right edge at a random height, drifting
    // at BIG_ROCK_SPEED in a random direction.
    fn spawn_big_asteroid(&mut self) -> Asteroid {
        let x = if self.rng.gen_bool(0.5) { 0.0 } else { self.width };
        let y = self.rng.gen_range(0.0..=self.height);
        let direction = self.rng.gen_range(0.0..TAU);
        let velocity = Velocity::new(
            BIG_ROCK_SPEED * direction.sin(),
            BIG_ROCK_SPEED * direction.cos(),
        );
        Asteroid::new(AsteroidSize::Big, Vector2D::new(x, y), velocity)
    }

    // Key-down notification from the host. Edge-triggered actions fire here,
    // once per physical press.
    pub fn key_down(&mut self, key: Key) {
        if !self.held_keys.press(key) {
            return;
        }
        match key {
            Key::Restart => self.restart(),
            _ if key.is_edge_triggered() => {
                input::on_key_press(key, &mut self.ship, &mut self.lasers);
            }
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held_keys.release(key);
    }

    // One simulation tick: collisions, held controls, then motion.
    // Lasers that expire here stay in the collection until the next
    // collision pass purges them.
    pub fn update(&mut self) -> CollisionReport {
        let report = check_collisions(&mut self.ship, &mut self.lasers, &mut self.asteroids);

        input::check_keys(&self.held_keys, &mut self.ship, &mut self.lasers);

        let (width, height) = (self.width, self.height);
        self.ship.advance(width, height);
        for laser in self.lasers.iter_mut() {
            laser.advance(width, height);
            laser.age();
        }
        for asteroid in self.asteroids.iter_mut() {
            asteroid.advance(width, height);
            asteroid.spin();
        }

        self.tick += 1;
        report
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        draw_object(canvas, &self.ship);
        for laser in &self.lasers {
            draw_object(canvas, laser);
        }
        for asteroid in &self.asteroids {
            draw_object(canvas, asteroid);
        }
    }

    pub fn is_game_over(&self) -> bool {
        !self.ship.is_alive()
    }
}

fn draw_object(canvas: &mut impl Canvas, object: &impl FlyingObject) {
    if object.is_alive() {
        let body = object.body();
        canvas.draw_sprite(object.sprite(), body.position, body.angle);
    }
}
