use std::collections::HashSet;

use log::debug;

use crate::constants::*;
use crate::entities::{FlyingObject, Laser, Ship};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    TurnLeft,
    TurnRight,
    ThrustForward,
    ThrustBack,
    RapidFire,
    SingleFire,
    SpreadFire,
    Restart,
}

impl Key {
    pub fn is_edge_triggered(&self) -> bool {
        matches!(self, Key::SingleFire | Key::SpreadFire | Key::Restart)
    }
}

#[derive(Clone, Debug, Default)]
pub struct HeldKeys {
    keys: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        HeldKeys::default()
    }

    pub fn press(&mut self, key: Key) -> bool {
        self.keys.insert(key)
    }

    pub fn release(&mut self, key: Key) -> bool {
        self.keys.remove(&key)
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

}

pub fn check_keys(held: &HeldKeys, ship: &mut Ship, lasers: &mut Vec<Laser>) {
    if held.is_held(Key::TurnLeft) {
        ship.turn(SHIP_TURN_AMOUNT);
    }
    if held.is_held(Key::TurnRight) {
        ship.turn(-SHIP_TURN_AMOUNT);
    }
    if held.is_held(Key::ThrustForward) {
        ship.thrust(1.0);
    }
    if held.is_held(Key::ThrustBack) {
        ship.thrust(-1.0);
    }
    if held.is_held(Key::RapidFire) {
        fire(ship, lasers, &[0.0], RAPID_FIRE_RECOIL);
    }
}

pub fn on_key_press(key: Key, ship: &mut Ship, lasers: &mut Vec<Laser>) -> usize {
    match key {
        Key::SingleFire => fire(ship, lasers, &[0.0], SINGLE_FIRE_RECOIL),
        Key::SpreadFire => fire(ship, lasers, &SPREAD_ANGLES, SPREAD_FIRE_RECOIL),
        _ => 0,
    }
}

pub fn fire(ship: &mut Ship, lasers: &mut Vec<Laser>, offsets: &[f64], recoil: f64) -> usize {
    if !ship.is_alive() {
        return 0;
    }
    let Ship { body } = &*ship;
    lasers.extend(
        offsets
            .iter()
            .map(|offset| Laser::fire(body.position, body.velocity, body.angle + offset)),
    );
    ship.recoil(recoil);
    debug!("Fired {} laser(s), {} in flight", offsets.len(), lasers.len());
    offsets.len()
}
