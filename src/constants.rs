use std::time::Duration;

// --- World ---
pub const SCREEN_WIDTH: f64 = 1400.0;
pub const SCREEN_HEIGHT: f64 = 700.0;
pub const MAX_AXIS_SPEED: f64 = 50.0; // Per-axis velocity clamp

// --- Lasers ---
pub const BULLET_RADIUS: f64 = 30.0;
pub const BULLET_SPEED_FACTOR: f64 = 40.0; // Muzzle velocity in units of SHIP_THRUST_AMOUNT
pub const BULLET_LIFE: u32 = 60; // Ticks
pub const BULLET_HEADING_OFFSET: f64 = 90.0; // Degrees between ship angle and its nose

// --- Ship ---
pub const SHIP_TURN_AMOUNT: f64 = 3.0; // Degrees per tick
pub const SHIP_THRUST_AMOUNT: f64 = 0.25;
pub const SHIP_RADIUS: f64 = 30.0;

// Recoil impulses, in units of SHIP_THRUST_AMOUNT
pub const RAPID_FIRE_RECOIL: f64 = 3.0;
pub const SINGLE_FIRE_RECOIL: f64 = 2.0;
pub const SPREAD_FIRE_RECOIL: f64 = 10.0;
pub const SPREAD_ANGLES: [f64; 3] = [-25.0, 0.0, 25.0];

// --- Asteroids ---
pub const INITIAL_ROCK_COUNT: usize = 5;
pub const INITIAL_ROCK_ANGLE: f64 = 90.0;

pub const BIG_ROCK_SPIN: f64 = 1.0;
pub const BIG_ROCK_SPEED: f64 = 1.5;
pub const BIG_ROCK_RADIUS: f64 = 15.0;

pub const MEDIUM_ROCK_SPIN: f64 = -2.0;
pub const MEDIUM_ROCK_RADIUS: f64 = 5.0;

pub const SMALL_ROCK_SPIN: f64 = 5.0;
pub const SMALL_ROCK_RADIUS: f64 = 2.0;

// Fragment velocity offsets
pub const BIG_SPLIT_VERTICAL_KICK: f64 = 2.0;
pub const BIG_SPLIT_HORIZONTAL_KICK: f64 = 5.0;
pub const MEDIUM_SPLIT_KICK: f64 = 1.5;

// --- Terminal host ---
pub const FRAME_DURATION: Duration = Duration::from_micros(16_667); // ~60 FPS
pub const KEY_HOLD_TICKS: u64 = 8; // Synthetic release when the terminal never reports one
pub const KEY_FIRST_REPEAT_TICKS: u64 = 40; // Terminals wait ~500ms before auto-repeat starts
pub const DEBUG_TERMINAL_WIDTH: u16 = 80;
pub const DEBUG_TERMINAL_HEIGHT: u16 = 24;
pub const LOG_FILE: &str = "laser-asteroids.log";
