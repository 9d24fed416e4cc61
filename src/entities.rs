use crate::constants::*;
use crate::types::{Vector2D, Velocity, heading_vector, wrap_coordinate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Ship,
    Laser,
    BigRock,
    MediumRock,
    SmallRock,
}

// --- Shared motion state ---
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: Vector2D,
    pub velocity: Velocity,
    pub radius: f64,
    pub angle: f64, // Degrees, unbounded
    pub alive: bool,
}

impl Body {
    pub fn new(position: Vector2D, velocity: Velocity, radius: f64, angle: f64) -> Self {
        Body { position, velocity, radius, angle, alive: true }
    }

    pub fn advance(&mut self, width: f64, height: f64) {
        if self.alive {
            self.position = self.position.add(self.velocity.as_vector());
        }
        self.position.x = wrap_coordinate(self.position.x, width);
        self.position.y = wrap_coordinate(self.position.y, height);
    }
}

pub trait FlyingObject {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;
    fn sprite(&self) -> Sprite;

    fn advance(&mut self, width: f64, height: f64) {
        self.body_mut().advance(width, height);
    }

    fn is_alive(&self) -> bool {
        self.body().alive
    }

    fn kill(&mut self) {
        self.body_mut().alive = false;
    }
}

// --- Ship ---
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub body: Body,
}

impl Ship {
    pub fn new() -> Self {
        let center = Vector2D::new((SCREEN_WIDTH / 2.0).floor(), (SCREEN_HEIGHT / 2.0).floor());
        Ship { body: Body::new(center, Velocity::default(), SHIP_RADIUS, 0.0) }
    }

    pub fn heading(&self) -> f64 {
        self.body.angle + BULLET_HEADING_OFFSET
    }

    pub fn turn(&mut self, degrees: f64) {
        self.body.angle += degrees;
    }

    pub fn thrust(&mut self, direction: f64) {
        let impulse = heading_vector(self.heading(), SHIP_THRUST_AMOUNT * direction);
        self.body.velocity.accelerate(impulse);
    }

    pub fn recoil(&mut self, factor: f64) {
        self.thrust(-factor);
    }
}

impl FlyingObject for Ship {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn sprite(&self) -> Sprite {
        Sprite::Ship
    }
}

// --- Laser ---
#[derive(Clone, Debug, PartialEq)]
pub struct Laser {
    pub body: Body,
    pub lifetime: u32,
}

impl Laser {
    pub fn fire(origin: Vector2D, carrier: Velocity, angle: f64) -> Self {
        let heading = angle + BULLET_HEADING_OFFSET;
        let muzzle = heading_vector(heading, SHIP_THRUST_AMOUNT * BULLET_SPEED_FACTOR);
        let velocity = Velocity::new(carrier.dx() + muzzle.x, carrier.dy() + muzzle.y);
        Laser {
            body: Body::new(origin, velocity, BULLET_RADIUS, heading),
            lifetime: BULLET_LIFE,
        }
    }

    pub fn age(&mut self) {
        self.lifetime = self.lifetime.saturating_sub(1);
        if self.lifetime < 1 {
            self.body.alive = false;
        }
    }
}

impl FlyingObject for Laser {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn sprite(&self) -> Sprite {
        Sprite::Laser
    }
}

// --- Asteroids ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AsteroidSize {
    Big,
    Medium,
    Small,
}

impl AsteroidSize {
    pub fn radius(&self) -> f64 {
        match self {
            AsteroidSize::Big => BIG_ROCK_RADIUS,
            AsteroidSize::Medium => MEDIUM_ROCK_RADIUS,
            AsteroidSize::Small => SMALL_ROCK_RADIUS,
        }
    }

    pub fn spin_rate(&self) -> f64 {
        match self {
            AsteroidSize::Big => BIG_ROCK_SPIN,
            AsteroidSize::Medium => MEDIUM_ROCK_SPIN,
            AsteroidSize::Small => SMALL_ROCK_SPIN,
        }
    }

    pub fn sprite(&self) -> Sprite {
        match self {
            AsteroidSize::Big => Sprite::BigRock,
            AsteroidSize::Medium => Sprite::MediumRock,
            AsteroidSize::Small => Sprite::SmallRock,
        }
    }

    /// Child sizes and the velocity offset each child adds to its parent's.
    pub fn fragments(&self) -> &'static [(AsteroidSize, f64, f64)] {
        match self {
            AsteroidSize::Big => &[
                (AsteroidSize::Medium, 0.0, BIG_SPLIT_VERTICAL_KICK),
                (AsteroidSize::Medium, 0.0, -BIG_SPLIT_VERTICAL_KICK),
                (AsteroidSize::Small, BIG_SPLIT_HORIZONTAL_KICK, 0.0),
            ],
            AsteroidSize::Medium => &[
                (AsteroidSize::Small, MEDIUM_SPLIT_KICK, MEDIUM_SPLIT_KICK),
                (AsteroidSize::Small, -MEDIUM_SPLIT_KICK, -MEDIUM_SPLIT_KICK),
            ],
            AsteroidSize::Small => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Asteroid {
    pub body: Body,
    pub size: AsteroidSize,
}

impl Asteroid {
    pub fn new(size: AsteroidSize, position: Vector2D, velocity: Velocity) -> Self {
        Asteroid {
            body: Body::new(position, velocity, size.radius(), INITIAL_ROCK_ANGLE),
            size,
        }
    }

    pub fn spin(&mut self) {
        self.body.angle += self.size.spin_rate();
    }

    pub fn split(&self) -> Vec<Asteroid> {
        let Body { position, velocity, .. } = self.body;
        self.size
            .fragments()
            .iter()
            .map(|&(size, kick_x, kick_y)| {
                Asteroid::new(
                    size,
                    position,
                    Velocity::new(velocity.dx() + kick_x, velocity.dy() + kick_y),
                )
            })
            .collect()
    }
}

impl FlyingObject for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn sprite(&self) -> Sprite {
        self.size.sprite()
    }
}
