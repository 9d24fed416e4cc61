use crate::constants::MAX_AXIS_SPEED;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    pub fn scale(&self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }

    pub fn add(&self, other: Vector2D) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    dx: f64,
    dy: f64,
}

impl Velocity {
    pub fn new(dx: f64, dy: f64) -> Self {
        Velocity { dx: clamp_axis(dx), dy: clamp_axis(dy) }
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn set_dx(&mut self, dx: f64) {
        self.dx = clamp_axis(dx);
    }

    pub fn set_dy(&mut self, dy: f64) {
        self.dy = clamp_axis(dy);
    }

    pub fn accelerate(&mut self, impulse: Vector2D) {
        self.set_dx(self.dx + impulse.x);
        self.set_dy(self.dy + impulse.y);
    }

    pub fn as_vector(&self) -> Vector2D {
        Vector2D::new(self.dx, self.dy)
    }
}

fn clamp_axis(value: f64) -> f64 {
    value.clamp(-MAX_AXIS_SPEED, MAX_AXIS_SPEED)
}

pub fn heading_vector(degrees: f64, magnitude: f64) -> Vector2D {
    let radians = degrees.to_radians();
    Vector2D::new(radians.cos(), radians.sin()).scale(magnitude)
}

/// Hard-reset wrap: past `max` snaps to 0, below 0 snaps to `max`.
/// The overshoot is dropped rather than carried across the edge.
pub fn wrap_coordinate(value: f64, max: f64) -> f64 {
    if value > max {
        0.0
    } else if value < 0.0 {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_saturates_at_both_bounds() {
        let v = Velocity::new(120.0, -75.5);
        assert_eq!(v.dx(), 50.0);
        assert_eq!(v.dy(), -50.0);

        let mut v = Velocity::new(49.0, -49.0);
        v.accelerate(Vector2D::new(3.0, -3.0));
        assert_eq!((v.dx(), v.dy()), (50.0, -50.0));

        v.set_dx(12.5);
        v.set_dy(-0.25);
        assert_eq!((v.dx(), v.dy()), (12.5, -0.25));
    }

    #[test]
    fn velocity_stays_in_range_for_any_assignment() {
        let mut v = Velocity::default();
        for step in -400..=400 {
            let attempt = step as f64 * 0.75;
            v.set_dx(attempt);
            v.set_dy(-attempt);
            assert!((-50.0..=50.0).contains(&v.dx()));
            assert!((-50.0..=50.0).contains(&v.dy()));
        }
    }

    #[test]
    fn wrap_resets_instead_of_modulo() {
        assert_eq!(wrap_coordinate(1401.0, 1400.0), 0.0);
        assert_eq!(wrap_coordinate(1449.0, 1400.0), 0.0);
        assert_eq!(wrap_coordinate(-0.5, 1400.0), 1400.0);
        assert_eq!(wrap_coordinate(-300.0, 700.0), 700.0);
        assert_eq!(wrap_coordinate(1400.0, 1400.0), 1400.0);
        assert_eq!(wrap_coordinate(0.0, 700.0), 0.0);
    }

    #[test]
    fn heading_vector_points_counter_clockwise() {
        let up = heading_vector(90.0, 10.0);
        assert!(up.x.abs() < 1e-9);
        assert!((up.y - 10.0).abs() < 1e-9);

        let left = heading_vector(180.0, 2.0);
        assert!((left.x + 2.0).abs() < 1e-9);
        assert!(left.y.abs() < 1e-9);
    }
}
