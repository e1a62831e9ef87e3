use super::error::ParticleError;
use super::vec2::Vec2;

/// Velocity component selector for wall reflection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// `'x'` or `'y'`; anything else has no axis.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Axis::X),
            'y' => Some(Axis::Y),
            _ => None,
        }
    }
}

/// A circular gas particle.
///
/// Radius and mass are fixed at construction. Position and velocity change
/// only through [`Particle::update_position`], [`Particle::set_velocity`] and
/// the velocity inversion used for wall bounces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    radius: f64,
    mass: f64,
    position: Vec2,
    velocity: Vec2,
}

impl Particle {
    /// Unchecked constructor. Non-positive radius or mass is accepted as-is;
    /// use [`Particle::try_new`] at trust boundaries.
    pub fn new(radius: f64, mass: f64, position: Vec2, velocity: Vec2) -> Self {
        Self { radius, mass, position, velocity }
    }

    /// Validating constructor: radius and mass finite and positive,
    /// position and velocity finite.
    pub fn try_new(
        radius: f64,
        mass: f64,
        position: Vec2,
        velocity: Vec2,
    ) -> Result<Self, ParticleError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ParticleError::InvalidRadius(radius));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(ParticleError::InvalidMass(mass));
        }
        if !position.is_finite() {
            return Err(ParticleError::NonFinitePosition);
        }
        if !velocity.is_finite() {
            return Err(ParticleError::NonFiniteVelocity);
        }
        Ok(Self::new(radius, mass, position, velocity))
    }

    /// Advance one tick: `position += velocity`
    #[inline]
    pub fn update_position(&mut self) {
        self.position += self.velocity;
    }

    /// Negate exactly one velocity component.
    #[inline]
    pub fn invert_velocity_component(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.velocity.x = -self.velocity.x,
            Axis::Y => self.velocity.y = -self.velocity.y,
        }
    }

    /// Same as [`Particle::invert_velocity_component`] keyed by name.
    /// Unknown names leave the velocity untouched.
    pub fn invert_velocity_component_named(&mut self, component: char) {
        if let Some(axis) = Axis::from_char(component) {
            self.invert_velocity_component(axis);
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Euclidean norm of the velocity
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }
}
