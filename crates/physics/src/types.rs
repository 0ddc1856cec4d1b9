//! Plain-data types shared by the store, the stepper and the renderer.
//!
//! Everything here is `#[repr(C)]` and `Pod` so slices can be handed to a GPU
//! instance buffer with `bytemuck::cast_slice`.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared length, used for contact tests without a sqrt.
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// One simulated sphere.
///
/// `radius`, `mass` and `scale` are fixed when the ball is spawned; only
/// `pos`, `vel`, `spin` and the accumulated `rotation` change per step.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Cosmetic angular velocity (Euler radians per frame). Collisions never touch it.
    pub spin: Vec3,
    /// Accumulated Euler rotation of the rendered mesh.
    pub rotation: Vec3,
    pub radius: f32,
    pub mass: f32,
    /// Random size factor the radius was derived from.
    pub scale: f32,
}

impl Ball {
    /// Build a ball from a base radius, a size factor and a mass density.
    ///
    /// `radius = base_radius * scale`, `mass = radius³ * mass_density`.
    #[must_use]
    pub fn new(pos: Vec3, vel: Vec3, base_radius: f32, scale: f32, mass_density: f32) -> Self {
        let radius = base_radius * scale;
        Self {
            pos,
            vel,
            spin: Vec3::ZERO,
            rotation: Vec3::ZERO,
            radius,
            mass: radius.powi(3) * mass_density,
            scale,
        }
    }

    #[must_use]
    pub fn with_spin(mut self, spin: Vec3) -> Self {
        self.spin = spin;
        self
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    #[must_use]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }

    #[must_use]
    pub fn transform(&self) -> BallTransform {
        BallTransform {
            position: self.pos,
            radius: self.radius,
            rotation: self.rotation,
            scale: self.scale,
            rotation_delta: self.spin,
            _padding: 0.0,
        }
    }
}

/// What the renderer reads for one ball after a step.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BallTransform {
    pub position: Vec3,
    pub radius: f32,
    pub rotation: Vec3,
    pub scale: f32,
    pub rotation_delta: Vec3,
    pub _padding: f32,
}
