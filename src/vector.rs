use std::ops::{Neg, Add, Sub, Mul, Div};
use std::fmt;

#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn len(&self) -> f64 {
        self.len_sq().sqrt()
    }

    pub fn len_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    pub fn dot(&self, vec: Vec3) -> f64 {
        self.x*vec.x + self.y*vec.y + self.z*vec.z
    }

    pub fn cross(&self, vec: Vec3) -> Self {
        Self::new(
            self.y*vec.z - self.z*vec.y,
            self.z*vec.x - self.x*vec.z,
            self.x*vec.y - self.y*vec.x,
        )
    }

    /// Normalized copy, or `None` when the length does not exceed `eps`.
    /// NaN lengths are rejected as well.
    pub fn try_normalized(&self, eps: f64) -> Option<Self> {
        let len = self.len();
        if len > eps {
            Some(*self / len)
        }
        else {
            None
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Self::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Self::new(self.x / other, self.y / other, self.z / other)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Vec3 {
        Vec3::new(arr[0], arr[1], arr[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(vec: Vec3) -> [f64; 3] {
        [vec.x, vec.y, vec.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}


#[test]
fn dot_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    let dot = v.dot(v2);
    assert!(dot == 53.0);
}

#[test]
fn cross_is_right_handed() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    assert!(x.cross(y) == Vec3::new(0.0, 0.0, 1.0));
    assert!(y.cross(x) == Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn try_normalized_rejects_short_and_nan() {
    assert!(Vec3::zero().try_normalized(1.0e-14).is_none());
    assert!(Vec3::new(f64::NAN, 0.0, 1.0).try_normalized(1.0e-14).is_none());

    let unit = Vec3::new(3.0, 0.0, 4.0).try_normalized(1.0e-14).unwrap();
    assert!(unit == Vec3::new(0.6, 0.0, 0.8));
}

#[test]
fn try_normalized_at_threshold() {
    let v = Vec3::new(3.0e-14, 0.0, 4.0e-14);
    let len = v.len();
    assert!(v.try_normalized(len).is_none());
    assert!(v.try_normalized(len * 0.5).is_some());
}
