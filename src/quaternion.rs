use std::ops::Mul;
use std::fmt;

use crate::scalar::{Scalar, DOUBLE_EPS};
use crate::vector::Vec3;

/// Rotation quaternion `s + v.x*i + v.y*j + v.z*k`.
///
/// Buffers handed in and out of the crate use scalar-last order
/// `[x, y, z, w]`, so identity is `[0, 0, 0, 1]`.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Quaternion {
    pub s: f64,
    pub v: Vec3,
}
impl Quaternion {
    pub fn new(s: f64, xi: f64, yj: f64, zk: f64) -> Self {
        Self {
            s,
            v: Vec3::new(xi, yj, zk),
        }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Rotation of `angle` radians about `axis`, right-handed.
    ///
    /// The axis need not be unit length. An axis whose squared length
    /// does not exceed `DOUBLE_EPS` gives the identity.
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        let n_sq = axis.len_sq();
        if n_sq > DOUBLE_EPS {
            let half = 0.5 * angle;
            Self {
                s: half.cos(),
                v: axis * (half.sin() / n_sq.sqrt()),
            }
        }
        else {
            Self::identity()
        }
    }

    pub fn from_array<T: Scalar>(q: &[T; 4]) -> Self {
        Self::new(q[3].to_f64(), q[0].to_f64(), q[1].to_f64(), q[2].to_f64())
    }

    pub fn to_array<T: Scalar>(&self) -> [T; 4] {
        [
            T::from_f64(self.v.x),
            T::from_f64(self.v.y),
            T::from_f64(self.v.z),
            T::from_f64(self.s),
        ]
    }

    pub fn len_sq(&self) -> f64 {
        self.s*self.s + self.v.len_sq()
    }

    pub fn len(&self) -> f64 {
        self.len_sq().sqrt()
    }

    pub fn conjugate(&self) -> Self {
        Self {
            s: self.s,
            v: -self.v,
        }
    }

    /// Rotates `vec` by this quaternion, assumed unit length.
    pub fn rotate(&self, vec: Vec3) -> Vec3 {
        let t = self.v.cross(vec) * 2.0;
        vec + t * self.s + self.v.cross(t)
    }

    /// Rotation matrix in `cgmath`'s column-major layout.
    pub fn to_matrix3(&self) -> cgmath::Matrix3<f64> {
        cgmath::Matrix3::from(cgmath::Quaternion::<f64>::from(*self))
    }
}

/// Hamilton product. `p * q` applies `q` first, then `p`.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self {
            s: self.s * other.s - self.v.dot(other.v),
            v: other.v * self.s + self.v * other.s + self.v.cross(other.v),
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Quaternion> for cgmath::Quaternion<f64> {
    fn from(q: Quaternion) -> Self {
        cgmath::Quaternion::new(q.s, q.v.x, q.v.y, q.v.z)
    }
}

impl From<cgmath::Quaternion<f64>> for Quaternion {
    fn from(q: cgmath::Quaternion<f64>) -> Self {
        Quaternion::new(q.s, q.v.x, q.v.y, q.v.z)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.v.x, self.v.y, self.v.z, self.s)
    }
}


#[cfg(test)]
fn approx(a: Quaternion, b: Quaternion) -> bool {
    (a.s - b.s).abs() < 1.0e-12 && (a.v - b.v).len() < 1.0e-12
}

#[test]
fn hamilton_matches_cgmath() {
    let p = Quaternion::new(0.3, -0.5, 0.2, 0.7);
    let q = Quaternion::new(-0.1, 0.4, 0.9, -0.6);

    let ours = p * q;
    let theirs = Quaternion::from(cgmath::Quaternion::<f64>::from(p) * cgmath::Quaternion::<f64>::from(q));
    assert!(approx(ours, theirs));
    assert!(!approx(ours, q * p));
}

#[test]
fn ijk_products() {
    let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
    assert!(i * j == k);
    assert!(j * i == Quaternion::new(0.0, 0.0, 0.0, -1.0));
    assert!(i * i == Quaternion::new(-1.0, 0.0, 0.0, 0.0));
}

#[test]
fn axis_angle_matches_cgmath() {
    use cgmath::{InnerSpace, Rotation3};

    let axis = Vec3::new(1.0, -2.0, 0.5);
    let angle = 0.8;
    let ours = Quaternion::from_axis_angle(axis, angle);

    let unit = cgmath::Vector3::new(axis.x, axis.y, axis.z).normalize();
    let theirs = <cgmath::Quaternion<f64> as Rotation3>::from_axis_angle(unit, cgmath::Rad(angle));
    assert!(approx(ours, theirs.into()));
    assert!((ours.len() - 1.0).abs() < 1.0e-12);
}

#[test]
fn axis_angle_with_zero_axis_is_identity() {
    assert!(Quaternion::from_axis_angle(Vec3::zero(), 1.0) == Quaternion::identity());
}

#[test]
fn axis_cutoff_is_on_squared_length() {
    let short = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0e-8, 0.0), 1.0);
    assert!(short == Quaternion::identity());

    let long = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0e-6, 0.0), 1.0);
    assert!((long.v.y - 0.5_f64.sin()).abs() < 1.0e-12);
}

#[test]
fn rotate_quarter_turn_about_z() {
    let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2);
    let r = q.rotate(Vec3::new(1.0, 0.0, 0.0));
    assert!((r - Vec3::new(0.0, 1.0, 0.0)).len() < 1.0e-12);
}

#[test]
fn rotate_matches_matrix() {
    let q = Quaternion::from_axis_angle(Vec3::new(0.3, 1.0, -0.2), 1.3);
    let vec = Vec3::new(0.5, -1.5, 2.0);

    let m = q.to_matrix3() * cgmath::Vector3::new(vec.x, vec.y, vec.z);
    let r = q.rotate(vec);
    assert!((r - Vec3::new(m.x, m.y, m.z)).len() < 1.0e-12);
}

#[test]
fn conjugate_undoes_rotation() {
    let q = Quaternion::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.6);
    assert!(approx(q * q.conjugate(), Quaternion::identity()));
}

#[test]
fn array_order_is_scalar_last() {
    let q = Quaternion::from_array(&[0.0_f32, 0.0, 0.0, 1.0]);
    assert!(q == Quaternion::identity());

    let arr: [f64; 4] = Quaternion::new(4.0, 1.0, 2.0, 3.0).to_array();
    assert!(arr == [1.0, 2.0, 3.0, 4.0]);
}
