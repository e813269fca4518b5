/// Degeneracy threshold for vector norms computed in double precision.
pub const DOUBLE_EPS: f64 = 1.0e-14;
/// Degeneracy threshold for quaternion norms computed in double precision.
pub const DOUBLE_EPS_SQ: f64 = 1.0e-28;
pub const FLOAT_EPS: f32 = 1.0e-7;
pub const FLOAT_EPS_SQ: f32 = 1.0e-14;

/// Storage type of caller-owned quaternion buffers.
///
/// All trackball math runs in `f64`; a `Scalar` is widened on the way in
/// and narrowed once on the final write.
pub trait Scalar: Copy {
    fn to_f64(self) -> f64;
    fn from_f64(val: f64) -> Self;
}
impl Scalar for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn from_f64(val: f64) -> Self {
        val as f32
    }
}
impl Scalar for f64 {
    fn to_f64(self) -> f64 {
        self
    }
    fn from_f64(val: f64) -> Self {
        val
    }
}


#[test]
fn narrowing_is_only_lossy_for_f32() {
    let val = 0.1_f64;
    assert!(f64::from_f64(val) == val);
    assert!(f32::from_f64(val) == 0.1_f32);
    assert!(0.1_f32.to_f64() != val);
}

#[test]
fn eps_sq_is_eps_squared() {
    assert!((DOUBLE_EPS * DOUBLE_EPS - DOUBLE_EPS_SQ).abs() < 1.0e-40);
    assert!((FLOAT_EPS * FLOAT_EPS - FLOAT_EPS_SQ).abs() < 1.0e-20);
}
