use log::{debug, trace};

use crate::scalar::DOUBLE_EPS;
use crate::vector::Vec3;

/// Height of the cap the normalized plane is lifted onto.
const LIFT: f64 = 1.0;
/// Extra spin per unit of distance travelled outside the unit circle.
/// Kept at single precision to match the AntTweakBar trackball.
const AMPLIFICATION: f64 = 0.2_f32 as f64;

/// Rotation between two points on the virtual sphere. `axis` is not unit
/// length; its magnitude is the sine of the unamplified angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAngle {
    pub axis:  Vec3,
    pub angle: f64,
}

fn lift(p: [f64; 2]) -> Option<Vec3> {
    Vec3::new(p[0], p[1], LIFT).try_normalized(DOUBLE_EPS)
}

/// Factor applied to the angle once the cursor leaves the unit circle.
pub fn amplification(p: [f64; 2]) -> f64 {
    let r_sq = p[0]*p[0] + p[1]*p[1];
    if r_sq > 1.0 {
        1.0 + AMPLIFICATION * (r_sq.sqrt() - 1.0)
    }
    else {
        1.0
    }
}

/// Rotation carrying normalized point `start` onto `current`.
///
/// Returns `None` when either lifted point is too short (or NaN) to
/// normalize; callers must then leave their output alone.
pub fn solve(start: [f64; 2], current: [f64; 2]) -> Option<AxisAngle> {
    let (v0, v1) = match (lift(start), lift(current)) {
        (Some(v0), Some(v1)) => (v0, v1),
        _ => {
            debug!("degenerate drag {start:?} -> {current:?}, skipping");
            return None;
        }
    };

    let axis = v0.cross(v1);
    let sa = axis.len();
    let ca = v0.dot(v1);
    let angle = sa.atan2(ca) * amplification(current);
    trace!("axis {axis}, angle {angle}");

    Some(AxisAngle { axis, angle })
}


#[test]
fn same_point_gives_zero_angle() {
    let rot = solve([0.3, -0.2], [0.3, -0.2]).unwrap();
    assert!(rot.angle == 0.0);
    assert!(rot.axis == Vec3::zero());
}

#[test]
fn horizontal_drag_turns_about_y() {
    let rot = solve([0.0, 0.0], [0.5, 0.0]).unwrap();
    assert!(rot.axis.x == 0.0);
    assert!(rot.axis.y > 0.0);
    assert!(rot.axis.z == 0.0);
    assert!((rot.angle - 0.5_f64.atan()).abs() < 1.0e-15);
}

#[test]
fn vertical_drag_turns_about_negative_x() {
    let rot = solve([0.0, 0.0], [0.0, 0.5]).unwrap();
    assert!(rot.axis.x < 0.0);
    assert!(rot.axis.y.abs() < 1.0e-15);
}

#[test]
fn small_drags_are_linear() {
    let a = solve([0.0, 0.0], [0.01, 0.0]).unwrap().angle;
    let b = solve([0.0, 0.0], [0.02, 0.0]).unwrap().angle;
    assert!((b / a - 2.0).abs() < 1.0e-3);
}

#[test]
fn no_amplification_on_unit_circle() {
    assert!(amplification([1.0, 0.0]) == 1.0);
    assert!(amplification([0.0, -1.0]) == 1.0);
    assert!(amplification([0.5, 0.5]) == 1.0);

    let rot = solve([0.0, 0.0], [1.0, 0.0]).unwrap();
    assert!((rot.angle - std::f64::consts::FRAC_PI_4).abs() < 1.0e-15);
}

#[test]
fn amplification_past_unit_circle() {
    let factor = amplification([1.5, 0.0]);
    assert!(factor > 1.0);
    assert!((factor - (1.0 + 0.2 * 0.5)).abs() < 1.0e-7);

    let rot = solve([0.0, 0.0], [1.5, 0.0]).unwrap();
    let plain = 1.5_f64.atan();
    assert!(rot.angle > plain);
    assert!((rot.angle - plain * factor).abs() < 1.0e-14);
}

#[test]
fn nan_points_are_degenerate() {
    assert!(solve([f64::NAN, 0.0], [0.1, 0.0]).is_none());
    assert!(solve([0.1, 0.0], [0.0, f64::NAN]).is_none());
}
