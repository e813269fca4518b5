use log::trace;

use crate::error::TrackballResult;
use crate::quaternion::Quaternion;
use crate::scalar::{Scalar, DOUBLE_EPS_SQ};
use crate::sphere::{self, AxisAngle};
use crate::viewport::Viewport;

/// Applies `rot` on top of `base` in world space.
///
/// `base` is normalized first. A base whose norm does not exceed
/// `DOUBLE_EPS_SQ` is treated as absent and the drag rotation is returned
/// as-is.
pub fn compose(rot: AxisAngle, base: Quaternion) -> Quaternion {
    let qrot = Quaternion::from_axis_angle(rot.axis, rot.angle);
    let n = base.len();
    if n.abs() > DOUBLE_EPS_SQ {
        let qorig = Quaternion {
            s: base.s / n,
            v: base.v / n,
        };
        qrot * qorig
    }
    else {
        trace!("base rotation has norm {n}, starting fresh");
        qrot
    }
}

/// Trackball bound to one viewport and speed factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trackball {
    viewport: Viewport,
}
impl Trackball {
    pub fn new(width: i32, height: i32, speed: f64) -> TrackballResult<Self> {
        Ok(Self {
            viewport: Viewport::new(width, height, speed)?,
        })
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Rotation after dragging from `down` to `current`, starting at
    /// `down_quat`. `None` means the drag was degenerate and the previous
    /// rotation stands.
    pub fn rotate(
        &self,
        down_quat: Quaternion,
        down: (i32, i32),
        current: (i32, i32),
    ) -> Option<Quaternion> {
        let start = self.viewport.normalize(down.0, down.1);
        let end = self.viewport.normalize(current.0, current.1);
        sphere::solve(start, end).map(|rot| compose(rot, down_quat))
    }
}

/// Applies a trackball drag to the rotation `down_quat`, writing the result
/// to `quat`.
///
/// Quaternions are `[x, y, z, w]`. Returns `Ok(true)` when `quat` was
/// written and `Ok(false)` when the drag was degenerate. `quat` is left
/// untouched on `Ok(false)` and on every error.
#[allow(clippy::too_many_arguments)]
pub fn trackball<T: Scalar>(
    width: i32,
    height: i32,
    speed: T,
    down_quat: &[T; 4],
    down_x: i32,
    down_y: i32,
    x: i32,
    y: i32,
    quat: &mut [T; 4],
) -> TrackballResult<bool> {
    let tb = Trackball::new(width, height, speed.to_f64())?;
    let base = Quaternion::from_array(down_quat);

    match tb.rotate(base, (down_x, down_y), (x, y)) {
        Some(q) => {
            *quat = q.to_array();
            Ok(true)
        }
        None => Ok(false),
    }
}


#[cfg(test)]
const IDENTITY: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
#[cfg(test)]
const SENTINEL: [f64; 4] = [9.0, -9.0, 9.0, -9.0];

#[cfg(test)]
fn norm(q: &[f64; 4]) -> f64 {
    q.iter().map(|c| c * c).sum::<f64>().sqrt()
}

#[test]
fn drag_right_from_center() {
    let mut quat = SENTINEL;
    let written = trackball(800, 600, 1.0, &IDENTITY, 400, 300, 450, 300, &mut quat).unwrap();
    assert!(written);

    let expected = [0.0, 0.083045172063546, 0.0001393375370193725, 0.996545774152892];
    for (got, want) in quat.iter().zip(expected.iter()) {
        assert!((got - want).abs() < 1.0e-12);
    }
    let angle = 2.0 * quat[3].acos();
    assert!((angle - 0.16628208066077116).abs() < 1.0e-9);
}

#[test]
fn identity_drag_returns_normalized_base() {
    let base = [0.0, 2.0, 0.0, 2.0];
    let mut quat = SENTINEL;
    trackball(800, 600, 1.0, &base, 123, 456, 123, 456, &mut quat).unwrap();

    let h = 0.5_f64.sqrt();
    assert!((quat[0]).abs() < 1.0e-15);
    assert!((quat[1] - h).abs() < 1.0e-15);
    assert!((quat[2]).abs() < 1.0e-15);
    assert!((quat[3] - h).abs() < 1.0e-15);
}

#[test]
fn output_is_unit_length() {
    let base = [0.3, -1.2, 0.4, 2.5];
    let drags = [(10, 20), (790, 590), (400, 1000), (-300, 300), (401, 299)];
    for (x, y) in drags {
        let mut quat = SENTINEL;
        assert!(trackball(800, 600, 1.7, &base, 200, 150, x, y, &mut quat).unwrap());
        assert!((norm(&quat) - 1.0).abs() < 1.0e-12);
    }
}

#[test]
fn zero_base_gives_drag_rotation() {
    let mut fresh = SENTINEL;
    let mut from_identity = SENTINEL;
    trackball(800, 600, 1.0, &[0.0; 4], 400, 300, 450, 320, &mut fresh).unwrap();
    trackball(800, 600, 1.0, &IDENTITY, 400, 300, 450, 320, &mut from_identity).unwrap();
    assert!(fresh == from_identity);

    let tb = Trackball::new(800, 600, 1.0).unwrap();
    let vp = tb.viewport();
    let rot = sphere::solve(vp.normalize(400, 300), vp.normalize(450, 320)).unwrap();
    let qrot: [f64; 4] = Quaternion::from_axis_angle(rot.axis, rot.angle).to_array();
    assert!(fresh == qrot);
}

#[test]
fn errors_leave_output_untouched() {
    let mut quat = SENTINEL;
    assert!(trackball(4, 600, 1.0, &IDENTITY, 0, 0, 1, 1, &mut quat).is_err());
    assert!(quat == SENTINEL);

    assert!(trackball(800, 600, 0.0, &IDENTITY, 0, 0, 1, 1, &mut quat).is_err());
    assert!(trackball(800, 600, -2.0, &IDENTITY, 0, 0, 1, 1, &mut quat).is_err());
    assert!(trackball(800, 600, f64::INFINITY, &IDENTITY, 400, 300, 401, 300, &mut quat).is_err());
    assert!(quat == SENTINEL);
}

#[test]
fn drag_is_applied_in_world_space() {
    let base = Quaternion::from_axis_angle([1.0, 0.0, 0.0].into(), 1.0);
    let rot = sphere::solve([0.0, 0.0], [0.4, 0.1]).unwrap();
    let qrot = Quaternion::from_axis_angle(rot.axis, rot.angle);

    let composed = compose(rot, base);
    let world = qrot * base;
    let local = base * qrot;
    assert!((composed.s - world.s).abs() < 1.0e-12 && (composed.v - world.v).len() < 1.0e-12);
    assert!((composed.v - local.v).len() > 1.0e-3);
}

#[test]
fn amplifies_only_outside_unit_circle() {
    let tb = Trackball::new(200, 105, 1.0).unwrap();
    let vp = tb.viewport();
    assert!(vp.normalize(151, 52) == [1.0, 0.0]);
    assert!(sphere::amplification(vp.normalize(151, 52)) == 1.0);

    let outside = vp.normalize(152, 52);
    let factor = sphere::amplification(outside);
    assert!(factor > 1.0);

    let q = tb.rotate(Quaternion::identity(), (100, 52), (152, 52)).unwrap();
    let plain = sphere::solve(vp.normalize(100, 52), outside).unwrap().angle / factor;
    let angle = 2.0 * q.s.acos();
    assert!((angle - plain * factor).abs() < 1.0e-9);
    assert!(angle > plain);
}

#[test]
fn f32_storage_narrows_final_result() {
    let mut single = [9.0_f32; 4];
    let mut double = SENTINEL;
    trackball(800, 600, 1.0_f32, &[0.0, 0.0, 0.0, 1.0], 100, 100, 300, 500, &mut single).unwrap();
    trackball(800, 600, 1.0_f64, &IDENTITY, 100, 100, 300, 500, &mut double).unwrap();

    for (s, d) in single.iter().zip(double.iter()) {
        assert!(*s == *d as f32);
    }
}

#[test]
fn speed_scales_rotation() {
    let tb = Trackball::new(800, 600, 1.0).unwrap();
    let fast = Trackball::new(800, 600, 2.0).unwrap();
    let slow = tb.rotate(Quaternion::identity(), (400, 300), (420, 300)).unwrap();
    let quick = fast.rotate(Quaternion::identity(), (400, 300), (420, 300)).unwrap();
    assert!(quick.s < slow.s);
}

#[test]
fn tiny_drag_on_huge_viewport_keeps_base() {
    let base = [0.0, 0.0, 1.0, 0.0];
    let mut quat = SENTINEL;
    assert!(trackball(2_000_000_000, 2_000_000_000, 1.0, &base, 0, 0, 1, 0, &mut quat).unwrap());
    assert!(quat == base);
}
