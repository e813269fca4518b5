use log::trace;

use crate::error::{TrackballError, TrackballResult};

/// Pixels trimmed from the shorter viewport side before normalizing.
const BORDER: f64 = 4.0;

/// Maps pixel coordinates into the trackball's normalized plane.
///
/// Both axes share one scale, the shorter side minus a small border, so
/// the unit circle always fits inside the viewport. Only the magnitudes of
/// `width` and `height` set the scale; the signed values still enter the
/// centering offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width:  i32,
    height: i32,
    speed:  f64,
}
impl Viewport {
    pub fn new(width: i32, height: i32, speed: f64) -> TrackballResult<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(TrackballError::InvalidSpeedFactor(speed));
        }
        let vp = Self { width, height, speed };
        if vp.denominator() <= 0.0 {
            return Err(TrackballError::DegenerateViewport { width, height });
        }
        Ok(vp)
    }

    pub fn denominator(&self) -> f64 {
        self.width.unsigned_abs().min(self.height.unsigned_abs()) as f64 - BORDER
    }

    /// Dilates `raw` by the speed factor around `dim / 2`, truncating back
    /// to a whole pixel.
    pub fn remap(&self, raw: i32, dim: i32) -> i32 {
        let center = dim / 2;
        (self.speed * (raw as i64 - center as i64) as f64 + center as f64) as i32
    }

    /// Normalized coordinates of pixel `(x, y)`, y pointing up.
    pub fn normalize(&self, x: i32, y: i32) -> [f64; 2] {
        let d = self.denominator();
        let px = self.remap(x, self.width) as f64;
        let py = self.remap(y, self.height) as f64;

        let nx = (2.0*px - self.width as f64 - 1.0) / d;
        let ny = (-2.0*py + self.height as f64 - 1.0) / d;
        trace!("pixel ({x}, {y}) -> ({nx}, {ny})");
        [nx, ny]
    }
}


#[test]
fn center_maps_half_pixel_off_origin() {
    let vp = Viewport::new(800, 600, 1.0).unwrap();
    assert!(vp.denominator() == 596.0);
    assert!(vp.normalize(400, 300) == [-1.0 / 596.0, -1.0 / 596.0]);
}

#[test]
fn y_points_up() {
    let vp = Viewport::new(800, 600, 1.0).unwrap();
    let [_, top] = vp.normalize(400, 0);
    let [_, bottom] = vp.normalize(400, 599);
    assert!(top > 0.0);
    assert!(bottom < 0.0);
}

#[test]
fn shorter_side_sets_scale() {
    let wide = Viewport::new(1000, 200, 1.0).unwrap();
    let tall = Viewport::new(200, 1000, 1.0).unwrap();
    assert!(wide.denominator() == 196.0);
    assert!(tall.denominator() == 196.0);

    let neg = Viewport::new(-800, 600, 1.0).unwrap();
    assert!(neg.denominator() == 596.0);
}

#[test]
fn speed_dilates_around_center() {
    let vp = Viewport::new(800, 600, 2.0).unwrap();
    assert!(vp.remap(450, 800) == 500);
    assert!(vp.remap(350, 800) == 300);
    assert!(vp.remap(300, 600) == 300);
    assert!(vp.normalize(450, 300)[0] == 199.0 / 596.0);
}

#[test]
fn remap_truncates_toward_zero() {
    let vp = Viewport::new(800, 600, 0.5).unwrap();
    assert!(vp.remap(401, 800) == 400);
    assert!(vp.remap(399, 800) == 399);
    assert!(vp.remap(-3, 4) == 0);
}

#[test]
fn rejects_non_positive_speed() {
    assert!(Viewport::new(800, 600, 0.0) == Err(TrackballError::InvalidSpeedFactor(0.0)));
    assert!(Viewport::new(800, 600, -1.0).is_err());
    assert!(Viewport::new(800, 600, f64::NAN).is_err());
    assert!(Viewport::new(800, 600, f64::INFINITY) == Err(TrackballError::InvalidSpeedFactor(f64::INFINITY)));
}

#[test]
fn rejects_degenerate_viewport() {
    assert!(
        Viewport::new(4, 600, 1.0)
            == Err(TrackballError::DegenerateViewport { width: 4, height: 600 })
    );
    assert!(Viewport::new(800, -2, 1.0).is_err());
    assert!(Viewport::new(5, 5, 1.0).is_ok());
}
