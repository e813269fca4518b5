//! Virtual trackball: turns a mouse drag over a viewport into a rotation
//! quaternion.
//!
//! Pixel positions are normalized against the viewport ([`viewport`]),
//! lifted onto a virtual sphere to find the rotation between them
//! ([`sphere`]), and the result is composed onto the rotation the drag
//! started from ([`trackball()`]).

pub mod config;
pub mod error;
pub mod quaternion;
pub mod scalar;
pub mod sphere;
pub mod trackball;
pub mod vector;
pub mod viewport;

pub use crate::error::{TrackballError, TrackballResult};
pub use crate::quaternion::Quaternion;
pub use crate::scalar::{Scalar, DOUBLE_EPS, DOUBLE_EPS_SQ, FLOAT_EPS, FLOAT_EPS_SQ};
pub use crate::sphere::AxisAngle;
pub use crate::trackball::{trackball, Trackball};
pub use crate::vector::Vec3;
pub use crate::viewport::Viewport;
