use std::error::Error;
use std::fmt;

pub type TrackballResult<T> = Result<T, TrackballError>;

/// Contract violations rejected before any output is written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackballError {
    InvalidSpeedFactor(f64),
    DegenerateViewport { width: i32, height: i32 },
}
impl fmt::Display for TrackballError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackballError::InvalidSpeedFactor(speed) => {
                write!(f, "speed factor must be positive, got {speed}")
            }
            TrackballError::DegenerateViewport { width, height } => {
                write!(f, "viewport {width}x{height} is too small, both sides need a magnitude above 4")
            }
        }
    }
}
impl Error for TrackballError {}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    MissingValue(String),
    InvalidSize(String),
    InvalidSpeed(String),
    InvalidQuat(String),
    InvalidMouse(String),
    UnknownFlag(String),
    Trackball(TrackballError),
}
impl From<TrackballError> for ConfigError {
    fn from(err: TrackballError) -> Self {
        Self::Trackball(err)
    }
}
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue(flag) => {
                write!(f, "
                    \rMissing value for {flag}",
                )
            }
            ConfigError::InvalidSize(arg) => {
                write!(f, "
                    \rInvalid viewport size: {arg}",
                )
            }
            ConfigError::InvalidSpeed(arg) => {
                write!(f, "
                    \rInvalid speed factor: {arg}",
                )
            }
            ConfigError::InvalidQuat(arg) => {
                write!(f, "
                    \rInvalid quaternion component: {arg}",
                )
            }
            ConfigError::InvalidMouse(arg) => {
                write!(f, "
                    \rInvalid mouse coordinate: {arg}",
                )
            }
            ConfigError::UnknownFlag(arg) => {
                write!(f, "
                    \rUnknown argument: {arg}",
                )
            }
            ConfigError::Trackball(err) => {
                write!(f, "
                    \r{err}",
                )
            }
        }
    }
}
impl Error for ConfigError {}


#[test]
fn trackball_error_converts_into_config_error() {
    let err: ConfigError = TrackballError::InvalidSpeedFactor(0.0).into();
    assert!(err == ConfigError::Trackball(TrackballError::InvalidSpeedFactor(0.0)));
    assert!(err.to_string().contains("speed factor must be positive"));
}
