use std::fmt;

use crate::error::ConfigError;
use crate::trackball::Trackball;


/// Parsing states.
#[derive(Clone, Copy, PartialEq)]
enum Parse {
    None,
    Size,
    Speed,
    Quat,
    Down,
    Drag,
}
impl Parse {
    fn flag(arg: &str) -> Option<Parse> {
        match arg {
            "-size"  => Some(Parse::Size),
            "-speed" => Some(Parse::Speed),
            "-quat"  => Some(Parse::Quat),
            "-down"  => Some(Parse::Down),
            "-drag"  => Some(Parse::Drag),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Parse::None  => "",
            Parse::Size  => "-size",
            Parse::Speed => "-speed",
            Parse::Quat  => "-quat",
            Parse::Down  => "-down",
            Parse::Drag  => "-drag",
        }
    }

    /// Number of values the flag consumes.
    fn arity(&self) -> usize {
        match self {
            Parse::None  => 0,
            Parse::Speed => 1,
            Parse::Size | Parse::Down | Parse::Drag => 2,
            Parse::Quat  => 4,
        }
    }
}


fn parse_mouse(vals: &[String]) -> Result<(i32, i32), ConfigError> {
    let mut xy = [0; 2];
    for (i, val) in vals.iter().enumerate() {
        xy[i] = val.parse::<i32>()
            .map_err(|_| ConfigError::InvalidMouse(val.clone()))?;
    }
    Ok((xy[0], xy[1]))
}


/// User defined configuration settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width:  i32,
    pub height: i32,
    pub speed:  f64,
    /// Rotation at mouse down, `[x, y, z, w]`.
    pub quat:   [f64; 4],
    pub down:   (i32, i32),
    pub drags:  Vec<(i32, i32)>,
    /// Store quaternions in single precision.
    pub single: bool,
}
impl Config {
    /// Create a new Config from the command line arguments, program name
    /// excluded.
    pub fn new(args: Vec<String>) -> Result<Config, ConfigError> {
        let mut parser = Parse::None;
        let mut vals   = Vec::<String>::new();
        let mut cfg    = Config::default();

        for arg in args.into_iter() {
            if let Some(next) = Parse::flag(&arg) {
                if parser != Parse::None {
                    return Err(ConfigError::MissingValue(parser.name().to_string()));
                }
                parser = next;
                continue;
            }
            if arg == "-f32" && parser == Parse::None {
                cfg.single = true;
                continue;
            }
            if parser == Parse::None {
                return Err(ConfigError::UnknownFlag(arg));
            }

            vals.push(arg);
            if vals.len() < parser.arity() {
                continue;
            }
            match parser {
                Parse::Size => {
                    let mut wh = [0; 2];
                    for (i, val) in vals.iter().enumerate() {
                        wh[i] = val.parse::<i32>()
                            .map_err(|_| ConfigError::InvalidSize(val.clone()))?;
                    }
                    cfg.width  = wh[0];
                    cfg.height = wh[1];
                }
                Parse::Speed => {
                    cfg.speed = vals[0].parse::<f64>()
                        .map_err(|_| ConfigError::InvalidSpeed(vals[0].clone()))?;
                }
                Parse::Quat => {
                    for (i, val) in vals.iter().enumerate() {
                        cfg.quat[i] = val.parse::<f64>()
                            .map_err(|_| ConfigError::InvalidQuat(val.clone()))?;
                    }
                }
                Parse::Down => {
                    cfg.down = parse_mouse(&vals)?;
                }
                Parse::Drag => {
                    cfg.drags.push(parse_mouse(&vals)?);
                }
                Parse::None => {},
            }
            vals.clear();
            parser = Parse::None;
        }
        if parser != Parse::None {
            return Err(ConfigError::MissingValue(parser.name().to_string()));
        }
        cfg.trackball()?;
        Ok(cfg)
    }

    pub fn trackball(&self) -> Result<Trackball, ConfigError> {
        Ok(Trackball::new(self.width, self.height, self.speed)?)
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "
            \rTrackball
            \r=============================================================
            \rViewport: {}x{}
            \rSpeed: {}
            \rDown Rotation: [{}, {}, {}, {}]
            \rDown Mouse: {}, {}
            \rPrecision: {}",
            self.width,
            self.height,
            self.speed,
            self.quat[0],
            self.quat[1],
            self.quat[2],
            self.quat[3],
            self.down.0,
            self.down.1,
            if self.single { "f32" } else { "f64" },
        )
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            width:  800,
            height: 600,
            speed:  1.0,
            quat:   [0.0, 0.0, 0.0, 1.0],
            down:   (400, 300),
            drags:  Vec::new(),
            single: false,
        }
    }
}


#[cfg(test)]
fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

#[test]
fn empty_args_give_defaults() {
    assert!(Config::new(Vec::new()).unwrap() == Config::default());
}

#[test]
fn parses_all_flags() {
    let cfg = Config::new(args(
        "-size 1024 768 -speed 1.5 -quat 0 1 0 0 -down 10 -20 -drag 30 40 -drag -5 6 -f32"
    )).unwrap();
    assert!(cfg.width == 1024 && cfg.height == 768);
    assert!(cfg.speed == 1.5);
    assert!(cfg.quat == [0.0, 1.0, 0.0, 0.0]);
    assert!(cfg.down == (10, -20));
    assert!(cfg.drags == vec![(30, 40), (-5, 6)]);
    assert!(cfg.single);
}

#[test]
fn missing_values_are_reported() {
    assert!(
        Config::new(args("-size 800 -speed 2"))
            == Err(ConfigError::MissingValue("-size".to_string()))
    );
    assert!(
        Config::new(args("-drag 1"))
            == Err(ConfigError::MissingValue("-drag".to_string()))
    );
}

#[test]
fn bad_values_are_reported() {
    assert!(Config::new(args("-speed fast")) == Err(ConfigError::InvalidSpeed("fast".to_string())));
    assert!(Config::new(args("-down 1 x")) == Err(ConfigError::InvalidMouse("x".to_string())));
    assert!(Config::new(args("-quat 0 0 0 w")) == Err(ConfigError::InvalidQuat("w".to_string())));
    assert!(Config::new(args("bogus")) == Err(ConfigError::UnknownFlag("bogus".to_string())));
}

#[test]
fn trackball_contract_is_checked() {
    use crate::error::TrackballError;

    assert!(
        Config::new(args("-speed 0"))
            == Err(ConfigError::Trackball(TrackballError::InvalidSpeedFactor(0.0)))
    );
    assert!(
        Config::new(args("-size 3 600"))
            == Err(ConfigError::Trackball(TrackballError::DegenerateViewport { width: 3, height: 600 }))
    );
}
