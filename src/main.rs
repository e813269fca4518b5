use std::process;

use log::{debug, info};

use trackball::config::Config;
use trackball::error::ConfigError;
use trackball::{Quaternion, Scalar};

fn main() {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    if let Err(err) = run(args) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(args: Vec<String>) -> Result<(), ConfigError> {
    let cfg = Config::new(args)?;
    info!("{cfg}");

    if cfg.drags.is_empty() {
        println!("No drag samples given, nothing to do.");
        return Ok(());
    }
    for &(x, y) in cfg.drags.iter() {
        let quat = if cfg.single {
            let down = cfg.quat.map(|c| c as f32);
            drag::<f32>(&cfg, down, x, y)?
        }
        else {
            drag::<f64>(&cfg, cfg.quat, x, y)?
        };
        print_rotation(x, y, quat);
    }
    Ok(())
}

/// Runs one drag sample with `T` storage. The down rotation is returned
/// unchanged when the drag is degenerate.
fn drag<T: Scalar>(cfg: &Config, down: [T; 4], x: i32, y: i32) -> Result<Quaternion, ConfigError> {
    let mut quat = down;
    let written = trackball::trackball(
        cfg.width,
        cfg.height,
        T::from_f64(cfg.speed),
        &down,
        cfg.down.0,
        cfg.down.1,
        x,
        y,
        &mut quat,
    )?;
    if !written {
        debug!("drag to ({x}, {y}) left the rotation unchanged");
    }
    Ok(Quaternion::from_array(&quat))
}

fn print_rotation(x: i32, y: i32, quat: Quaternion) {
    let m = quat.to_matrix3();
    println!("drag to ({x}, {y})");
    println!("  quat:   {quat}");
    println!("  matrix: [{}, {}, {}]", m.x.x, m.y.x, m.z.x);
    println!("          [{}, {}, {}]", m.x.y, m.y.y, m.z.y);
    println!("          [{}, {}, {}]", m.x.z, m.y.z, m.z.z);
}


#[test]
fn drag_with_either_precision() {
    let cfg = Config::default();
    let double = drag::<f64>(&cfg, cfg.quat, 450, 300).unwrap();
    let single = drag::<f32>(&cfg, [0.0, 0.0, 0.0, 1.0], 450, 300).unwrap();
    assert!(double.v.y > 0.0);
    assert!((double.s - single.s).abs() < 1.0e-6);
    assert!((double.v - single.v).len() < 1.0e-6);
}

#[test]
fn bad_speed_is_reported_from_drag() {
    let cfg = Config { speed: f64::INFINITY, ..Config::default() };
    assert!(drag::<f64>(&cfg, cfg.quat, 450, 300).is_err());
}
