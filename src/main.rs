#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate anyhow;

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

use crate::application::{capture_cycle, render_still, run_live};
use crate::capture::SavePng;
use crate::scene::{ImageCanvas, SpinnerSettings};
use anyhow::Error;

use clap::{App, Arg};
use std::path::PathBuf;
use std::time::Duration;

pub mod animation;
pub mod application;
pub mod capture;
pub mod event;
pub mod orbit;
pub mod scene;
pub mod world;

lazy_static! {
    static ref OUTPUT_PATH: PathBuf = crate::application_root_dir().join("output/frames/");
}

const DEFAULT_FRAMES: u64 = 60;
const DEFAULT_SCALE: f32 = 4.0;
const DEFAULT_SECONDS: f32 = 3.0;
const LIVE_FPS: f32 = 60.0;
const STILL_FILE_NAME: &str = "still.png";
const LIVE_FILE_NAME: &str = "live.png";

fn parse_arg<T: std::str::FromStr>(value: Option<&str>, name: &str, default: T) -> Result<T, Error> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| anyhow!("invalid value {:?} for --{}", value, name)),
        None => Ok(default),
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let matches = App::new("orbit spinner")
        .arg(
            Arg::new("headless")
                .long("headless")
                .required(false)
                .takes_value(false),
        )
        .arg(Arg::new("config").long("config").takes_value(true))
        .arg(Arg::new("output").long("output").takes_value(true))
        .arg(Arg::new("frames").long("frames").takes_value(true))
        .arg(Arg::new("scale").long("scale").takes_value(true))
        .arg(Arg::new("seconds").long("seconds").takes_value(true))
        .arg(Arg::new("still").long("still").takes_value(true))
        .get_matches();

    let settings = match matches.value_of("config") {
        Some(path) => SpinnerSettings::load(path)?,
        None => SpinnerSettings::default(),
    };

    let output = matches
        .value_of("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| OUTPUT_PATH.clone());
    let scale = parse_arg(matches.value_of("scale"), "scale", DEFAULT_SCALE)?;

    let size = settings.spinner().measure();
    let mut save = SavePng::new(
        output.clone(),
        (size.width * scale).ceil().max(1.0) as u32,
        (size.height * scale).ceil().max(1.0) as u32,
    )?;

    if let Some(progress) = matches.value_of("still") {
        let progress: f32 = parse_arg(Some(progress), "still", 0.0)?;
        let mut canvas = ImageCanvas::for_size(size.width, size.height, scale);
        render_still(&settings, progress, &mut canvas);
        save.exec_named(canvas.as_raw(), STILL_FILE_NAME)?;
    } else if matches.is_present("headless") {
        let frames = parse_arg(matches.value_of("frames"), "frames", DEFAULT_FRAMES)?;
        capture_cycle(&settings, frames, scale, &mut save)?;
    } else {
        let seconds = parse_arg(matches.value_of("seconds"), "seconds", DEFAULT_SECONDS)?;
        if !seconds.is_finite() || seconds < 0.0 {
            bail!("--seconds must be a non-negative number, got {}", seconds);
        }

        let (report, canvas) =
            run_live(&settings, Duration::from_secs_f32(seconds), scale, LIVE_FPS)?;
        log::info!(
            "live run finished: {} ticks, {} redraws",
            report.ticks,
            report.redraws
        );
        save.exec_named(canvas.as_raw(), LIVE_FILE_NAME)?;
    }

    let written = save.finish()?;
    log::info!("wrote {} frame(s) to {}", written.len(), output.display());

    Ok(())
}

pub fn application_root_dir() -> PathBuf {
    match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(_) => PathBuf::from(env!("CARGO_MANIFEST_DIR")),
        Err(_) => std::env::current_exe()
            .ok()
            .map(|mut path| {
                while let Ok(target) = std::fs::read_link(&path) {
                    path = target;
                }
                path
            })
            .and_then(|path| path.parent().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}
