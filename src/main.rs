//! # Gears
//!
//! This binary uses [`winit`] to open a single fixed-size window and run an empty event loop
//! until the window is closed. Each loop iteration presents the window and polls pending events;
//! nothing is drawn.
//!
//! Logging goes through [`pretty_env_logger`] at `info` by default and can be tuned with
//! `RUST_LOG`.

mod config;
mod lifecycle;
mod window;

use std::process::ExitCode;

use anyhow::{Context, Result};
use config::WindowConfig;
use log::{Level, LevelFilter, error, info, log_enabled};
use window::{App, WindowError};
use winit::{
    error::EventLoopError,
    event_loop::{ControlFlow, EventLoop},
};

fn main() -> ExitCode {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    exit_code(run(WindowConfig::default()))
}

/// Reports a fatal error on stderr and maps the run outcome to the process status.
fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Fatal errors must reach stderr even when logging is switched off.
            if log_enabled!(Level::Error) {
                error!("{err:#}");
            } else {
                eprintln!("{err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Wraps an event loop failure in [`WindowError`] with a message for the user.
fn event_loop_failure(err: EventLoopError, message: &'static str) -> anyhow::Error {
    anyhow::Error::new(WindowError::from(err)).context(message)
}

/// Opens the window and blocks until it is closed. The event loop is consumed by the run, so the
/// windowing system is torn down by the time the outcome is inspected.
fn run(config: WindowConfig) -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|err| event_loop_failure(err, "Failed to initialize windowing system"))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    info!("Opening {}x{} window {:?}", config.width, config.height, config.title);
    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .map_err(|err| event_loop_failure(err, "Event loop terminated abnormally"))?;

    app.finish().context("Failed to open window")?;
    info!("Done.");

    Ok(())
}
