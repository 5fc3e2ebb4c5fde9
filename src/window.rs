//! # Window Module
//!
//! The `window` module uses [`winit`] to create the cross-platform window and poll events from
//! the user and OS. Every loop iteration presents the window and drains pending events until the
//! close button is pressed.

use log::{debug, warn};
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    error::{EventLoopError, OsError},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window as WinitWindow, WindowId},
};

use crate::{
    config::WindowConfig,
    lifecycle::{Lifecycle, Step},
};

/// Custom error types for the winit event loop and window.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum WindowError {
    /// The platform event loop could not be created or failed while running.
    #[error("The event loop is unavailable.")]
    EventLoop(#[from] EventLoopError),

    /// The OS refused to create the window.
    #[error("The window could not be created.")]
    Create(#[from] OsError),

    /// Caller attempted to reference the winit window before it was created.
    #[error("Window has not been created yet.")]
    NotInitialized,
}

pub struct App {
    config: WindowConfig,
    lifecycle: Lifecycle<WinitWindow>,
}

impl App {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::default(),
        }
    }

    /// Gets a reference to the winit window object.
    ///
    /// # Errors
    ///
    /// - [`WindowError::NotInitialized`]
    pub fn window(&self) -> Result<&WinitWindow, WindowError> {
        self.lifecycle.window().ok_or(WindowError::NotInitialized)
    }

    /// Consumes the app after the event loop has returned and reports how the window ended.
    ///
    /// # Errors
    ///
    /// - [`WindowError::Create`]
    /// - [`WindowError::NotInitialized`]
    pub fn finish(self) -> Result<(), WindowError> {
        self.lifecycle.finish()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.lifecycle.is_starting() {
            debug!("Resumed with the window already handled");
            return;
        }

        let window = event_loop
            .create_window(self.config.attributes())
            .map_err(WindowError::from);

        if self.lifecycle.open(window) == Step::Exit {
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::RedrawRequested = event {
            // Nothing is drawn; just hand the frame to the compositor.
            match self.window() {
                Ok(window) => window.pre_present_notify(),
                Err(err) => warn!("Skipping present: {err}"),
            }
        }

        if self.lifecycle.handle(&event) == Step::Exit {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Ok(window) = self.window() {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn not_initialized_message() {
        assert_eq!(
            WindowError::NotInitialized.to_string(),
            "Window has not been created yet."
        );
    }

    #[test]
    fn event_loop_error_keeps_source() {
        let err = WindowError::from(EventLoopError::RecreationAttempt);
        assert_eq!(err.to_string(), "The event loop is unavailable.");

        let source = err.source().expect("event loop error should have a source");
        assert_eq!(
            source.to_string(),
            EventLoopError::RecreationAttempt.to_string()
        );
    }

    #[test]
    fn window_is_unavailable_before_resume() {
        let app = App::new(WindowConfig::default());
        assert!(matches!(app.window(), Err(WindowError::NotInitialized)));
        assert!(matches!(app.finish(), Err(WindowError::NotInitialized)));
    }
}
