//! # Lifecycle Module
//!
//! Tracks the life of the single application window independently of the platform callbacks
//! that drive it. The window is opened once, lives until a close request arrives, and the final
//! state decides the process outcome.

use log::{debug, info};
use winit::event::WindowEvent;

use crate::window::WindowError;

/// What the event loop should do after a lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}

/// State of the application window. `W` is the window handle type.
#[derive(Debug)]
pub enum Lifecycle<W> {
    /// No window has been requested yet.
    Starting,
    /// The window is open and owned here.
    Running(W),
    /// The window was closed on request.
    Closed,
    /// The window could not be created.
    Failed(WindowError),
}

impl<W> Default for Lifecycle<W> {
    fn default() -> Self {
        Self::Starting
    }
}

impl<W> Lifecycle<W> {
    /// True until the first attempt to open the window.
    pub fn is_starting(&self) -> bool {
        matches!(self, Self::Starting)
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed | Self::Failed(_))
    }

    fn step(&self) -> Step {
        if self.is_terminal() {
            Step::Exit
        } else {
            Step::Continue
        }
    }

    /// Records the result of creating the window. Only the first attempt counts.
    pub fn open(&mut self, result: Result<W, WindowError>) -> Step {
        if !self.is_starting() {
            debug!("Ignoring repeated window creation");
            return self.step();
        }

        *self = match result {
            Ok(window) => {
                info!("Window opened");
                Self::Running(window)
            }
            Err(err) => Self::Failed(err),
        };

        self.step()
    }

    /// Reacts to a window event. A close request drops the window and ends the loop.
    pub fn handle(&mut self, event: &WindowEvent) -> Step {
        if !matches!(self, Self::Running(_)) {
            debug!("Ignoring {event:?} outside of a running window");
        } else if matches!(event, WindowEvent::CloseRequested) {
            info!("The close button was pressed; stopping");
            *self = Self::Closed;
        }

        self.step()
    }

    /// The window handle while it is open.
    pub fn window(&self) -> Option<&W> {
        match self {
            Self::Running(window) => Some(window),
            _ => None,
        }
    }

    /// Consumes the lifecycle once the event loop has returned.
    ///
    /// # Errors
    ///
    /// - The creation error if the window never opened.
    /// - [`WindowError::NotInitialized`] if the loop ended before a window was requested.
    pub fn finish(self) -> Result<(), WindowError> {
        match self {
            Self::Closed | Self::Running(_) => Ok(()),
            Self::Failed(err) => Err(err),
            Self::Starting => Err(WindowError::NotInitialized),
        }
    }
}
