//! # Config Module
//!
//! Fixed parameters of the window opened by the application.

use winit::{dpi::LogicalSize, window::WindowAttributes};

/// Default window width in logical pixels.
pub const DEFAULT_WIDTH: u32 = 300;

/// Default window height in logical pixels.
pub const DEFAULT_HEIGHT: u32 = 300;

/// Default window title.
pub const DEFAULT_TITLE: &str = "Gears";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_owned(),
        }
    }
}

impl WindowConfig {
    /// Builds the winit attributes for this config. Everything besides the title and the inner
    /// size is left at the platform default.
    pub fn attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(self.width),
                f64::from(self.height),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;

    #[test]
    fn default_is_small_gears_window() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 300);
        assert_eq!(config.height, 300);
        assert_eq!(config.title, "Gears");
    }

    #[test]
    fn attributes_carry_title_and_logical_size() {
        let attributes = WindowConfig::default().attributes();
        assert_eq!(attributes.title, "Gears");
        assert_eq!(
            attributes.inner_size,
            Some(Size::Logical(LogicalSize::new(300.0, 300.0)))
        );
    }

    #[test]
    fn attributes_follow_custom_config() {
        let config = WindowConfig {
            width: 640,
            height: 480,
            title: "Spinning".to_owned(),
        };
        let attributes = config.attributes();
        assert_eq!(attributes.title, "Spinning");
        assert_eq!(
            attributes.inner_size,
            Some(Size::Logical(LogicalSize::new(640.0, 480.0)))
        );
    }
}
