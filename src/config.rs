//! Startup configuration: command-line flags validated into window and
//! grid geometry.

use clap::Parser;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    #[error("viewport {width}x{height} is smaller than one {cell_size}px cell")]
    ViewportTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("frame rate must be at least 1")]
    ZeroFrameRate,

    #[error("window {width}x{height} plus a {panel_height}px panel exceeds the largest window size")]
    WindowTooLarge {
        width: u32,
        height: u32,
        panel_height: u32,
    },
}

/// Largest window side the windowing backend accepts
const MAX_WINDOW_SIDE: u32 = i32::MAX as u32;

/// Conway's Game of Life with a button panel
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// Grid viewport width in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 800)]
    pub width: u32,

    /// Grid viewport height in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 600)]
    pub height: u32,

    /// Side length of one cell in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 10)]
    pub cell_size: u32,

    /// Height of the status strip below the grid
    #[arg(long, value_name = "PIXELS", default_value_t = 100)]
    pub panel_height: u32,

    /// Frame-rate target
    #[arg(long, default_value_t = 60)]
    pub fps: u32,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            cell_size: 10,
            panel_height: 100,
            fps: 60,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.width < self.cell_size || self.height < self.cell_size {
            return Err(ConfigError::ViewportTooSmall {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        let window_height = self.height.checked_add(self.panel_height);
        if self.width > MAX_WINDOW_SIDE || window_height.is_none_or(|h| h > MAX_WINDOW_SIDE) {
            return Err(ConfigError::WindowTooLarge {
                width: self.width,
                height: self.height,
                panel_height: self.panel_height,
            });
        }
        Ok(Config {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            panel_height: self.panel_height,
            max_fps: self.fps,
        })
    }
}

/// Validated geometry and timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub panel_height: u32,
    pub max_fps: u32,
}

impl Config {
    /// Grid size in cells as (nx, ny)
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (
            (self.width / self.cell_size) as usize,
            (self.height / self.cell_size) as usize,
        )
    }

    /// Window size: the viewport plus the reserved strip below it.
    /// Validation keeps both sides within `i32`.
    pub fn window_size(&self) -> (i32, i32) {
        (
            self.width as i32,
            (self.height + self.panel_height) as i32,
        )
    }
}
