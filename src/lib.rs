// Domain layer - Core business logic
pub mod domain;

// Application layer - Simulation state and frame pacing
pub mod application;

// Infrastructure layer - UI, rendering, input, startup config
pub mod config;
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{ButtonAction, FrameLimiter, GameState, SimulationConfig};
pub use domain::{Cell, Grid, Pattern, presets};
pub use input::{Controller, InputEvent, LoopControl};
pub use ui::Button;
