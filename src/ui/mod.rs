mod button;

pub use button::Button;
pub use crate::application::ButtonAction;

/// Distance of the button column's left edge from the viewport's right edge
pub const BUTTON_COLUMN_OFFSET: f32 = 180.0;
pub const BUTTON_TOP: f32 = 20.0;
pub const BUTTON_WIDTH: f32 = 150.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_SPACING: f32 = 50.0;

/// Create the control buttons, stacked down the right side of the grid
pub fn create_buttons(viewport_width: f32) -> Vec<Button> {
    let x = viewport_width - BUTTON_COLUMN_OFFSET;
    ButtonAction::ALL
        .iter()
        .enumerate()
        .map(|(idx, &action)| {
            Button::new(
                x,
                BUTTON_TOP + idx as f32 * BUTTON_SPACING,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
                action,
            )
        })
        .collect()
}
