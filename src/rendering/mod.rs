use macroquad::prelude::*;

use crate::application::GameState;
use crate::ui::Button;

const BACKGROUND: Color = Color::new(10. / 255., 10. / 255., 10. / 255., 1.0);
const ALIVE: Color = Color::new(0.0, 1.0, 1.0, 1.0);
const DEAD: Color = Color::new(40. / 255., 40. / 255., 40. / 255., 1.0);
const STATUS_DIM: Color = Color::new(180. / 255., 180. / 255., 180. / 255., 1.0);

/// Clear the frame
pub fn draw_background() {
    clear_background(BACKGROUND);
}

/// Draw every cell, leaving a one-pixel gap as grid lines
pub fn draw_grid(state: &GameState, cell_size: f32) {
    let side = (cell_size - 1.0).max(1.0);
    for (x, y, cell) in state.grid().iter_cells() {
        let color = if cell.is_alive() { ALIVE } else { DEAD };
        draw_rectangle(x as f32 * cell_size, y as f32 * cell_size, side, side, color);
    }
}

/// Draw generation counter, buttons and the status strip below the grid
pub fn draw_controls(
    state: &GameState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    panel_top: f32,
    fps: f64,
) {
    draw_text(&format!("Generation: {}", state.generation()), 10.0, 34.0, 36.0, WHITE);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let (status, status_color) = if state.is_paused() {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    } else {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    };
    draw_text(status, 10.0, panel_top + 36.0, 28.0, status_color);

    let details = format!(
        "Interval: {} ms   Population: {}   FPS: {:.0}",
        state.update_interval_ms(),
        state.grid().population(),
        fps
    );
    draw_text(&details, 10.0, panel_top + 70.0, 22.0, STATUS_DIM);
}
