use macroquad::prelude::*;

use crate::application::ButtonAction;

const FILL: Color = Color::new(60. / 255., 60. / 255., 60. / 255., 1.0);
const HOVER_FILL: Color = Color::new(80. / 255., 80. / 255., 80. / 255., 1.0);
const BORDER: Color = Color::new(100. / 255., 100. / 255., 100. / 255., 1.0);
const LABEL_SIZE: u16 = 24;

/// Button UI component: a fixed rectangle bound to one action.
/// Built once at startup and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    action: ButtonAction,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: ButtonAction) -> Self {
        Self { x, y, width, height, action }
    }

    pub fn label(&self) -> &'static str {
        self.action.label()
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    /// Hit region as (x, y, width, height)
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Half-open hit test: the right and bottom edges belong to the neighbor
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x
            && pos.0 < self.x + self.width
            && pos.1 >= self.y
            && pos.1 < self.y + self.height
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.contains(mouse_pos) { HOVER_FILL } else { FILL };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, BORDER);

        let text_size = measure_text(self.label(), None, LABEL_SIZE, 1.0);
        draw_text(
            self.label(),
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            f32::from(LABEL_SIZE),
            WHITE,
        );
    }
}
