use macroquad::prelude::*;
use tracing::debug;

use crate::application::{ButtonAction, GameState};
use crate::ui::Button;

/// One discrete input event, already reduced from raw window input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    /// Primary button pressed at a pointer position
    PointerDown((f32, f32)),
    /// Pointer moved; `primary_held` is set while dragging
    PointerMove { pos: (f32, f32), primary_held: bool },
    /// Keyboard shortcut for a panel action
    Action(ButtonAction),
}

/// Whether the run loop should keep going after an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Maps input events to state mutations.
/// Buttons are checked before the grid so a click on a button never
/// toggles the cell beneath it.
pub struct Controller {
    buttons: Vec<Button>,
    cell_size: f32,
}

impl Controller {
    pub fn new(buttons: Vec<Button>, cell_size: f32) -> Self {
        Self { buttons, cell_size }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Grid cell under a pointer position, if it lies on the grid
    pub fn cell_at(&self, state: &GameState, pos: (f32, f32)) -> Option<(usize, usize)> {
        if pos.0 < 0.0 || pos.1 < 0.0 {
            return None;
        }
        let x = (pos.0 / self.cell_size) as usize;
        let y = (pos.1 / self.cell_size) as usize;
        let (nx, ny) = state.grid().dimensions();
        (x < nx && y < ny).then_some((x, y))
    }

    pub fn handle(&self, state: &mut GameState, event: InputEvent) -> LoopControl {
        match event {
            InputEvent::Quit => return LoopControl::Quit,
            InputEvent::Action(action) => state.apply(action),
            InputEvent::PointerDown(pos) => {
                if let Some(button) = self.buttons.iter().find(|b| b.contains(pos)) {
                    debug!(label = button.label(), "button pressed");
                    state.apply(button.action());
                } else if let Some((x, y)) = self.cell_at(state, pos) {
                    state.toggle(x, y);
                }
            }
            InputEvent::PointerMove { pos, primary_held } => {
                if primary_held {
                    if let Some((x, y)) = self.cell_at(state, pos) {
                        state.set_alive(x, y);
                    }
                }
            }
        }
        LoopControl::Continue
    }

    /// Handle a batch of events; stops at the first quit
    pub fn handle_all(
        &self,
        state: &mut GameState,
        events: impl IntoIterator<Item = InputEvent>,
    ) -> LoopControl {
        for event in events {
            if self.handle(state, event) == LoopControl::Quit {
                return LoopControl::Quit;
            }
        }
        LoopControl::Continue
    }
}

const SHORTCUTS: [(KeyCode, ButtonAction); 7] = [
    (KeyCode::Space, ButtonAction::StartPause),
    (KeyCode::C, ButtonAction::Reset),
    (KeyCode::Up, ButtonAction::SpeedUp),
    (KeyCode::Down, ButtonAction::SpeedDown),
    (KeyCode::Key1, ButtonAction::Blinker),
    (KeyCode::Key2, ButtonAction::Toad),
    (KeyCode::Key3, ButtonAction::Pulsar),
];

/// Tracks pointer position between frames so moves can be detected
#[derive(Default)]
pub struct EventPoller {
    last_pos: Option<(f32, f32)>,
}

impl EventPoller {
    /// Collect this frame's input from macroquad.
    /// Requires `prevent_quit()` to have been called so window close
    /// arrives here instead of exiting the process.
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            events.push(InputEvent::Quit);
        }

        events.extend(
            SHORTCUTS
                .iter()
                .filter(|(key, _)| is_key_pressed(*key))
                .map(|&(_, action)| InputEvent::Action(action)),
        );

        let pos = mouse_position();
        if is_mouse_button_pressed(MouseButton::Left) {
            events.push(InputEvent::PointerDown(pos));
        } else if self.last_pos.is_some_and(|last| last != pos) {
            events.push(InputEvent::PointerMove {
                pos,
                primary_held: is_mouse_button_down(MouseButton::Left),
            });
        }
        self.last_pos = Some(pos);

        events
    }
}
