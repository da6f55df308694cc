use life_board::{
    ButtonAction, Controller, GameState, InputEvent, LoopControl, config::Cli, ui::create_buttons,
};

fn session() -> (Controller, GameState) {
    let config = Cli::default().into_config().unwrap();
    let (nx, ny) = config.grid_dimensions();
    let controller = Controller::new(create_buttons(config.width as f32), config.cell_size as f32);
    (controller, GameState::new(nx, ny))
}

/// Centre of the button bound to `action`
fn button_centre(controller: &Controller, action: ButtonAction) -> (f32, f32) {
    let button = controller
        .buttons()
        .iter()
        .find(|b| b.action() == action)
        .unwrap();
    let (x, y, w, h) = button.rect();
    (x + w / 2.0, y + h / 2.0)
}

fn press(controller: &Controller, state: &mut GameState, action: ButtonAction) {
    let pos = button_centre(controller, action);
    controller.handle(state, InputEvent::PointerDown(pos));
}

#[test]
fn painted_blinker_oscillates_once_started() {
    let (controller, mut state) = session();

    // Press on (10, 10) then drag across two more cells
    let events = [
        InputEvent::PointerDown((105.0, 105.0)),
        InputEvent::PointerMove { pos: (115.0, 105.0), primary_held: true },
        InputEvent::PointerMove { pos: (125.0, 105.0), primary_held: true },
        InputEvent::PointerMove { pos: (125.0, 106.0), primary_held: true },
    ];
    assert_eq!(controller.handle_all(&mut state, events), LoopControl::Continue);
    assert_eq!(state.grid().population(), 3);

    press(&controller, &mut state, ButtonAction::StartPause);
    assert!(!state.is_paused());

    assert!(state.tick(100));
    assert!(state.grid().is_alive(11, 9));
    assert!(state.grid().is_alive(11, 11));
    assert!(!state.grid().is_alive(10, 10));

    assert!(state.tick(200));
    assert!(state.grid().is_alive(10, 10));
    assert!(state.grid().is_alive(12, 10));
    assert_eq!(state.generation(), 2);
}

#[test]
fn speed_buttons_change_tick_rate() {
    let (controller, mut state) = session();
    press(&controller, &mut state, ButtonAction::StartPause);

    for _ in 0..20 {
        press(&controller, &mut state, ButtonAction::SpeedDown);
    }
    assert_eq!(state.update_interval_ms(), 500);
    assert!(!state.tick(499));
    assert!(state.tick(500));

    for _ in 0..20 {
        press(&controller, &mut state, ButtonAction::SpeedUp);
    }
    assert_eq!(state.update_interval_ms(), 50);
    assert!(state.tick(550));
}

#[test]
fn reset_button_stops_everything() {
    let (controller, mut state) = session();
    press(&controller, &mut state, ButtonAction::Pulsar);
    press(&controller, &mut state, ButtonAction::StartPause);
    state.tick(100);
    state.tick(200);
    assert_eq!(state.generation(), 2);

    press(&controller, &mut state, ButtonAction::Reset);
    assert!(state.is_paused());
    assert_eq!(state.generation(), 0);
    assert_eq!(state.grid().population(), 0);
    assert!(!state.tick(10_000));
}

#[test]
fn stamp_buttons_are_additive() {
    let (controller, mut state) = session();
    press(&controller, &mut state, ButtonAction::Blinker);
    press(&controller, &mut state, ButtonAction::Blinker);
    assert_eq!(state.grid().population(), 3);

    press(&controller, &mut state, ButtonAction::Toad);
    assert_eq!(state.grid().population(), 9);
}

#[test]
fn quit_ends_session() {
    let (controller, mut state) = session();
    let events = [InputEvent::Action(ButtonAction::StartPause), InputEvent::Quit];
    assert_eq!(controller.handle_all(&mut state, events), LoopControl::Quit);
    assert!(!state.is_paused());
}
