use tracing::{debug, trace, warn};

use crate::domain::{Grid, Pattern, presets};

/// Run-time simulation parameters adjusted by the control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub paused: bool,
    update_interval_ms: u64,
}

impl SimulationConfig {
    pub const MIN_INTERVAL_MS: u64 = 50;
    pub const MAX_INTERVAL_MS: u64 = 500;
    pub const INTERVAL_STEP_MS: u64 = 50;
    pub const DEFAULT_INTERVAL_MS: u64 = 100;

    /// Milliseconds between generations, always within [50, 500]
    pub const fn update_interval_ms(&self) -> u64 {
        self.update_interval_ms
    }

    /// Shorter interval, i.e. faster simulation
    pub fn speed_up(&mut self) {
        self.update_interval_ms = self
            .update_interval_ms
            .saturating_sub(Self::INTERVAL_STEP_MS)
            .max(Self::MIN_INTERVAL_MS);
    }

    /// Longer interval, i.e. slower simulation
    pub fn slow_down(&mut self) {
        self.update_interval_ms =
            (self.update_interval_ms + Self::INTERVAL_STEP_MS).min(Self::MAX_INTERVAL_MS);
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            paused: true,
            update_interval_ms: Self::DEFAULT_INTERVAL_MS,
        }
    }
}

/// Every action the control panel (or a keyboard shortcut) can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    StartPause,
    Reset,
    SpeedUp,
    SpeedDown,
    Blinker,
    Toad,
    Pulsar,
}

impl ButtonAction {
    /// Panel order, top to bottom
    pub const ALL: [ButtonAction; 7] = [
        ButtonAction::StartPause,
        ButtonAction::Reset,
        ButtonAction::SpeedUp,
        ButtonAction::SpeedDown,
        ButtonAction::Blinker,
        ButtonAction::Toad,
        ButtonAction::Pulsar,
    ];

    /// Label drawn on the button
    pub const fn label(self) -> &'static str {
        match self {
            ButtonAction::StartPause => "Start/Pause",
            ButtonAction::Reset => "Reset",
            ButtonAction::SpeedUp => "Speed +",
            ButtonAction::SpeedDown => "Speed -",
            ButtonAction::Blinker => "Blinker",
            ButtonAction::Toad => "Toad",
            ButtonAction::Pulsar => "Pulsar",
        }
    }

    /// Pattern and fixed anchor for the stamp buttons
    pub const fn stamp(self) -> Option<(Pattern, i32, i32)> {
        match self {
            ButtonAction::Blinker => Some((presets::BLINKER, 60, 40)),
            ButtonAction::Toad => Some((presets::TOAD, 20, 20)),
            ButtonAction::Pulsar => Some((presets::PULSAR, 30, 50)),
            _ => None,
        }
    }
}

/// GameState owns the grid, the generation counter and the simulation
/// parameters. It is the only place the grid is mutated.
#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    generation: u64,
    pub sim: SimulationConfig,
    last_update_ms: u64,
}

impl GameState {
    /// Create new game state with given grid dimensions, paused
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            generation: 0,
            sim: SimulationConfig::default(),
            last_update_ms: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_paused(&self) -> bool {
        self.sim.paused
    }

    pub const fn update_interval_ms(&self) -> u64 {
        self.sim.update_interval_ms()
    }

    /// Flip a cell (click). Out-of-bounds is ignored.
    pub fn toggle(&mut self, x: usize, y: usize) {
        self.grid.toggle(x, y);
    }

    /// Force a cell alive (drag painting). Out-of-bounds is ignored.
    pub fn set_alive(&mut self, x: usize, y: usize) {
        self.grid.set_alive(x, y);
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Clear, then pause
    pub fn reset(&mut self) {
        self.clear();
        self.sim.paused = true;
    }

    /// Swap in the next generation's grid and count it.
    /// A grid of different dimensions is rejected.
    pub fn replace(&mut self, next: Grid) {
        if next.dimensions() != self.grid.dimensions() {
            warn!(
                expected = ?self.grid.dimensions(),
                got = ?next.dimensions(),
                "rejecting replacement grid with mismatched dimensions"
            );
            return;
        }
        self.grid = next;
        self.generation += 1;
    }

    /// Advance exactly one generation, ignoring pause and timing
    pub fn advance(&mut self) {
        let next = self.grid.step();
        self.replace(next);
        trace!(
            generation = self.generation,
            population = self.grid.population(),
            "advanced"
        );
    }

    /// Update simulation for the current clock reading.
    /// Advances at most one generation, and only when running and the
    /// interval has elapsed since the last advance. Returns whether it advanced.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.sim.paused {
            return false;
        }
        if now_ms.saturating_sub(self.last_update_ms) < self.sim.update_interval_ms() {
            return false;
        }
        self.advance();
        self.last_update_ms = now_ms;
        true
    }

    /// Restart the interval timer, e.g. at loop start
    pub fn sync_clock(&mut self, now_ms: u64) {
        self.last_update_ms = now_ms;
    }

    /// Stamp a pattern at an anchor cell
    pub fn stamp(&mut self, pattern: &Pattern, anchor_x: i32, anchor_y: i32) {
        let report = pattern.stamp(&mut self.grid, anchor_x, anchor_y);
        debug!(
            pattern = pattern.name,
            anchor_x,
            anchor_y,
            placed = report.placed,
            skipped = report.skipped,
            "stamped pattern"
        );
    }

    /// Dispatch a control-panel action
    pub fn apply(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::StartPause => self.sim.paused = !self.sim.paused,
            ButtonAction::Reset => self.reset(),
            ButtonAction::SpeedUp => self.sim.speed_up(),
            ButtonAction::SpeedDown => self.sim.slow_down(),
            ButtonAction::Blinker | ButtonAction::Toad | ButtonAction::Pulsar => {
                if let Some((pattern, x, y)) = action.stamp() {
                    self.stamp(&pattern, x, y);
                }
            }
        }
        debug!(
            ?action,
            paused = self.sim.paused,
            interval_ms = self.sim.update_interval_ms(),
            "applied action"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn running(width: usize, height: usize) -> GameState {
        let mut state = GameState::new(width, height);
        state.apply(ButtonAction::StartPause);
        state
    }

    #[test]
    fn test_starts_paused_at_default_speed() {
        let state = GameState::new(80, 60);
        assert!(state.is_paused());
        assert_eq!(state.update_interval_ms(), 100);
        assert_eq!(state.generation(), 0);
        assert_eq!(state.grid().dimensions(), (80, 60));
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let mut state = GameState::new(10, 10);
        state.toggle(1, 1);
        assert!(!state.tick(10_000));
        assert_eq!(state.generation(), 0);
        assert!(state.grid().is_alive(1, 1));
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut state = running(10, 10);
        state.sync_clock(1_000);
        assert!(!state.tick(1_099));
        assert!(state.tick(1_100));
        assert_eq!(state.generation(), 1);
        assert!(!state.tick(1_150));
        assert!(state.tick(1_200));
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_tick_advances_at_most_once() {
        let mut state = running(10, 10);
        assert!(state.tick(5_000));
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_reset_clears_and_pauses() {
        let mut state = running(10, 10);
        state.toggle(2, 2);
        state.advance();
        state.apply(ButtonAction::Reset);
        assert!(state.is_paused());
        assert_eq!(state.generation(), 0);
        assert_eq!(state.grid().population(), 0);
    }

    #[test]
    fn test_clear_keeps_pause_state() {
        let mut state = running(10, 10);
        state.set_alive(3, 3);
        state.advance();
        state.clear();
        assert!(!state.is_paused());
        assert_eq!(state.generation(), 0);
        assert_eq!(state.grid().population(), 0);
    }

    #[test]
    fn test_replace_rejects_other_dimensions() {
        let mut state = GameState::new(10, 10);
        state.replace(Grid::new(5, 5));
        assert_eq!(state.grid().dimensions(), (10, 10));
        assert_eq!(state.generation(), 0);

        state.replace(Grid::new(10, 10));
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_start_pause_inverts() {
        let mut state = GameState::new(10, 10);
        state.apply(ButtonAction::StartPause);
        assert!(!state.is_paused());
        state.apply(ButtonAction::StartPause);
        assert!(state.is_paused());
    }

    #[test]
    fn test_speed_buttons_step_by_fifty() {
        let mut state = GameState::new(10, 10);
        state.apply(ButtonAction::SpeedUp);
        assert_eq!(state.update_interval_ms(), 50);
        state.apply(ButtonAction::SpeedUp);
        assert_eq!(state.update_interval_ms(), 50);
        state.apply(ButtonAction::SpeedDown);
        assert_eq!(state.update_interval_ms(), 100);
    }

    #[test]
    fn test_stamp_buttons_use_fixed_anchors() {
        let mut state = GameState::new(80, 60);
        state.apply(ButtonAction::Blinker);
        assert!(state.grid().is_alive(60, 40));
        assert!(state.grid().is_alive(62, 40));

        state.apply(ButtonAction::Toad);
        assert!(state.grid().is_alive(20, 20));
        assert!(state.grid().is_alive(23, 19));

        state.apply(ButtonAction::Pulsar);
        assert!(state.grid().is_alive(31, 54));
        // Row 60 is off the default 60-row grid
        assert_eq!(state.grid().population(), 3 + 6 + 13);
        assert!(state.is_paused());
    }

    #[test]
    fn test_stamp_on_small_grid_is_silent() {
        let mut state = GameState::new(10, 10);
        for action in [ButtonAction::Blinker, ButtonAction::Toad, ButtonAction::Pulsar] {
            state.apply(action);
        }
        assert_eq!(state.grid().population(), 0);
    }

    #[test]
    fn test_stamp_actions_name_their_pattern() {
        for action in ButtonAction::ALL {
            match action.stamp() {
                Some((pattern, _, _)) => assert_eq!(pattern.name, action.label()),
                None => assert!(!matches!(
                    action,
                    ButtonAction::Blinker | ButtonAction::Toad | ButtonAction::Pulsar
                )),
            }
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = ButtonAction::ALL.iter().map(|a| a.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), ButtonAction::ALL.len());
    }

    fn any_speed_action() -> impl Strategy<Value = ButtonAction> {
        prop_oneof![Just(ButtonAction::SpeedUp), Just(ButtonAction::SpeedDown)]
    }

    proptest! {
        #[test]
        fn prop_interval_stays_clamped(actions in proptest::collection::vec(any_speed_action(), 0..40)) {
            let mut state = GameState::new(4, 4);
            for action in actions {
                state.apply(action);
                let interval = state.update_interval_ms();
                prop_assert!((50..=500).contains(&interval));
                prop_assert_eq!(interval % 50, 0);
            }
        }

        #[test]
        fn prop_clear_always_resets(
            alive in proptest::collection::vec((0usize..12, 0usize..12), 0..50),
            steps in 0usize..5,
        ) {
            let mut state = GameState::new(12, 12);
            for (x, y) in alive {
                state.set_alive(x, y);
            }
            for _ in 0..steps {
                state.advance();
            }
            state.clear();
            prop_assert_eq!(state.generation(), 0);
            prop_assert_eq!(state.grid().population(), 0);
        }
    }
}
