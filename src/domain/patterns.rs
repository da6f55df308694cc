use super::Grid;

/// A fixed shape that can be stamped onto the grid.
/// Offsets are relative to an anchor cell and may be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

/// Outcome of a stamp, for logging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StampReport {
    pub placed: usize,
    pub skipped: usize,
}

impl Pattern {
    /// Set every in-bounds offset alive. Out-of-bounds offsets are dropped.
    /// Never clears a cell, so stamping is a logical OR with the grid.
    pub fn stamp(&self, grid: &mut Grid, anchor_x: i32, anchor_y: i32) -> StampReport {
        let (width, height) = grid.dimensions();
        let mut report = StampReport::default();

        for &(dx, dy) in self.cells {
            let target = (
                usize::try_from(anchor_x + dx).ok().filter(|&x| x < width),
                usize::try_from(anchor_y + dy).ok().filter(|&y| y < height),
            );
            match target {
                (Some(x), Some(y)) => {
                    grid.set_alive(x, y);
                    report.placed += 1;
                }
                _ => report.skipped += 1,
            }
        }

        report
    }
}

/// The three patterns offered by the control panel
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator, three cells in a row
    pub const BLINKER: Pattern = Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    };

    /// Toad - period 2 oscillator; the second row sits above the anchor
    pub const TOAD: Pattern = Pattern {
        name: "Toad",
        cells: &[
            (0, 0), (1, 0), (2, 0),
            (1, -1), (2, -1), (3, -1),
        ],
    };

    /// Pulsar - 16 cells, mirror symmetric about row 7
    pub const PULSAR: Pattern = Pattern {
        name: "Pulsar",
        cells: &[
            (1, 4), (2, 4), (3, 4),
            (1, 5), (3, 5),
            (1, 6), (2, 6), (3, 6),
            (1, 8), (2, 8), (3, 8),
            (1, 9), (3, 9),
            (1, 10), (2, 10), (3, 10),
        ],
    };
}
