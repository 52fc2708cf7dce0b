//! Killer move table and history heuristic for quiet move ordering.

use gambit_core::{Move, Square};

use crate::search::negamax::MAX_DEPTH;

/// Number of depth slots: every depth from 0 to [`MAX_DEPTH`].
const DEPTH_SLOTS: usize = MAX_DEPTH as usize + 1;

/// Two killer moves per depth: quiet moves that caused beta cutoffs.
pub struct KillerTable {
    slots: [[Option<Move>; DEPTH_SLOTS]; 2],
}

impl KillerTable {
    /// Create an empty killer table.
    pub fn new() -> Self {
        Self {
            slots: [[None; DEPTH_SLOTS]; 2],
        }
    }

    fn index(depth: i32) -> Option<usize> {
        usize::try_from(depth).ok().filter(|&d| d < DEPTH_SLOTS)
    }

    /// Store a killer move at the given depth.
    ///
    /// Shifts slot 0 to slot 1 if the new move differs from slot 0.
    /// Depths outside the table are ignored.
    pub fn store(&mut self, depth: i32, mv: Move) {
        let Some(d) = Self::index(depth) else {
            return;
        };
        if self.slots[0][d] != Some(mv) {
            self.slots[1][d] = self.slots[0][d];
            self.slots[0][d] = Some(mv);
        }
    }

    /// Which slot (0 or 1) holds `mv` at this depth, if any.
    pub fn slot_of(&self, depth: i32, mv: Move) -> Option<usize> {
        let d = Self::index(depth)?;
        (0..2).find(|&slot| self.slots[slot][d] == Some(mv))
    }
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

/// History heuristic table indexed by `[origin][destination]`.
///
/// Entries only ever grow during a request: every quiet move that improves
/// a node's best score is credited with `depth²`.
pub struct HistoryTable {
    table: [[i32; Square::COUNT]; Square::COUNT],
}

impl HistoryTable {
    /// Create a zeroed history table.
    pub fn new() -> Self {
        Self {
            table: [[0; Square::COUNT]; Square::COUNT],
        }
    }

    /// Reward a quiet move searched at `depth`.
    pub fn credit(&mut self, mv: Move, depth: i32) {
        let entry = &mut self.table[mv.from().index()][mv.to().index()];
        *entry = entry.saturating_add(depth.saturating_mul(depth));
    }

    /// Accumulated score for the move's origin/destination pair.
    pub fn score(&self, mv: Move) -> i32 {
        self.table[mv.from().index()][mv.to().index()]
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}
