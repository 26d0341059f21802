//! Scoring module - line-clear points and level progression
//!
//! Rules:
//! - Each cleared line is worth `POINTS_PER_LINE * level`.
//! - Level `L` ends once the cumulative score reaches `L * LEVEL_THRESHOLD`;
//!   the level rises once per threshold crossed.
//! - Gravity speeds up with level, down to a fixed floor.

use crate::types::{
    LEVEL_THRESHOLD, POINTS_PER_LINE, TICK_LENGTH_LEVEL_ONE_MS, TICK_LENGTH_MIN_MS,
    TICK_LENGTH_STEP_MS,
};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points awarded for this clear
    pub points: u32,
    /// Cumulative score after the clear
    pub score: u32,
    /// Level after the clear
    pub level: u32,
    /// Number of thresholds crossed by this clear
    pub levels_gained: u32,
}

/// Points for clearing `lines` lines at `level`
pub fn points_for_lines(lines: usize, level: u32) -> u32 {
    (lines as u32)
        .saturating_mul(POINTS_PER_LINE)
        .saturating_mul(level)
}

/// Cumulative score at which `level` ends
pub fn level_threshold(level: u32) -> u32 {
    level.saturating_mul(LEVEL_THRESHOLD)
}

/// Apply a line clear to (score, level)
pub fn apply_line_clear(score: u32, level: u32, lines: usize) -> ScoreResult {
    let points = points_for_lines(lines, level);
    let score = score.saturating_add(points);

    // First level whose threshold is still above the score; never drops.
    let new_level = level.max(score / LEVEL_THRESHOLD + 1);

    ScoreResult {
        points,
        score,
        level: new_level,
        levels_gained: new_level - level,
    }
}

/// Milliseconds between gravity ticks at `level`
pub fn tick_length_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(TICK_LENGTH_STEP_MS);
    TICK_LENGTH_LEVEL_ONE_MS
        .saturating_sub(reduction)
        .max(TICK_LENGTH_MIN_MS)
}
