//! Scoring module - line clear points, levels and the gravity curve
//!
//! Level starts at 1 and rises by one every `lines_per_level` cleared lines.
//! The drop interval shrinks by a fixed step per level down to a floor.

use crate::config::{EngineConfig, LineScoreRule};
use crate::types::LINE_CLEAR_POINTS;

/// Points for clearing `lines` rows at once at `level`
///
/// ```
/// use blockfall_core::config::LineScoreRule;
/// use blockfall_core::scoring::line_clear_points;
///
/// assert_eq!(line_clear_points(1, 1, LineScoreRule::Level), 100);
/// assert_eq!(line_clear_points(2, 3, LineScoreRule::Level), 600);
/// assert_eq!(line_clear_points(2, 3, LineScoreRule::Square), 400);
/// ```
pub fn line_clear_points(lines: u32, level: u32, rule: LineScoreRule) -> u32 {
    let multiplier = match rule {
        LineScoreRule::Level => level,
        LineScoreRule::Square => lines,
    };
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(multiplier)
}

/// Level reached after `total_lines` cleared lines (1-based)
pub fn level_for_lines(total_lines: u32, lines_per_level: u32) -> u32 {
    total_lines / lines_per_level.max(1) + 1
}

/// Gravity interval in milliseconds at `level`
pub fn drop_interval_ms(level: u32, config: &EngineConfig) -> u32 {
    let reduction = level
        .saturating_sub(1)
        .saturating_mul(config.drop_step_ms);
    config
        .base_drop_ms
        .saturating_sub(reduction)
        .max(config.min_drop_ms)
}

/// Points for a drop of `rows` rows
pub fn calculate_drop_score(rows: u32, points_per_row: u32) -> u32 {
    rows.saturating_mul(points_per_row)
}
