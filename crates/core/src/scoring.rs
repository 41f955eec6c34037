//! Scoring module - line bonuses, soft drop points, levels and gravity
//!
//! Scoring rules:
//! - A clear of N lines earns `soft_drop_bonus(level) * line_bonus(N)`.
//! - A perfect clear (the bottom N rows cleared, nothing left above) multiplies the
//!   whole resulting score by 10.
//! - Each player-initiated downward step earns `soft_drop_bonus(level)`.
//!
//! The level used is always the one in force before the lock.

use crate::board::{row_is_empty, Row};
use crate::types::{
    BOARD_ROWS, GRAVITY_COARSE_STEP_MS, GRAVITY_FINE_STEP_MS, LINES_PER_LEVEL, LINE_BONUS,
    MIN_GRAVITY_MS, PERFECT_CLEAR_MULTIPLIER,
};

/// Base points for clearing `lines` rows; 0 for anything outside 1..=4
pub fn line_bonus(lines: usize) -> u32 {
    LINE_BONUS.get(lines).copied().unwrap_or(0)
}

/// Per-step soft drop points, also the line-clear multiplier.
///
/// Two levels per tier: 0-1 → 1, 2-3 → 2, 4-5 → 3, 6-7 → 4, 8+ → 5.
pub fn soft_drop_bonus(level: u32) -> u32 {
    (level / 2).min(4) + 1
}

/// Hard drops pay double the soft drop rate per row travelled
pub fn hard_drop_bonus(level: u32, rows: u32) -> u32 {
    soft_drop_bonus(level).saturating_mul(2).saturating_mul(rows)
}

/// A perfect clear removes exactly the bottom `cleared.len()` rows and leaves
/// every remaining row empty.
pub fn is_perfect_clear(cleared: &[usize], remaining: &[Row]) -> bool {
    if cleared.is_empty() || cleared.len() > BOARD_ROWS {
        return false;
    }
    let first = BOARD_ROWS - cleared.len();
    let bottom_rows = cleared.iter().copied().eq(first..BOARD_ROWS);
    bottom_rows && remaining.iter().all(row_is_empty)
}

/// Score after a lock.
///
/// Unchanged when nothing was cleared. Otherwise
/// `prev + soft_drop_bonus(level) * line_bonus(n)`, times 10 on a perfect clear.
pub fn score(prev_score: u32, level: u32, cleared: &[usize], remaining: &[Row]) -> u32 {
    if cleared.is_empty() {
        return prev_score;
    }

    let gained = soft_drop_bonus(level).saturating_mul(line_bonus(cleared.len()));
    let base = prev_score.saturating_add(gained);

    if is_perfect_clear(cleared, remaining) {
        base.saturating_mul(PERFECT_CLEAR_MULTIPLIER)
    } else {
        base
    }
}

/// Level for a running line total
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Gravity interval after one level-up.
///
/// Steps down by 100ms while above 100ms, then by 25ms, never below
/// `MIN_GRAVITY_MS`.
pub fn next_gravity_interval(current_ms: u32) -> u32 {
    let step = if current_ms > GRAVITY_COARSE_STEP_MS {
        GRAVITY_COARSE_STEP_MS
    } else {
        GRAVITY_FINE_STEP_MS
    };
    current_ms.saturating_sub(step).max(MIN_GRAVITY_MS)
}

/// Outcome of applying a line clear to the running totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub gravity_ms: u32,
    pub level_up: bool,
    pub perfect_clear: bool,
}

/// Fold one lock's clear result into score, lines, level and gravity.
///
/// The gravity interval only changes on the lock where the level increases.
pub fn advance(
    score_before: u32,
    lines_before: u32,
    level_before: u32,
    gravity_before: u32,
    cleared: &[usize],
    remaining: &[Row],
) -> Progress {
    let lines = lines_before + cleared.len() as u32;
    let level = calculate_level(lines);
    let level_up = level > level_before;

    Progress {
        score: score(score_before, level_before, cleared, remaining),
        lines,
        level,
        gravity_ms: if level_up {
            next_gravity_interval(gravity_before)
        } else {
            gravity_before
        },
        level_up,
        perfect_clear: is_perfect_clear(cleared, remaining),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::board::{row_with_gaps, EMPTY_ROW};
    use crate::types::{Color, BASE_GRAVITY_MS};

    #[test]
    fn test_line_bonus_table() {
        assert_eq!(line_bonus(0), 0);
        assert_eq!(line_bonus(1), 100);
        assert_eq!(line_bonus(2), 400);
        assert_eq!(line_bonus(3), 900);
        assert_eq!(line_bonus(4), 2000);
        assert_eq!(line_bonus(5), 0);
        assert_eq!(line_bonus(22), 0);
    }

    #[test]
    fn test_soft_drop_tiers() {
        let expected = [1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 5];
        for (level, want) in expected.iter().enumerate() {
            assert_eq!(soft_drop_bonus(level as u32), *want, "level {level}");
        }
        assert_eq!(soft_drop_bonus(100), 5);
    }

    #[test]
    fn test_hard_drop_bonus() {
        assert_eq!(hard_drop_bonus(0, 10), 20);
        assert_eq!(hard_drop_bonus(8, 3), 30);
    }

    #[test]
    fn test_score_unchanged_without_clear() {
        assert_eq!(score(1234, 5, &[], &[]), 1234);
    }

    #[test]
    fn test_perfect_tetris_at_level_zero() {
        let remaining = [EMPTY_ROW; 18];
        assert_eq!(score(0, 0, &[18, 19, 20, 21], &remaining), 20000);
    }

    #[test]
    fn test_single_at_level_three() {
        let mut remaining = [EMPTY_ROW; 21];
        remaining[20] = row_with_gaps(Color::Red, &[3]);
        assert_eq!(score(500, 3, &[21], &remaining), 700);
    }

    #[test]
    fn test_not_perfect_when_rows_above_remain() {
        let mut remaining = [EMPTY_ROW; 20];
        remaining[19] = row_with_gaps(Color::Red, &[0, 1]);
        assert!(!is_perfect_clear(&[20, 21], &remaining));
        assert_eq!(score(0, 0, &[20, 21], &remaining), 400);
    }

    #[test]
    fn test_not_perfect_when_cleared_rows_not_at_bottom() {
        // An empty remainder is not enough: the cleared rows must be the bottom ones.
        let remaining = [EMPTY_ROW; 21];
        assert!(!is_perfect_clear(&[20], &remaining));
        assert!(is_perfect_clear(&[21], &remaining));
    }

    #[test]
    fn test_perfect_clear_multiplies_previous_score() {
        let remaining = [EMPTY_ROW; 21];
        assert_eq!(score(50, 0, &[21], &remaining), 1500);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 0);
        assert_eq!(calculate_level(9), 0);
        assert_eq!(calculate_level(10), 1);
        assert_eq!(calculate_level(29), 2);
    }

    #[test]
    fn test_gravity_steps_and_floor() {
        assert_eq!(next_gravity_interval(1000), 900);
        assert_eq!(next_gravity_interval(200), 100);
        assert_eq!(next_gravity_interval(100), 75);
        assert_eq!(next_gravity_interval(50), 25);
        assert_eq!(next_gravity_interval(25), 25);
        assert_eq!(next_gravity_interval(0), 25);
    }

    #[test]
    fn test_gravity_schedule_never_hits_zero() {
        let mut interval = BASE_GRAVITY_MS;
        for _ in 0..100 {
            interval = next_gravity_interval(interval);
            assert!(interval >= MIN_GRAVITY_MS);
        }
        assert_eq!(interval, MIN_GRAVITY_MS);
    }

    #[test]
    fn test_advance_levels_up_on_tenth_line() {
        let remaining = [row_with_gaps(Color::Blue, &[1]); 21];
        let progress = advance(0, 9, 0, 1000, &[21], &remaining);

        assert_eq!(progress.lines, 10);
        assert_eq!(progress.level, 1);
        assert!(progress.level_up);
        assert_eq!(progress.gravity_ms, 900);
        // Line clear priced at the pre-lock level.
        assert_eq!(progress.score, 100);
    }

    #[test]
    fn test_advance_keeps_gravity_without_level_up() {
        let remaining = [row_with_gaps(Color::Blue, &[1]); 21];
        let progress = advance(0, 3, 0, 1000, &[21], &remaining);
        assert!(!progress.level_up);
        assert_eq!(progress.gravity_ms, 1000);
    }

    proptest! {
        #[test]
        fn prop_gravity_never_speeds_up_past_floor(current in 0u32..5000) {
            let next = next_gravity_interval(current);
            prop_assert!(next >= MIN_GRAVITY_MS);
            prop_assert!(next <= current.max(MIN_GRAVITY_MS));
        }

        #[test]
        fn prop_score_never_decreases(
            prev in 0u32..1_000_000,
            level in 0u32..40,
            lines in 0usize..=4,
        ) {
            let cleared: Vec<usize> = (BOARD_ROWS - lines..BOARD_ROWS).collect();
            let remaining = vec![row_with_gaps(Color::Green, &[0]); BOARD_ROWS - lines];
            prop_assert!(score(prev, level, &cleared, &remaining) >= prev);
        }
    }
}
