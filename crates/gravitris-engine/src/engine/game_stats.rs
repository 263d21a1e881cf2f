/// Reward values for clearing 1, 2, 3, and 4 (or more) rows at once.
const REWARD_TABLE: [usize; 4] = [100, 300, 500, 800];

/// Score, level, and cleared-line tracking.
///
/// - **Score**: sum of line-clear rewards, each multiplied by the level at
///   the time of the clear
/// - **Level**: `total_cleared_lines / 10 + 1`, starts at 1 and never
///   decreases
/// - **Total cleared lines**: running count across the session
///
/// # Example
///
/// ```
/// use gravitris_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_clear(4);
///
/// assert_eq!(stats.score(), 800);
/// assert_eq!(stats.total_cleared_lines(), 4);
/// assert_eq!(stats.level(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    level: usize,
    total_cleared_lines: usize,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a fresh tracker: score 0, level 1, no lines cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            total_cleared_lines: 0,
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Applies the result of one lock: `cleared` simultaneously removed rows.
    ///
    /// The reward is taken from the single/double/triple/tetris tiers (any
    /// count above 4 uses the tetris tier) and multiplied by the level in
    /// effect before the clear; the level is then recomputed from the line
    /// total. Calling with `cleared == 0` changes nothing.
    pub const fn record_clear(&mut self, cleared: usize) {
        if cleared == 0 {
            return;
        }
        self.total_cleared_lines += cleared;
        let tier = if cleared < REWARD_TABLE.len() {
            cleared
        } else {
            REWARD_TABLE.len()
        };
        self.score += REWARD_TABLE[tier - 1] * self.level;
        self.level = self.total_cleared_lines / 10 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_tiers_at_level_one() {
        for (cleared, reward) in [(1, 100), (2, 300), (3, 500), (4, 800)] {
            let mut stats = GameStats::new();
            stats.record_clear(cleared);
            assert_eq!(stats.score(), reward);
            assert_eq!(stats.total_cleared_lines(), cleared);
        }
    }

    #[test]
    fn test_clears_above_four_use_tetris_tier() {
        let mut stats = GameStats::new();
        stats.record_clear(5);
        assert_eq!(stats.score(), 800);
        assert_eq!(stats.total_cleared_lines(), 5);
    }

    #[test]
    fn test_zero_clear_is_a_no_op() {
        let mut stats = GameStats::new();
        stats.record_clear(2);
        let before = stats;
        stats.record_clear(0);
        assert_eq!(stats, before);
    }

    #[test]
    fn test_level_thresholds() {
        let mut stats = GameStats::new();
        assert_eq!(stats.level(), 1);

        for _ in 0..2 {
            stats.record_clear(4);
        }
        assert_eq!(stats.total_cleared_lines(), 8);
        assert_eq!(stats.level(), 1);

        stats.record_clear(2);
        assert_eq!(stats.total_cleared_lines(), 10);
        assert_eq!(stats.level(), 2);

        for _ in 0..5 {
            stats.record_clear(2);
        }
        assert_eq!(stats.total_cleared_lines(), 20);
        assert_eq!(stats.level(), 3);
    }

    #[test]
    fn test_reward_uses_level_before_recompute() {
        let mut stats = GameStats::new();
        stats.record_clear(4); // 800 * 1
        stats.record_clear(4); // 800 * 1
        stats.record_clear(2); // 300 * 1, then level -> 2
        assert_eq!(stats.score(), 1900);
        assert_eq!(stats.level(), 2);

        stats.record_clear(1); // 100 * 2
        assert_eq!(stats.score(), 2100);
    }
}
