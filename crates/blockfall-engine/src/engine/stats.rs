/// Points awarded per cleared line.
pub const SCORE_PER_LINE: usize = 100;

/// Cumulative lines needed for each level.
pub const LINES_PER_LEVEL: usize = 5;

/// Highest reachable level.
pub const MAX_LEVEL: usize = 20;

/// Score, level, and line-clear counters for a session.
///
/// Only landings change these values, through [`complete_piece_drop`](Self::complete_piece_drop).
///
/// # Example
///
/// ```
/// use blockfall_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_drop(4);
/// stats.complete_piece_drop(1);
///
/// assert_eq!(stats.score(), 500);
/// assert_eq!(stats.level(), 1);
/// assert_eq!(stats.line_cleared_counter()[4], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    level: usize,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            level: 0,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the current level: one per [`LINES_PER_LEVEL`] lines, capped at [`MAX_LEVEL`].
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Returns the number of pieces landed so far.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of landings by lines cleared at once.
    ///
    /// Index 0 counts landings that cleared nothing, index 4 counts four-line clears.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Records a landing that cleared `cleared_lines` rows.
    pub fn complete_piece_drop(&mut self, cleared_lines: usize) {
        self.completed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if let Some(counter) = self.line_cleared_counter.get_mut(cleared_lines) {
            *counter += 1;
        }
        self.score += cleared_lines * SCORE_PER_LINE;
        self.level = usize::min(self.total_cleared_lines / LINES_PER_LEVEL, MAX_LEVEL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = GameStats::new();
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.level(), 0);
        assert_eq!(stats.completed_pieces(), 0);
        assert_eq!(stats.total_cleared_lines(), 0);
        assert_eq!(stats.line_cleared_counter(), &[0; 5]);
    }

    #[test]
    fn test_score_is_linear_in_lines() {
        let mut stats = GameStats::new();
        stats.complete_piece_drop(0);
        assert_eq!(stats.score(), 0);
        stats.complete_piece_drop(1);
        assert_eq!(stats.score(), 100);
        stats.complete_piece_drop(2);
        assert_eq!(stats.score(), 300);
        stats.complete_piece_drop(4);
        assert_eq!(stats.score(), 700);
        assert_eq!(stats.completed_pieces(), 4);
        assert_eq!(stats.line_cleared_counter(), &[1, 1, 1, 0, 1]);
    }

    #[test]
    fn test_level_every_five_lines() {
        let mut stats = GameStats::new();
        for _ in 0..4 {
            stats.complete_piece_drop(1);
        }
        assert_eq!(stats.level(), 0);
        stats.complete_piece_drop(1);
        assert_eq!(stats.level(), 1);
        stats.complete_piece_drop(4);
        assert_eq!(stats.level(), 1);
        stats.complete_piece_drop(1);
        assert_eq!(stats.level(), 2);
    }

    #[test]
    fn test_level_is_capped() {
        let mut stats = GameStats::new();
        for _ in 0..50 {
            stats.complete_piece_drop(4);
        }
        assert_eq!(stats.total_cleared_lines(), 200);
        assert_eq!(stats.level(), MAX_LEVEL);
    }
}
