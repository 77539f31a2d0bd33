use std::time::{Duration, Instant};

/// Session counters shown by the interactive mode and summarized by the
/// agent runner.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub games_won: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            games_won: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32, won: bool) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
        }
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");
    }

    #[test]
    fn test_high_score_and_win_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10, false);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);
        assert_eq!(metrics.games_won, 0);

        metrics.on_game_over(5, true);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 2);
        assert_eq!(metrics.games_won, 1);

        metrics.on_game_over(15, false);
        assert_eq!(metrics.high_score, 15);
    }
}
