use log::info;

/// Current score, best score, and finished-run history for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct ScoreTrack {
    score: u32,
    high_score: u32,
    history: Vec<u32>,
}

impl ScoreTrack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.score += 1;
    }

    /// Closes the current run: raises the high score if beaten and records
    /// the score in history. Called once per session.
    pub fn finish(&mut self) {
        self.high_score = self.high_score.max(self.score);
        self.history.push(self.score);
        info!(
            "run finished with score {} (high score {}, {} runs)",
            self.score,
            self.high_score,
            self.history.len()
        );
    }

    /// Starts a new run. High score and history are kept.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// All finished runs, oldest first.
    #[must_use]
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    /// Up to `count` finished runs, most recent first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = u32> + '_ {
        self.history.iter().rev().take(count).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::ScoreTrack;

    fn finish_with(track: &mut ScoreTrack, score: u32) {
        track.reset();
        for _ in 0..score {
            track.increment();
        }
        track.finish();
    }

    #[test]
    fn high_score_never_decreases() {
        let mut track = ScoreTrack::new();

        finish_with(&mut track, 7);
        assert_eq!(track.high_score(), 7);

        finish_with(&mut track, 3);
        assert_eq!(track.high_score(), 7);

        finish_with(&mut track, 9);
        assert_eq!(track.high_score(), 9);
    }

    #[test]
    fn reset_keeps_high_score_and_history() {
        let mut track = ScoreTrack::new();
        finish_with(&mut track, 4);

        track.reset();

        assert_eq!(track.score(), 0);
        assert_eq!(track.high_score(), 4);
        assert_eq!(track.history(), &[4]);
    }

    #[test]
    fn recent_lists_newest_first_and_truncates() {
        let mut track = ScoreTrack::new();
        for score in [1, 2, 3, 4, 5, 6] {
            finish_with(&mut track, score);
        }

        let recent: Vec<u32> = track.recent(5).collect();

        assert_eq!(recent, vec![6, 5, 4, 3, 2]);
        assert_eq!(track.history().len(), 6);
    }
}
