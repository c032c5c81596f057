use super::color::Color;

/// Where the game is in its lifecycle.
///
/// `Replaying` and `AwaitingInput` are the two sub-phases of a game in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Replaying,
    AwaitingInput,
    GameOver,
}

impl GameStatus {
    pub fn is_playing(self) -> bool {
        matches!(self, GameStatus::Replaying | GameStatus::AwaitingInput)
    }
}

/// Outcome of a single pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgement {
    /// Input was closed; nothing happened.
    Ignored,
    /// Correct so far, round not finished.
    Accepted,
    /// Whole sequence reproduced; the next round is playing.
    RoundComplete,
    /// Wrong color; the game is over.
    Mismatch,
}

/// Copy of everything the view needs, sent to observers after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub status: GameStatus,
    pub sequence: Vec<Color>,
    pub player_input: Vec<Color>,
    /// Index being highlighted during playback
    pub cursor: Option<usize>,
    /// Input re-opened partway through the current pulse
    pub input_open: bool,
    /// Picks would currently be judged rather than ignored
    pub accepts_input: bool,
}

impl Snapshot {
    /// Score shown in the title: rounds survived.
    pub fn score(&self) -> i64 {
        self.sequence.len() as i64 - 1
    }

    /// Color under the playback cursor, if any.
    pub fn highlighted(&self) -> Option<Color> {
        self.cursor.and_then(|i| self.sequence.get(i).copied())
    }
}
