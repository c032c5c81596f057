//! View model: what the screen shows, as a pure function of a snapshot.

use super::{
    color::Color,
    state::{GameStatus, Snapshot},
};

pub const TITLE: &str = "Simon Says";
pub const GAME_OVER_MESSAGE: &str = "You lost, try again?";
pub const START_LABEL: &str = "Start Game";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub color: Color,
    /// Highlighted by playback
    pub lit: bool,
    /// A click would be judged
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub title: String,
    pub buttons: [ButtonView; 4],
    pub game_over_message: Option<&'static str>,
    /// The start control is always shown
    pub start_label: &'static str,
}

impl From<&Snapshot> for ViewModel {
    fn from(snapshot: &Snapshot) -> Self {
        let score = snapshot.score();
        let title = if score <= 0 {
            TITLE.to_string()
        } else {
            format!("Current score: {score}")
        };

        // Lit only in the first part of a pulse, while input is still closed
        let lit_color = match snapshot.status {
            GameStatus::Replaying if !snapshot.input_open => snapshot.highlighted(),
            _ => None,
        };

        let buttons = Color::ALL.map(|color| ButtonView {
            color,
            lit: lit_color == Some(color),
            enabled: snapshot.accepts_input,
        });

        ViewModel {
            title,
            buttons,
            game_over_message: (snapshot.status == GameStatus::GameOver)
                .then_some(GAME_OVER_MESSAGE),
            start_label: START_LABEL,
        }
    }
}
