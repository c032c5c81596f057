use rand::Rng;

use super::color::Color;

/// The ordered colors the player must reproduce. Grows by one per round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence(Vec<Color>);

impl Sequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    /// True if `input` matches this sequence position by position.
    pub fn starts_with(&self, input: &[Color]) -> bool {
        self.0.starts_with(input)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<Vec<Color>> for Sequence {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

/// Next round's sequence: a copy of `current` with one random color appended.
///
/// `current` is left untouched; the displayed and compared sequence only
/// changes when the caller swaps the result in.
pub fn next_sequence<R: Rng>(current: &Sequence, rng: &mut R) -> Sequence {
    let mut next = Vec::with_capacity(current.len() + 1);
    next.extend_from_slice(current.as_slice());
    next.push(Color::random(rng));
    Sequence(next)
}
