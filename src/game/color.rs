use rand::Rng;

use crate::sequencing::notes;

/// One of the four buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

/// Fixed per-color data: display color and pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec {
    pub name: &'static str,
    pub hex: &'static str,
    pub rgb: (u8, u8, u8),
    /// MIDI note number
    pub pitch: u8,
}

impl Color {
    /// Display order, left to right
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    pub const fn spec(self) -> ColorSpec {
        match self {
            Color::Red => ColorSpec {
                name: "RED",
                hex: "#E94F2C",
                rgb: (0xE9, 0x4F, 0x2C),
                pitch: notes::C4,
            },
            Color::Green => ColorSpec {
                name: "GREEN",
                hex: "#80B728",
                rgb: (0x80, 0xB7, 0x28),
                pitch: notes::E4,
            },
            Color::Blue => ColorSpec {
                name: "BLUE",
                hex: "#0EA6EA",
                rgb: (0x0E, 0xA6, 0xEA),
                pitch: notes::G4,
            },
            Color::Yellow => ColorSpec {
                name: "YELLOW",
                hex: "#FDB92F",
                rgb: (0xFD, 0xB9, 0x2F),
                pitch: notes::B4,
            },
        }
    }

    pub const fn pitch(self) -> u8 {
        self.spec().pitch
    }

    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    /// Uniform pick over [`Color::ALL`].
    pub fn random<R: Rng>(rng: &mut R) -> Color {
        Color::ALL[rng.random_range(0..Color::ALL.len())]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
