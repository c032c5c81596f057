/*
MIDI Note Numbers
=================

Middle C (C4) = MIDI note 60. The game only needs the fourth octave, one
pitch per button:

  Red C4, Green E4, Blue G4, Yellow B4 (a C major seventh, low to high)

The MIDI formula: note_number = 12 * (octave + 1) + semitone
Where semitone: C=0, C#=1, D=2, D#=3, E=4, F=5, F#=6, G=7, G#=8, A=9, A#=10, B=11
*/

pub const C4: u8 = 60;
pub const E4: u8 = 64;
pub const G4: u8 = 67;
pub const A4: u8 = 69; // A440 tuning reference
pub const B4: u8 = 71;

const NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Scientific pitch name for a MIDI note, e.g. 60 -> "C4".
pub fn note_name(note: u8) -> String {
    let octave = note as i32 / 12 - 1;
    format!("{}{}", NAMES[note as usize % 12], octave)
}

/// Convert MIDI note number to frequency in Hz.
/// A4 = 440 Hz = MIDI note 69
#[inline]
pub fn midi_note_to_freq(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - A4 as f32) / 12.0)
}
