//! Button tone voice.
//!
//! A triangle wave with a very fast attack, a short decay to a low sustain
//! and a long release. Eighth-note presses come out as a soft "blip" that
//! rings on briefly after the note ends.
//!
//! # How It Works
//!
//! 1. Triangle oscillator, restarted on every note
//! 2. 5ms attack so the press is heard immediately
//! 3. 100ms decay down to 30% sustain
//! 4. 1s release tail

use crate::graph::{envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode};

/// Create the voice used for every button tone.
pub fn tone() -> impl GraphNode {
    OscNode::triangle().amplify(EnvNode::adsr(0.005, 0.1, 0.3, 1.0))
}
