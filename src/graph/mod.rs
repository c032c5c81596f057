//! Composable building blocks for the tone voice.
//!
//! Graph nodes wrap the DSP primitives with note events and block-based
//! rendering; `extensions` adds the fluent `.amplify()` combinator.

/// Multiply a signal by a modulator (envelope-controlled amplitude).
pub mod amplify;
/// Envelope generator node exposing ADSR state.
pub mod envelope;
/// Fluent combinators.
pub mod extensions;
/// Core traits shared by all graph nodes.
pub mod node;
/// Audio-band oscillators.
pub mod oscillator;

pub use node::{GraphNode, RenderCtx};
