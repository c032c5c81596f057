//! Pre-built voices.
//!
//! # Example
//!
//! ```ignore
//! use simon_says::voices;
//!
//! let node = voices::tone();
//! ```

mod tone;

pub use tone::tone;
