//! Public types for the emoscope API.

mod emotion;

pub use emotion::{Emotion, EmotionReport, EmotionScores};
