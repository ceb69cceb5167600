//! Red-flag domain - Heuristic misinformation indicators

mod detector;
mod lexicon;

pub use detector::{RedFlagDetector, RedFlagIndicator, RedFlagReport};
pub use lexicon::{Lexicon, LexiconRegistry, LexiconTerms};
