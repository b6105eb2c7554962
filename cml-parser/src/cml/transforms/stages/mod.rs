//! Pipeline stages

pub mod building;
pub mod parsing;
pub mod tokenization;

pub use building::Building;
pub use parsing::{ParsedSource, Parsing};
pub use tokenization::Tokenization;
