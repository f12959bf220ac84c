// Tile and word rules engine

pub mod bag;
pub mod scorer;
pub mod validator;

pub use bag::{BagError, TileBag, RACK_SIZE};
pub use scorer::Scorer;
pub use validator::{Verdict, WordValidator};
