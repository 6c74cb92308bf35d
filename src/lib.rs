pub mod cmd;
pub mod config;
pub mod counter;
pub mod error;
pub mod input;
pub mod report;
pub mod ty;

pub use counter::{count_progressions, count_progressions_naive, count_triples, Method, TripleCounter};
pub use error::TriplesError;
pub use input::{BitString, SignArray};
