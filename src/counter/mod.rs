//! Triple counters over a [`BitString`].
//!
//! [`Method::Literal`] is the reference behaviour of the tool: the sign array is
//! transformed and the transformed values are walked as if they were the signs.
//! Its pair condition can never hold, so it always reports `0`.
//! [`Method::Progression`] and [`Method::Naive`] count the triples `i < j < k` with
//! `k - j == j - i` whose three positions are all `1`.

use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TriplesError;
use crate::input::BitString;

mod literal;
pub use literal::{count_signs, count_triples, LiteralCounter};

mod naive;
pub use naive::{count_progressions_naive, NaiveCounter};

mod progression;
pub use progression::{count_progressions, ProgressionCounter};

pub trait TripleCounter {
    fn method(&self) -> Method;

    fn count(&self, input: &BitString) -> Result<u64, TriplesError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// transform the sign array, then test every candidate triple
    #[default]
    Literal,
    /// all-ones arithmetic progressions, by NTT self-convolution
    Progression,
    /// all-ones arithmetic progressions, by direct enumeration
    Naive,
}

impl Method {
    pub fn counter(self) -> Box<dyn TripleCounter> {
        match self {
            Method::Literal => Box::new(LiteralCounter),
            Method::Progression => Box::new(ProgressionCounter),
            Method::Naive => Box::new(NaiveCounter),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Literal => "literal",
            Method::Progression => "progression",
            Method::Naive => "naive",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
