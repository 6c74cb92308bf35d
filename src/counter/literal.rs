use transform::dft;

use super::{Method, TripleCounter};
use crate::error::TriplesError;
use crate::input::{BitString, SignArray};

pub struct LiteralCounter;

impl TripleCounter for LiteralCounter {
    fn method(&self) -> Method {
        Method::Literal
    }

    fn count(&self, input: &BitString) -> Result<u64, TriplesError> {
        Ok(count_signs(&input.signs()))
    }
}

pub fn count_triples(input: &str) -> u64 {
    count_signs(&BitString::new(input).signs())
}

/// Walks every `i < j` with `k = 2j - i` over the DFT of `signs`.
///
/// A pair is counted when `k < n`, `j - i == 2 * (j - i)` and the real part of
/// `c[i] * c[j] * c[k]` is positive. The second test only holds for `i == j`,
/// which the loop bounds exclude, so the result is always `0`.
pub fn count_signs(signs: &SignArray) -> u64 {
    let n = signs.len();
    let c = dft(&signs.as_signal());
    log::debug!("literal: n = {n}, transform bins = {}", c.len());

    let mut count = 0u64;
    for j in 1..n {
        for i in (0..j).rev() {
            let k = 2 * j - i;
            if k < n && j - i == 2 * (j - i) && (c[i] * c[j] * c[k]).re > 0.0 {
                count += 1;
            }
        }
    }

    count
}
