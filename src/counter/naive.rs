use super::{Method, TripleCounter};
use crate::error::TriplesError;
use crate::input::BitString;

pub struct NaiveCounter;

impl TripleCounter for NaiveCounter {
    fn method(&self) -> Method {
        Method::Naive
    }

    fn count(&self, input: &BitString) -> Result<u64, TriplesError> {
        Ok(count_progressions_naive(input))
    }
}

/// Enumerates every centre `j` and step `d`, `O(n^2)`.
pub fn count_progressions_naive(input: &BitString) -> u64 {
    let n = input.len();
    let mut count = 0;

    for j in (1..n.saturating_sub(1)).filter(|&j| input.is_one(j)) {
        for d in 1..=j.min(n - 1 - j) {
            if input.is_one(j - d) && input.is_one(j + d) {
                count += 1;
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::count_progressions_naive;
    use crate::input::BitString;

    #[test]
    fn known() {
        let cases = [
            ("", 0u64),
            ("1", 0),
            ("11", 0),
            ("111", 1),
            ("11111", 4),
            ("10101", 1),
            ("1001001", 1),
            ("110011", 0),
            ("1é111", 2),
            ("1x1x1", 1),
        ];

        for (s, tgt) in cases {
            assert_eq!(count_progressions_naive(&BitString::new(s)), tgt, "case => {s:?}");
        }
    }
}
