use transform::convolve;

use super::{Method, TripleCounter};
use crate::error::TriplesError;
use crate::input::BitString;

pub struct ProgressionCounter;

impl TripleCounter for ProgressionCounter {
    fn method(&self) -> Method {
        Method::Progression
    }

    fn count(&self, input: &BitString) -> Result<u64, TriplesError> {
        count_progressions(input)
    }
}

/// Counts all-ones triples `i < j < k` with `k - j == j - i`.
///
/// With `bits` the `0/1` indicator of the input, `(bits * bits)[2j]` is the number of
/// ordered pairs `(i, k)` with `i + k == 2j` and both positions set. For a set centre
/// this includes `i == k == j` once and every other pair twice.
pub fn count_progressions(input: &BitString) -> Result<u64, TriplesError> {
    let n = input.len();
    if n < 3 {
        return Ok(0);
    }

    let bits = input.bits();
    let conv = convolve(&bits, &bits)?;
    log::debug!("progression: n = {n}, convolution length = {}", conv.len());

    let total = (1..n - 1)
        .filter(|&j| input.is_one(j))
        .map(|j| (u64::from(conv[2 * j]) - 1) / 2)
        .sum();

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::count_progressions;
    use crate::counter::count_progressions_naive;
    use crate::input::BitString;
    use rand::Rng;

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
            ("000", 0),
        ];

        for (s, tgt) in cases {
            assert_eq!(count_progressions(&BitString::new(s)).unwrap(), tgt, "case => {s:?}");
        }
    }

    #[test]
    fn all_ones() {
        // sum over centres of min(j, n - 1 - j)
        let n = 200usize;
        let s = BitString::new(&"1".repeat(n));
        let tgt = (0..n).map(|j| j.min(n - 1 - j) as u64).sum::<u64>();
        assert_eq!(count_progressions(&s).unwrap(), tgt);
    }

    #[test]
    fn random_against_naive() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let len = rng.gen_range(0..300);
            let density = rng.gen_range(0.1..0.9);
            let s = (0..len)
                .map(|_| if rng.gen_bool(density) { '1' } else { '0' })
                .collect::<String>();
            let s = BitString::new(&s);

            assert_eq!(
                count_progressions(&s).unwrap(),
                count_progressions_naive(&s),
                "case => {s}"
            );
        }
    }
}
