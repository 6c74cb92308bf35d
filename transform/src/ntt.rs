use crate::{ModInt, TransformError};
use num_traits::{One, Zero};

/// `998244353 - 1 = 119 * 2^23`, so power-of-two lengths up to `2^23` have roots of unity.
pub const MAX_NTT_LEN: usize = 1 << 23;

fn check_len(len: usize) -> Result<(), TransformError> {
    if len > MAX_NTT_LEN {
        Err(TransformError::TooLong {
            len,
            max: MAX_NTT_LEN,
        })
    } else if !len.is_power_of_two() {
        Err(TransformError::NotPowerOfTwo(len))
    } else {
        Ok(())
    }
}

fn bit_reverse(a: &mut [ModInt]) {
    let n = a.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;

        if i < j {
            a.swap(i, j);
        }
    }
}

/// In-place number-theoretic transform.
///
/// The inverse transform includes the `1/n` scaling, so `ntt(a, false)` followed by
/// `ntt(a, true)` restores `a`.
pub fn ntt(a: &mut [ModInt], inverse: bool) -> Result<(), TransformError> {
    let n = a.len();
    check_len(n)?;

    bit_reverse(a);

    let g = ModInt::new(ModInt::PRIMITIVE_ROOT as u64);
    let mut len = 2;
    while len <= n {
        let mut w_len = g.pow((ModInt::MOD as u64 - 1) / len as u64);
        if inverse {
            w_len = w_len.inv();
        }

        for chunk in a.chunks_exact_mut(len) {
            let (lo, hi) = chunk.split_at_mut(len / 2);
            let mut w = ModInt::one();
            for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                let t = *v * w;
                *v = *u - t;
                *u += t;
                w *= w_len;
            }
        }

        len <<= 1;
    }

    if inverse {
        let n_inv = ModInt::new(n as u64).inv();
        a.iter_mut().for_each(|x| *x *= n_inv);
    }

    Ok(())
}

/// Product of the polynomials with coefficients `a` and `b` (lowest degree first),
/// reduced modulo `998244353`. Coefficients are exact as long as they stay below the modulus.
pub fn convolve(a: &[u64], b: &[u64]) -> Result<Vec<ModInt>, TransformError> {
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }

    let out_len = a.len() + b.len() - 1;
    let size = out_len.next_power_of_two();
    check_len(size)?;

    let pad = |src: &[u64]| {
        let mut v = src.iter().map(|&x| ModInt::from(x)).collect::<Vec<_>>();
        v.resize(size, ModInt::zero());
        v
    };

    let mut fa = pad(a);
    ntt(&mut fa, false)?;

    if std::ptr::eq(a, b) {
        fa.iter_mut().for_each(|x| *x = *x * *x);
    } else {
        let mut fb = pad(b);
        ntt(&mut fb, false)?;
        fa.iter_mut().zip(fb.iter()).for_each(|(x, &y)| *x *= y);
    }

    ntt(&mut fa, true)?;
    fa.truncate(out_len);

    Ok(fa)
}

#[cfg(test)]
mod tests {
    use super::{convolve, ntt, MAX_NTT_LEN};
    use crate::{ModInt, TransformError};
    use rand::Rng;

    fn schoolbook(a: &[u64], b: &[u64]) -> Vec<u64> {
        let mut res = vec![0u64; a.len() + b.len() - 1];
        for (i, x) in a.iter().enumerate() {
            for (j, y) in b.iter().enumerate() {
                res[i + j] += x * y;
            }
        }
        res
    }

    #[test]
    fn round_trip() {
        let orig = (0..16u64).map(|x| ModInt::new(x * x + 7)).collect::<Vec<_>>();
        let mut a = orig.clone();

        ntt(&mut a, false).unwrap();
        assert_ne!(a, orig);
        ntt(&mut a, true).unwrap();
        assert_eq!(a, orig);
    }

    #[test]
    fn bad_len() {
        let mut a = vec![ModInt::default(); 6];
        assert_eq!(ntt(&mut a, false), Err(TransformError::NotPowerOfTwo(6)));

        let a = vec![1u64; MAX_NTT_LEN / 2 + 1];
        assert!(matches!(
            convolve(&a, &a),
            Err(TransformError::TooLong { .. })
        ));
    }

    #[test]
    fn small() {
        // (1 + 2x + 3x^2)(4 + 5x) = 4 + 13x + 22x^2 + 15x^3
        let c = convolve(&[1, 2, 3], &[4, 5]).unwrap();
        let c = c.into_iter().map(u64::from).collect::<Vec<_>>();
        assert_eq!(c, vec![4, 13, 22, 15]);

        assert!(convolve(&[], &[1, 2]).unwrap().is_empty());
        assert_eq!(convolve(&[3], &[5]).unwrap(), vec![ModInt::new(15)]);
    }

    #[test]
    fn random_against_schoolbook() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let (la, lb) = (rng.gen_range(1..60), rng.gen_range(1..60));
            let a = (0..la).map(|_| rng.gen_range(0..2u64)).collect::<Vec<_>>();
            let b = (0..lb).map(|_| rng.gen_range(0..1000u64)).collect::<Vec<_>>();

            let fast = convolve(&a, &b)
                .unwrap()
                .into_iter()
                .map(u64::from)
                .collect::<Vec<_>>();
            assert_eq!(fast, schoolbook(&a, &b));

            let sq = convolve(&a, &a)
                .unwrap()
                .into_iter()
                .map(u64::from)
                .collect::<Vec<_>>();
            assert_eq!(sq, schoolbook(&a, &a));
        }
    }
}
