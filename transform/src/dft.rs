use rustfft::FftPlanner;

pub use rustfft::num_complex::Complex;

/// Forward DFT of a real signal, `X[k] = sum x[m] * exp(-2*pi*i*k*m/n)`,
/// without normalisation. Any length is accepted.
pub fn dft(signal: &[f64]) -> Vec<Complex<f64>> {
    if signal.is_empty() {
        return Vec::new();
    }

    let mut buf = signal
        .iter()
        .map(|&x| Complex::new(x, 0.0))
        .collect::<Vec<_>>();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(buf.len());
    fft.process(&mut buf);

    buf
}

#[cfg(test)]
mod tests {
    use super::{dft, Complex};
    use rand::Rng;
    use std::f64::consts::PI;

    fn dft_direct(signal: &[f64]) -> Vec<Complex<f64>> {
        let n = signal.len();
        (0..n)
            .map(|k| {
                signal
                    .iter()
                    .enumerate()
                    .map(|(m, &x)| {
                        let theta = -2.0 * PI * (k * m) as f64 / n as f64;
                        Complex::new(x * theta.cos(), x * theta.sin())
                    })
                    .sum()
            })
            .collect()
    }

    #[test]
    fn empty() {
        assert!(dft(&[]).is_empty());
    }

    #[test]
    fn single() {
        let c = dft(&[-1.0]);
        assert_eq!(c.len(), 1);
        assert!((c[0].re + 1.0).abs() < 1e-12);
        assert!(c[0].im.abs() < 1e-12);
    }

    #[test]
    fn dc_bin_is_sum() {
        let signal = [1.0, -1.0, 1.0, 1.0, -1.0];
        let c = dft(&signal);
        assert!((c[0].re - 1.0).abs() < 1e-9);
        assert!(c[0].im.abs() < 1e-9);
    }

    #[test]
    fn matches_direct() {
        let mut rng = rand::thread_rng();
        for len in [2usize, 3, 6, 7, 12, 31, 100] {
            let signal = (0..len)
                .map(|_| if rng.gen_bool(0.5) { 1.0 } else { -1.0 })
                .collect::<Vec<_>>();

            let (fast, slow) = (dft(&signal), dft_direct(&signal));
            assert_eq!(fast.len(), slow.len());
            for (idx, (a, b)) in fast.iter().zip(slow.iter()).enumerate() {
                assert!((a - b).norm() < 1e-9, "len {len}, bin {idx}: {a} != {b}");
            }
        }
    }
}
