//! Discrete transforms used by the triple counters.
//!
//! `dft` is the complex Fourier transform over `f64`, `ntt` is the same
//! transform over the field `Z/998244353`, which makes integer convolution exact.

mod dft;
pub use dft::{dft, Complex};

mod error;
pub use error::TransformError;

mod modint;
pub use modint::ModInt;

mod ntt;
pub use ntt::{convolve, ntt, MAX_NTT_LEN};
