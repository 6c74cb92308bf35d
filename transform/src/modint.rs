use num_traits::{One, Zero};
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Residue modulo `998244353 = 119 * 2^23 + 1`, kept in `[0, MOD)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModInt(u32);

impl ModInt {
    pub const MOD: u32 = 998_244_353;

    /// generator of the multiplicative group
    pub const PRIMITIVE_ROOT: u32 = 3;

    pub const fn new(v: u64) -> Self {
        Self((v % Self::MOD as u64) as u32)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub fn pow(self, mut exp: u64) -> Self {
        let (mut base, mut acc) = (self, Self::one());
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }

    /// Multiplicative inverse by Fermat's little theorem, zero maps to zero.
    pub fn inv(self) -> Self {
        self.pow(Self::MOD as u64 - 2)
    }
}

impl From<u64> for ModInt {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<ModInt> for u64 {
    fn from(value: ModInt) -> Self {
        value.0 as u64
    }
}

impl Display for ModInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for ModInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let s = self.0 + rhs.0;
        Self(if s >= Self::MOD { s - Self::MOD } else { s })
    }
}

impl Sub for ModInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(self.0 + Self::MOD - rhs.0)
        }
    }
}

impl Mul for ModInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(((self.0 as u64 * rhs.0 as u64) % Self::MOD as u64) as u32)
    }
}

impl Neg for ModInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::zero() - self
    }
}

macro_rules! impl_assign_for_modint {
    ($([$TRAIT: ident, $FN: ident, $OP: tt]),+) => {
        $(
            impl $TRAIT for ModInt {
                fn $FN(&mut self, rhs: Self) {
                    *self = *self $OP rhs;
                }
            }
        )+
    };
}

impl_assign_for_modint!(
    [AddAssign, add_assign, +],
    [SubAssign, sub_assign, -],
    [MulAssign, mul_assign, *]
);

impl Zero for ModInt {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl One for ModInt {
    fn one() -> Self {
        Self(1)
    }
}

#[cfg(test)]
mod tests {
    use super::ModInt;
    use num_traits::{One, Zero};

    #[test]
    fn arith() {
        let m = ModInt::MOD as u64;
        let (a, b) = (ModInt::new(m - 1), ModInt::new(5));

        assert_eq!((a + b).value(), 4);
        assert_eq!((b - a).value(), 6);
        assert_eq!((a * a).value(), 1);
        assert_eq!((-b + b), ModInt::zero());
        assert_eq!(ModInt::new(m), ModInt::zero());
    }

    #[test]
    fn inverse() {
        for v in [1u64, 2, 3, 12345, 998_244_352] {
            let x = ModInt::new(v);
            assert_eq!(x * x.inv(), ModInt::one(), "case => {v}");
        }
        assert_eq!(ModInt::new(2).inv().value(), 499_122_177);
    }

    #[test]
    fn root_order() {
        let g = ModInt::new(ModInt::PRIMITIVE_ROOT as u64);
        let m = ModInt::MOD as u64 - 1;
        assert_eq!(g.pow(m), ModInt::one());
        assert_ne!(g.pow(m / 2), ModInt::one());
        assert_ne!(g.pow(m / 7), ModInt::one());
        assert_ne!(g.pow(m / 17), ModInt::one());
    }
}
