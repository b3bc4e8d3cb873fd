//! Arithmetic on phasors.
//!
//! Addition, subtraction and multiplication run on the rectangular form.
//! Division runs on the polar pair, so quotients of very large or very small
//! phasors stay finite. Every result is a new phasor decomposed from its
//! rectangular value.

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;

use crate::{Error, Phasor, Result};

macro_rules! rectangular_binop {
    ($Trait:ident, $method:ident, $($Rhs:ty),+) => {
        $(
            impl $Trait<$Rhs> for Phasor {
                type Output = Phasor;

                fn $method(self, rhs: $Rhs) -> Phasor {
                    Phasor::from_complex(self.to_complex().$method(Complex64::from(rhs)))
                }
            }

            impl $Trait<Phasor> for $Rhs {
                type Output = Phasor;

                fn $method(self, rhs: Phasor) -> Phasor {
                    Phasor::from_complex(Complex64::from(self).$method(rhs.to_complex()))
                }
            }
        )+
    };
}

rectangular_binop!(Add, add, Complex64, f64);
rectangular_binop!(Sub, sub, Complex64, f64);
rectangular_binop!(Mul, mul, Complex64, f64);

impl Add for Phasor {
    type Output = Phasor;

    fn add(self, rhs: Phasor) -> Phasor {
        Phasor::from_complex(self.to_complex() + rhs.to_complex())
    }
}

impl Sub for Phasor {
    type Output = Phasor;

    fn sub(self, rhs: Phasor) -> Phasor {
        Phasor::from_complex(self.to_complex() - rhs.to_complex())
    }
}

impl Mul for Phasor {
    type Output = Phasor;

    fn mul(self, rhs: Phasor) -> Phasor {
        Phasor::from_complex(self.to_complex() * rhs.to_complex())
    }
}

impl Neg for Phasor {
    type Output = Phasor;

    fn neg(self) -> Phasor {
        Phasor::from_complex(-self.to_complex())
    }
}

impl Sum for Phasor {
    fn sum<I: Iterator<Item = Phasor>>(iter: I) -> Phasor {
        Phasor::from_complex(iter.map(|p| p.to_complex()).sum())
    }
}

impl<'a> Sum<&'a Phasor> for Phasor {
    fn sum<I: Iterator<Item = &'a Phasor>>(iter: I) -> Phasor {
        iter.copied().sum()
    }
}

impl Phasor {
    /// Complex division.
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] when `rhs` has zero magnitude.
    ///
    /// # Example
    /// ```
    /// use phasor::{Error, Phasor};
    ///
    /// let i = Phasor::new(120.0, 30.0).checked_div(Phasor::new(10.0, -15.0)).unwrap();
    /// approx::assert_abs_diff_eq!(i, Phasor::new(12.0, 45.0), epsilon = 1e-12);
    ///
    /// let err = Phasor::new(1.0, 0.0).checked_div(Phasor::new(0.0, 90.0));
    /// assert_eq!(err, Err(Error::DivisionByZero));
    /// ```
    pub fn checked_div(self, rhs: impl Into<Phasor>) -> Result<Phasor> {
        let divisor = rhs.into();
        let rect = divisor.to_complex();
        if divisor.mag() == 0.0 || (rect.re == 0.0 && rect.im == 0.0) {
            return Err(Error::DivisionByZero);
        }
        let quotient = Complex64::from_polar(
            self.mag() / divisor.mag(),
            (self.ang() - divisor.ang()).to_radians(),
        );
        Ok(Phasor::from_complex(quotient))
    }
}

/// # Panics
/// Panics when the divisor has zero magnitude. Use [`Phasor::checked_div`]
/// to handle that case.
impl<R: Into<Phasor>> Div<R> for Phasor {
    type Output = Phasor;

    fn div(self, rhs: R) -> Phasor {
        self.checked_div(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Div<Phasor> for f64 {
    type Output = Phasor;

    fn div(self, rhs: Phasor) -> Phasor {
        Phasor::from(self) / rhs
    }
}

impl Div<Phasor> for Complex64 {
    type Output = Phasor;

    fn div(self, rhs: Phasor) -> Phasor {
        Phasor::from_complex(self) / rhs
    }
}
