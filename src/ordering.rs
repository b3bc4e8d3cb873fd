//! Magnitude-only ordering.
//!
//! Phasors compare for equality by their rectangular value but order by
//! magnitude alone. The two relations disagree, so ordering is exposed through
//! named methods and the [`ByMagnitude`] wrapper rather than `PartialOrd` on
//! [`Phasor`] itself.

use std::cmp::Ordering;

use num_complex::Complex64;

use crate::Phasor;

/// Anything a phasor can be ordered against.
pub trait Magnitude {
    /// Magnitude used for ordering: a phasor's stored magnitude, `|z|` for a
    /// complex value, the number itself for an `f64`.
    fn magnitude(&self) -> f64;
}

impl Magnitude for Phasor {
    fn magnitude(&self) -> f64 {
        self.mag()
    }
}

/// Coerced through polar decomposition.
impl Magnitude for Complex64 {
    fn magnitude(&self) -> f64 {
        Phasor::from_complex(*self).mag()
    }
}

/// Compared directly against the magnitude, sign included.
impl Magnitude for f64 {
    fn magnitude(&self) -> f64 {
        *self
    }
}

impl<T: Magnitude + ?Sized> Magnitude for &T {
    fn magnitude(&self) -> f64 {
        (**self).magnitude()
    }
}

impl Phasor {
    /// Order by magnitude. `None` if either magnitude is NaN.
    pub fn cmp_mag(&self, other: impl Magnitude) -> Option<Ordering> {
        self.mag().partial_cmp(&other.magnitude())
    }

    /// `true` if this magnitude exceeds `other`'s (phasor, `|z|` of a complex
    /// value, or an `f64` as is).
    pub fn mag_gt(&self, other: impl Magnitude) -> bool {
        self.mag() > other.magnitude()
    }

    /// `true` if this magnitude is below `other`'s. Angles are ignored.
    pub fn mag_lt(&self, other: impl Magnitude) -> bool {
        self.mag() < other.magnitude()
    }

    /// `true` if this magnitude is at least `other`'s; equal magnitudes at
    /// different angles satisfy both `mag_ge` and `mag_le`.
    pub fn mag_ge(&self, other: impl Magnitude) -> bool {
        self.mag() >= other.magnitude()
    }

    /// `true` if this magnitude is at most `other`'s.
    pub fn mag_le(&self, other: impl Magnitude) -> bool {
        self.mag() <= other.magnitude()
    }
}

/// Wrapper that orders and compares a phasor by magnitude only.
///
/// # Example
/// ```
/// use phasor::{ByMagnitude, Phasor};
///
/// let loads = [Phasor::new(5.0, 10.0), Phasor::new(12.0, -40.0), Phasor::new(7.0, 90.0)];
/// let largest = loads
///     .iter()
///     .copied()
///     .map(ByMagnitude)
///     .max_by(|a, b| a.partial_cmp(b).unwrap())
///     .unwrap();
/// assert_eq!(largest.0.mag(), 12.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByMagnitude(pub Phasor);

impl PartialEq for ByMagnitude {
    fn eq(&self, other: &Self) -> bool {
        self.0.mag() == other.0.mag()
    }
}

impl PartialOrd for ByMagnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.cmp_mag(other.0)
    }
}

impl From<Phasor> for ByMagnitude {
    fn from(p: Phasor) -> Self {
        ByMagnitude(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_against_phasor() {
        let small = Phasor::new(5.0, 0.0);
        let large = Phasor::new(10.0, 999.0);
        assert!(small.mag_lt(large));
        assert!(large.mag_gt(small));
        assert!(small.mag_le(&large));
        assert!(!small.mag_ge(large));
    }

    #[test]
    fn equal_magnitudes_are_unordered_but_not_equal() {
        let a = Phasor::new(5.0, 0.0);
        let b = Phasor::new(5.0, 90.0);
        assert!(!a.mag_lt(b));
        assert!(!a.mag_gt(b));
        assert!(a.mag_le(b) && a.mag_ge(b));
        assert_eq!(a.cmp_mag(b), Some(Ordering::Equal));
        assert_ne!(a, b);
        assert_eq!(ByMagnitude(a), ByMagnitude(b));
    }

    #[test]
    fn compares_against_complex() {
        let p = Phasor::new(4.0, 180.0);
        assert!(p.mag_lt(Complex64::new(3.0, 4.0)));
        assert!(p.mag_gt(Complex64::new(0.0, -3.0)));
    }

    #[test]
    fn compares_against_real() {
        let p = Phasor::new(4.0, 45.0);
        assert!(p.mag_gt(3.0));
        assert!(p.mag_lt(4.5));
        assert!(p.mag_ge(4.0));
        assert!(p.mag_gt(-10.0));
    }

    #[test]
    fn nan_is_unordered() {
        let p = Phasor::new(1.0, 0.0);
        assert_eq!(p.cmp_mag(f64::NAN), None);
    }

    #[test]
    fn sort_by_magnitude() {
        let mut v = vec![
            ByMagnitude(Phasor::new(3.0, 10.0)),
            ByMagnitude(Phasor::new(1.0, 200.0)),
            ByMagnitude(Phasor::new(2.0, -30.0)),
        ];
        v.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mags: Vec<f64> = v.iter().map(|p| p.0.mag()).collect();
        assert_eq!(mags, vec![1.0, 2.0, 3.0]);
    }
}
