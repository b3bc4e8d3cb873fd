use std::sync::LazyLock;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_complex::Complex64;

use crate::array_like::Scalar;
use crate::{Error, Result};

/// The three-phase rotation operator, a unit phasor at 120°.
///
/// Multiplying by `ALPHA` advances a phasor by one phase of a balanced
/// three-phase system.
///
/// # Example
/// ```
/// use phasor::{ALPHA, Phasor};
///
/// let b = Phasor::new(5.0, 0.0) * *ALPHA;
/// approx::assert_abs_diff_eq!(b, Phasor::new(5.0, 120.0), epsilon = 1e-12);
/// ```
pub static ALPHA: LazyLock<Phasor> = LazyLock::new(|| Phasor::new(1.0, 120.0));

/// A complex number expressed in polar form (magnitude, angle in degrees).
///
/// The rectangular value is canonical: equality and arithmetic operate on it.
/// The polar pair is kept exactly as it was supplied, so [`Phasor::mag`],
/// [`Phasor::ang`] and [`Phasor::abs`] never pick up conversion error.
///
/// Angles are not normalized when a phasor is built from magnitude and angle.
/// A phasor built from a rectangular value (including every arithmetic result)
/// reports its principal angle in (-180°, 180°].
///
/// # Example
/// ```
/// use phasor::Phasor;
///
/// let volt = Phasor::new(67.0, 120.0);
/// assert_eq!(volt.to_string(), "67 ∠ 120°");
/// assert_eq!(format!("{volt:?}"), "Phasor(magnitude=67, angle=120)");
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "PolarParts", from = "PolarParts")
)]
pub struct Phasor {
    rect: Complex64,
    magnitude: f64,
    angle: f64,
}

impl Phasor {
    /// Build a phasor from a magnitude and an angle in degrees.
    ///
    /// Negative magnitudes are accepted and kept as given;
    /// `Phasor::new(-m, a)` equals `Phasor::new(m, a + 180.0)` numerically.
    pub fn new(magnitude: f64, angle: f64) -> Self {
        Self {
            rect: Complex64::from_polar(magnitude, angle.to_radians()),
            magnitude,
            angle,
        }
    }

    /// Build a phasor from a magnitude and an angle in radians.
    pub fn from_radians(magnitude: f64, angle: f64) -> Self {
        Self::new(magnitude, angle.to_degrees())
    }

    /// Decompose a rectangular complex value into a phasor.
    ///
    /// The magnitude is `|z|` and the angle is the principal argument of `z`
    /// in degrees, in (-180°, 180°].
    pub fn from_complex(z: Complex64) -> Self {
        let mut angle = z.arg().to_degrees();
        // atan2 yields -180 for a negative-zero imaginary part
        if angle <= -180.0 {
            angle += 360.0;
        }
        Self {
            rect: z,
            magnitude: z.norm(),
            angle,
        }
    }

    /// Build a phasor from a magnitude that may be real or complex.
    ///
    /// A real magnitude requires an angle. A complex magnitude is decomposed
    /// and must not be given an angle.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when a real magnitude has no angle,
    /// or when a complex magnitude is paired with one.
    pub fn try_new(magnitude: impl Into<Scalar>, angle: Option<f64>) -> Result<Self> {
        match (magnitude.into(), angle) {
            (Scalar::Real(m), Some(a)) => Ok(Self::new(m, a)),
            (Scalar::Complex(z), None) => Ok(Self::from_complex(z)),
            (Scalar::Real(m), None) => Err(Error::invalid(format!(
                "angle is required for real magnitude {m}"
            ))),
            (Scalar::Complex(z), Some(a)) => Err(Error::invalid(format!(
                "complex magnitude {z} already carries its angle, got extra angle {a}"
            ))),
        }
    }

    /// Magnitude (absolute value).
    pub fn mag(&self) -> f64 {
        self.magnitude
    }

    /// Angle in degrees.
    pub fn ang(&self) -> f64 {
        self.angle
    }

    /// Angle in radians.
    pub fn ang_rad(&self) -> f64 {
        self.angle.to_radians()
    }

    /// Real component, `mag·cos(ang)`.
    pub fn real(&self) -> f64 {
        self.rect.re
    }

    /// Imaginary component, `mag·sin(ang)`.
    pub fn imag(&self) -> f64 {
        self.rect.im
    }

    /// Rectangular form.
    pub fn to_complex(&self) -> Complex64 {
        self.rect
    }

    /// Absolute value; the stored magnitude, not re-derived from the
    /// rectangular form.
    pub fn abs(&self) -> f64 {
        self.magnitude
    }

    /// Complex conjugate: same magnitude, negated angle.
    pub fn conj(&self) -> Self {
        Self {
            rect: self.rect.conj(),
            magnitude: self.magnitude,
            angle: -self.angle,
        }
    }

    /// Round magnitude and angle independently to `ndigits` decimal places.
    ///
    /// Rounding acts on the polar pair, so the rectangular parts of the result
    /// are generally not the rounded rectangular parts of `self`. Ties round
    /// away from zero. Negative `ndigits` round to tens, hundreds, and so on.
    ///
    /// # Example
    /// ```
    /// use phasor::Phasor;
    ///
    /// let p = Phasor::new(10.256, 29.96).round(1);
    /// assert_eq!((p.mag(), p.ang()), (10.3, 30.0));
    /// ```
    pub fn round(&self, ndigits: i32) -> Self {
        Self::new(
            round_to(self.magnitude, ndigits),
            round_to(self.angle, ndigits),
        )
    }
}

fn round_to(value: f64, ndigits: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // 10^400 is already past f64::MAX
    let scale = 10f64.powi(ndigits.unsigned_abs().min(400) as i32);
    if ndigits >= 0 {
        let rounded = (value * scale).round() / scale;
        // value * scale overflowed; the value has no digits that fine
        if rounded.is_finite() { rounded } else { value }
    } else if scale.is_infinite() {
        0.0f64.copysign(value)
    } else {
        (value / scale).round() * scale
    }
}

impl Default for Phasor {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<Complex64> for Phasor {
    fn from(z: Complex64) -> Self {
        Self::from_complex(z)
    }
}

/// A real number as a phasor at 0° (or 180° when negative).
impl From<f64> for Phasor {
    fn from(v: f64) -> Self {
        Self::from_complex(Complex64::new(v, 0.0))
    }
}

impl From<Phasor> for Complex64 {
    fn from(p: Phasor) -> Self {
        p.rect
    }
}

impl From<(f64, f64)> for Phasor {
    fn from((magnitude, angle): (f64, f64)) -> Self {
        Self::new(magnitude, angle)
    }
}

impl From<[f64; 2]> for Phasor {
    fn from([magnitude, angle]: [f64; 2]) -> Self {
        Self::new(magnitude, angle)
    }
}

impl TryFrom<&[f64]> for Phasor {
    type Error = Error;

    fn try_from(pair: &[f64]) -> Result<Self> {
        match pair {
            [magnitude, angle] => Ok(Self::new(*magnitude, *angle)),
            [magnitude] => Err(Error::invalid(format!(
                "angle is required for real magnitude {magnitude}"
            ))),
            _ => Err(Error::invalid(format!(
                "expected a (magnitude, angle) pair, got {} values",
                pair.len()
            ))),
        }
    }
}

impl PartialEq for Phasor {
    fn eq(&self, other: &Self) -> bool {
        self.rect == other.rect
    }
}

impl PartialEq<Complex64> for Phasor {
    fn eq(&self, other: &Complex64) -> bool {
        self.rect == *other
    }
}

impl PartialEq<Phasor> for Complex64 {
    fn eq(&self, other: &Phasor) -> bool {
        *self == other.rect
    }
}

impl PartialEq<f64> for Phasor {
    fn eq(&self, other: &f64) -> bool {
        self.rect.re == *other && self.rect.im == 0.0
    }
}

impl AbsDiffEq for Phasor {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.rect.re.abs_diff_eq(&other.rect.re, epsilon)
            && self.rect.im.abs_diff_eq(&other.rect.im, epsilon)
    }
}

impl RelativeEq for Phasor {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.rect.re.relative_eq(&other.rect.re, epsilon, max_relative)
            && self.rect.im.relative_eq(&other.rect.im, epsilon, max_relative)
    }
}

impl UlpsEq for Phasor {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.rect.re.ulps_eq(&other.rect.re, epsilon, max_ulps)
            && self.rect.im.ulps_eq(&other.rect.im, epsilon, max_ulps)
    }
}

/// Serialized shape of a phasor.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PolarParts {
    magnitude: f64,
    angle: f64,
}

#[cfg(feature = "serde")]
impl From<Phasor> for PolarParts {
    fn from(p: Phasor) -> Self {
        Self {
            magnitude: p.magnitude,
            angle: p.angle,
        }
    }
}

#[cfg(feature = "serde")]
impl From<PolarParts> for Phasor {
    fn from(parts: PolarParts) -> Self {
        Self::new(parts.magnitude, parts.angle)
    }
}
