//! Construction of phasors from loosely shaped, array-like input.
//!
//! An array-like value is either a single `(magnitude, angle)` pair or a batch
//! of such pairs. Which one it is gets decided from the first element: a nested
//! sequence means a batch.

use num_complex::Complex64;
use tracing::{debug, trace};

use crate::{Error, Phasor, Result};

/// A single numeric value that may stand in for a phasor magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Real(f64),
    /// Rectangular value carrying its own angle.
    Complex(Complex64),
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Real(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Real(f64::from(v))
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Real(f64::from(v))
    }
}

impl From<Complex64> for Scalar {
    fn from(z: Complex64) -> Self {
        Scalar::Complex(z)
    }
}

/// Arbitrarily nested numeric input, the shape accepted by
/// [`Phasor::from_array_like`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayLike {
    Scalar(Scalar),
    Seq(Vec<ArrayLike>),
}

impl From<Scalar> for ArrayLike {
    fn from(s: Scalar) -> Self {
        ArrayLike::Scalar(s)
    }
}

impl From<f64> for ArrayLike {
    fn from(v: f64) -> Self {
        ArrayLike::Scalar(Scalar::Real(v))
    }
}

impl From<f32> for ArrayLike {
    fn from(v: f32) -> Self {
        ArrayLike::Scalar(v.into())
    }
}

impl From<i32> for ArrayLike {
    fn from(v: i32) -> Self {
        ArrayLike::Scalar(v.into())
    }
}

impl From<Complex64> for ArrayLike {
    fn from(z: Complex64) -> Self {
        ArrayLike::Scalar(Scalar::Complex(z))
    }
}

impl<T: Into<ArrayLike>> From<Vec<T>> for ArrayLike {
    fn from(items: Vec<T>) -> Self {
        ArrayLike::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ArrayLike>, const N: usize> From<[T; N]> for ArrayLike {
    fn from(items: [T; N]) -> Self {
        ArrayLike::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<&[f64]> for ArrayLike {
    fn from(items: &[f64]) -> Self {
        ArrayLike::Seq(items.iter().map(|&v| ArrayLike::from(v)).collect())
    }
}

impl From<(f64, f64)> for ArrayLike {
    fn from((magnitude, angle): (f64, f64)) -> Self {
        ArrayLike::Seq(vec![magnitude.into(), angle.into()])
    }
}

/// Result of [`Phasor::from_array_like`]: one phasor or a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum FromArrayLike {
    Single(Phasor),
    Batch(Vec<Phasor>),
}

impl FromArrayLike {
    /// The phasor, if the input was a single pair.
    pub fn single(self) -> Option<Phasor> {
        match self {
            FromArrayLike::Single(p) => Some(p),
            FromArrayLike::Batch(_) => None,
        }
    }

    /// The phasors, if the input was a batch.
    pub fn batch(self) -> Option<Vec<Phasor>> {
        match self {
            FromArrayLike::Single(_) => None,
            FromArrayLike::Batch(v) => Some(v),
        }
    }

    /// Flatten into a vector; a single phasor becomes a one-element vector.
    pub fn into_vec(self) -> Vec<Phasor> {
        match self {
            FromArrayLike::Single(p) => vec![p],
            FromArrayLike::Batch(v) => v,
        }
    }
}

impl Phasor {
    /// Build one phasor from a `(magnitude, angle)` sequence, or a batch of
    /// phasors from a sequence of such pairs.
    ///
    /// A pair holding a single complex value decomposes that value.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when the input is not a sequence, is
    /// empty, mixes pairs and scalars, nests deeper than a batch of pairs, or
    /// contains a pair of the wrong length.
    ///
    /// # Example
    /// ```
    /// use phasor::{FromArrayLike, Phasor};
    ///
    /// let one = Phasor::from_array_like([1.0, 0.0]).unwrap();
    /// assert_eq!(one, FromArrayLike::Single(Phasor::new(1.0, 0.0)));
    ///
    /// let many = Phasor::from_array_like([[1.0, 0.0], [2.0, 90.0]]).unwrap();
    /// assert_eq!(many.into_vec().len(), 2);
    /// ```
    pub fn from_array_like(input: impl Into<ArrayLike>) -> Result<FromArrayLike> {
        let items = match input.into() {
            ArrayLike::Seq(items) => items,
            ArrayLike::Scalar(s) => {
                return Err(Error::invalid(format!(
                    "expected a sequence, got scalar {s:?}"
                )));
            }
        };
        let Some(first) = items.first() else {
            return Err(Error::invalid("array-like input is empty"));
        };

        if let ArrayLike::Seq(_) = first {
            debug!(pairs = items.len(), "building phasor batch from array-like");
            let phasors = items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    ArrayLike::Seq(pair) => pair_to_phasor(pair),
                    ArrayLike::Scalar(_) => Err(Error::invalid(format!(
                        "batch element {i} is a scalar, expected a pair"
                    ))),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(FromArrayLike::Batch(phasors))
        } else {
            trace!(len = items.len(), "building single phasor from array-like");
            pair_to_phasor(&items).map(FromArrayLike::Single)
        }
    }

    /// Build a batch of phasors from typed `(magnitude, angle)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Vec<Phasor> {
        pairs.iter().copied().map(Phasor::from).collect()
    }
}

fn pair_to_phasor(pair: &[ArrayLike]) -> Result<Phasor> {
    let scalars = pair
        .iter()
        .map(|v| match v {
            ArrayLike::Scalar(s) => Ok(*s),
            ArrayLike::Seq(_) => Err(Error::invalid(
                "pair elements must be scalars, found a nested sequence",
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    match scalars.as_slice() {
        [magnitude] => Phasor::try_new(*magnitude, None),
        [magnitude, Scalar::Real(angle)] => Phasor::try_new(*magnitude, Some(*angle)),
        [_, Scalar::Complex(z)] => Err(Error::invalid(format!(
            "angle must be real, got {z}"
        ))),
        _ => Err(Error::invalid(format!(
            "expected a (magnitude, angle) pair, got {} values",
            scalars.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_pair_is_single() {
        let out = Phasor::from_array_like([1.0, 0.0]).unwrap();
        assert_eq!(out.single(), Some(Phasor::new(1.0, 0.0)));
    }

    #[test]
    fn nested_pairs_are_batch() {
        let out = Phasor::from_array_like(vec![[1.0, 0.0], [2.0, 90.0]]).unwrap();
        assert_eq!(
            out.batch(),
            Some(vec![Phasor::new(1.0, 0.0), Phasor::new(2.0, 90.0)])
        );
    }

    #[test]
    fn tuple_and_slice_input() {
        let out = Phasor::from_array_like((3.0, 45.0)).unwrap();
        assert_eq!(out.single(), Some(Phasor::new(3.0, 45.0)));

        let data = [3.0, 45.0];
        let out = Phasor::from_array_like(&data[..]).unwrap();
        assert_eq!(out.single(), Some(Phasor::new(3.0, 45.0)));
    }

    #[test]
    fn complex_singleton_pair_decomposes() {
        let z = Complex64::new(0.0, 2.0);
        let out = Phasor::from_array_like(vec![z]).unwrap();
        assert_eq!(out.single(), Some(Phasor::from_complex(z)));
    }

    #[test]
    fn single_real_without_angle_is_rejected() {
        let err = Phasor::from_array_like(vec![5.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        assert!(Phasor::from_array_like(vec![1.0, 2.0, 3.0]).is_err());
        assert!(Phasor::from_array_like(Vec::<f64>::new()).is_err());
        assert!(Phasor::from_array_like(vec![vec![1.0, 0.0], vec![2.0]]).is_err());
        assert!(Phasor::from_array_like(vec![vec![1.0, 0.0], vec![]]).is_err());
    }

    #[test]
    fn inconsistent_nesting_is_rejected() {
        let mixed = ArrayLike::Seq(vec![
            ArrayLike::from([1.0, 0.0]),
            ArrayLike::from(2.0),
        ]);
        assert!(Phasor::from_array_like(mixed).is_err());

        let mixed = ArrayLike::Seq(vec![ArrayLike::from(1.0), ArrayLike::from([2.0, 90.0])]);
        assert!(Phasor::from_array_like(mixed).is_err());

        let too_deep = ArrayLike::from([[[1.0, 0.0]]]);
        assert!(Phasor::from_array_like(too_deep).is_err());
    }

    #[test]
    fn scalar_input_is_rejected() {
        assert!(Phasor::from_array_like(1.0).is_err());
    }

    #[test]
    fn complex_angle_is_rejected() {
        let input = ArrayLike::Seq(vec![
            ArrayLike::from(1.0),
            ArrayLike::from(Complex64::new(0.0, 1.0)),
        ]);
        assert!(Phasor::from_array_like(input).is_err());
    }

    #[test]
    fn typed_pairs() {
        let out = Phasor::from_pairs(&[(1.0, 0.0), (2.0, 90.0)]);
        assert_eq!(out, vec![Phasor::new(1.0, 0.0), Phasor::new(2.0, 90.0)]);
        assert_eq!(
            Phasor::from_array_like([1.0, 0.0]).unwrap().into_vec(),
            vec![Phasor::new(1.0, 0.0)]
        );
    }
}
