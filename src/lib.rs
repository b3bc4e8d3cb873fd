//! Polar-form complex numbers for electrical engineering.
//!
//! A [`Phasor`] represents a sinusoidal quantity (AC voltage, current,
//! impedance) by its magnitude and its angle in degrees. It converts to and
//! from rectangular [`Complex64`](num_complex::Complex64) values, multiplies
//! and divides through the rectangular form, and prints as `67 ∠ 120°`.
//!
//! # Quick Start
//!
//! ```rust
//! use phasor::{ALPHA, Phasor};
//!
//! // 67 volts at 120 degrees
//! let v = Phasor::new(67.0, 120.0);
//! assert_eq!(v.to_string(), "67 ∠ 120°");
//!
//! // Ohm's law with a complex impedance
//! let z = Phasor::new(10.0, 30.0);
//! let i = v.checked_div(z).unwrap();
//! approx::assert_abs_diff_eq!(i.mag(), 6.7, epsilon = 1e-12);
//! approx::assert_abs_diff_eq!(i.ang(), 90.0, epsilon = 1e-12);
//!
//! // Rotate by one phase of a three-phase system
//! let b = Phasor::new(5.0, 0.0) * *ALPHA;
//! approx::assert_abs_diff_eq!(b, Phasor::new(5.0, 120.0), epsilon = 1e-12);
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`phasor`] | The [`Phasor`] type, constructors, accessors, rounding, [`ALPHA`] |
//! | [`ops`] | Arithmetic operators and [`Phasor::checked_div`] |
//! | [`ordering`] | Magnitude-only ordering and [`ByMagnitude`] |
//! | [`array_like`] | Construction from pairs and batches of pairs |
//! | [`display`] | `∠` / `/_` rendering and [`DisplayConfig`] |
//!
//! # Equality and ordering
//!
//! Two phasors are equal when their rectangular values are equal, so
//! `Phasor::new(1.0, 0.0)` and `Phasor::new(1.0, 360.0)` are equal up to
//! rounding. Ordering looks at magnitude only and is available through
//! [`Phasor::mag_lt`] and friends. Tolerant comparison goes through the
//! [`approx`] traits.
//!
//! # Error Handling
//!
//! Fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. The [`Error`] enum covers malformed
//! constructor input and division by a zero-magnitude phasor.
//!
//! # Feature Flags
//!
//! | Flag | Description |
//! |------|-------------|
//! | `serde` | Serialize a phasor as `{ "magnitude": .., "angle": .. }` |

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod array_like;
pub mod display;
pub mod ops;
pub mod ordering;
pub mod phasor;

pub use array_like::{ArrayLike, FromArrayLike, Scalar};
pub use display::{AngleGlyph, DisplayConfig, PhasorDisplay};
pub use ordering::{ByMagnitude, Magnitude};
pub use phasor::{ALPHA, Phasor};
