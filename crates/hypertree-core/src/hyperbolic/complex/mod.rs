//! Complex numbers in the Poincare disk.
//!
//! # Poincare Disk Model
//!
//! The hyperbolic plane is represented as the open unit disk of the complex
//! plane. Node positions, translation parameters and rotations are all
//! complex values; the disk invariant `|z| < 1` holds for positions and
//! translations, `|z| == 1` for rotations and orientation vectors.
//!
//! `Complex` is `num_complex::Complex64`, a `Copy` value type with pure
//! operators. Every update is an explicit rebinding at the call site, so no
//! scratch buffer is ever shared between unrelated computations.
//!
//! # Module Structure
//!
//! - [`ops`]: `ComplexExt` extension trait and disk validation

mod ops;


pub use num_complex::Complex64 as Complex;
pub use ops::{checked_disk_point, ComplexExt};

/// The origin of the disk (center of the hyperbolic plane).
pub const ORIGIN: Complex = Complex::new(0.0, 0.0);

/// Zero, also used as the "no fixed orientation" (radial) marker.
pub const ZERO: Complex = ORIGIN;

/// Multiplicative identity; the null rotation.
pub const ONE: Complex = Complex::new(1.0, 0.0);

/// Unit vector pointing east (+re).
pub const EAST: Complex = Complex::new(1.0, 0.0);

/// Unit vector pointing north (+im).
pub const NORTH: Complex = Complex::new(0.0, 1.0);

/// Unit vector pointing west (-re).
pub const WEST: Complex = Complex::new(-1.0, 0.0);

/// Unit vector pointing south (-im).
pub const SOUTH: Complex = Complex::new(0.0, -1.0);
