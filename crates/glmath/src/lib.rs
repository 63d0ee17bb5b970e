//! Vector, matrix and quaternion math for real-time 3D graphics.
//!
//! # Overview
//!
//! - [`Matrix`] is a column-major `R`x`C` matrix. 4x4 matrices ([`Mat4`]) double as affine
//!   transforms: they can be composed from and decomposed into translation, rotation and scale,
//!   and there are constructors for view ([`Matrix::look_at`], [`Matrix::target_to`]) and
//!   projection ([`Matrix::perspective`], [`Matrix::frustum`], [`Matrix::ortho`]) matrices.
//! - [`Quat`] represents rotations and supports slerp, powers, Euler angles and conversion from
//!   and to rotation matrices.
//! - [`Mat2`] covers 2D rotation and scaling, and factors into [`Matrix::ldu`] form.
//! - [`Vector`] is an `N`-element column vector, mostly used as the input and output of the above.
//!
//! # Conventions
//!
//! - Matrices are stored column-major, so the 16 elements of a [`Mat4`] can be handed to OpenGL
//!   or WebGPU as-is (see [`Matrix::as_slice`] and the [`bytemuck`] impls). Element `(row, col)` is
//!   at index `col * R + row` of that slice.
//! - Vectors are column vectors: matrices multiply them from the left (`mat * vec`), and
//!   `a * b` transforms by `b` first, then by `a`. The same holds for quaternions.
//! - View and projection matrices assume a right-handed eye space looking down -Z, and a clip space
//!   depth range of `[-1, 1]`.
//! - Angles are in radians, except where a [`Degrees`] wrapper is taken.
//! - All types are [`Copy`] values. Operations never modify their inputs, so `a = a * b` is always
//!   fine.
//!
//! # Numerical Edge Cases
//!
//! Singular matrices have no inverse: [`Matrix::invert`] returns [`None`] if the determinant is
//! exactly zero. Other degenerate inputs (coincident points, parallel vectors, zero-length
//! quaternions) fall back to a well-defined result that is documented on each method, and are
//! reported via [`log::trace!`].
//!
//! The library-wide tolerance is [`Float::TOLERANCE`]. The [`approx`] module and the
//! `approx_equals` methods compare values with it.

pub mod approx;
mod angle;
mod matrix;
mod quat;
mod traits;
mod vector;

pub use angle::*;
pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
