// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Single-variable polynomials with real (`f64`) coefficients, as exchanged by the
//! polyrpc server and its interactive client.
//!
//! ## Features
//!
//! - Dense coefficient storage, lowest degree first (`coefficients[i]` multiplies `x^i`).
//! - Text codec: whitespace separated coefficient lines (highest degree first) in,
//!   conventional algebraic notation (`x^2 - 2`) out.
//! - Arithmetic engine: addition, subtraction and multiplication over a tuple of one or
//!   more polynomials of differing lengths.
//! - Serialization: optional serde support for the wire representation.

pub mod arithmetic;
pub mod codec;
pub mod errors;
pub mod polynomial;
pub mod tuple;

pub use arithmetic::{add, mul, sub, Operation};
pub use codec::read_polynomial;
pub use errors::PolynomialError;
pub use polynomial::Polynomial;
pub use tuple::PolynomialTuple;
