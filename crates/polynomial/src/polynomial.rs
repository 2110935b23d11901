//! Polynomial value type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial represented by its coefficients in ascending order of degree.
///
/// `coefficients[i]` is the multiplier of `x^i`, so index 0 holds the constant term.
/// The polynomial is represented as:
/// `a_0 + a_1 * x + ... + a_{n-1} * x^{n-1} + a_n * x^n`
///
/// Trailing (high order) zero coefficients are allowed and preserved. A polynomial with
/// no coefficients at all is a valid value and behaves as zero.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    /// Coefficients in ascending order (constant term first).
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a new polynomial from a vector of coefficients.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Vector of coefficients in ascending order of degree.
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Creates a polynomial from coefficients in descending order format.
    ///
    /// This is the order used by the text format (leading coefficient first), so the
    /// vector is reversed into this library's ordering (constant term first).
    ///
    /// # Arguments
    ///
    /// * `descending_coefficients` - Vector of coefficients, highest degree first.
    pub fn from_descending_coefficients(descending_coefficients: Vec<f64>) -> Self {
        let mut coefficients = descending_coefficients;
        coefficients.reverse();
        Self { coefficients }
    }

    /// Converts the polynomial to descending order coefficient format.
    pub fn to_descending_coefficients(&self) -> Vec<f64> {
        let mut coefficients = self.coefficients.clone();
        coefficients.reverse();
        coefficients
    }

    /// Creates a polynomial with `len` zero coefficients.
    pub fn zero(len: usize) -> Self {
        Self {
            coefficients: vec![0.0; len],
        }
    }

    /// Creates the polynomial with no terms defined.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a constant polynomial.
    pub fn constant(constant: f64) -> Self {
        Self {
            coefficients: vec![constant],
        }
    }

    /// Returns the coefficients of the polynomial, constant term first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of stored coefficients.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns true when no coefficient is stored.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Returns the storage degree of the polynomial.
    ///
    /// This is `len - 1`, counting high order zero coefficients. The degree of a
    /// polynomial without coefficients is 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Checks if every coefficient is zero. Vacuously true for an empty polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| *c == 0.0)
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, coeff| acc * x + coeff)
    }

    /// Adds two polynomials together.
    pub fn add(&self, other: &Self) -> Self {
        crate::arithmetic::add(&[self.clone(), other.clone()])
    }

    /// Subtracts `other` from `self`.
    pub fn sub(&self, other: &Self) -> Self {
        crate::arithmetic::sub(&[self.clone(), other.clone()])
    }

    /// Multiplies two polynomials.
    pub fn mul(&self, other: &Self) -> Self {
        crate::arithmetic::mul(&[self.clone(), other.clone()])
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients)
    }
}
