// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Text codec for polynomials.
//!
//! Decoding reads one line of whitespace separated coefficients, highest degree first
//! (`"1 0 -2"` is `x^2 - 2`). Encoding (`Display`) produces conventional algebraic
//! notation containing only the nonzero terms.

use crate::errors::PolynomialError;
use crate::polynomial::Polynomial;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

/// Magnitudes below this are rendered in scientific notation.
const SCIENTIFIC_BELOW: f64 = 1e-4;
/// Magnitudes at or above this (decimal exponent 6) are rendered in scientific notation.
const SCIENTIFIC_FROM: f64 = 1e6;

/// Writes a coefficient using the shortest representation that parses back to the same
/// value. No trailing zeros or decimal point are forced.
fn write_coefficient(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let magnitude = value.abs();
    if magnitude.is_finite()
        && magnitude != 0.0
        && !(SCIENTIFIC_BELOW..SCIENTIFIC_FROM).contains(&magnitude)
    {
        write!(f, "{value:e}")
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (power, &coeff) in self.coefficients.iter().enumerate().rev() {
            if coeff == 0.0 {
                continue;
            }

            let unit = coeff == 1.0 || coeff == -1.0;
            if first {
                if power == 0 || !unit {
                    write_coefficient(f, coeff)?;
                } else if coeff == -1.0 {
                    write!(f, "-")?;
                }
            } else {
                if coeff > 0.0 {
                    write!(f, " + ")?;
                } else {
                    write!(f, " - ")?;
                }

                if power == 0 || !unit {
                    write_coefficient(f, coeff.abs())?;
                }
            }
            first = false;

            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{power}")?,
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl FromStr for Polynomial {
    type Err = PolynomialError;

    /// Decodes a line of coefficients given highest degree first.
    ///
    /// A blank line is rejected as a single empty, unparseable token. Tokens that do not
    /// denote a finite number (`nan`, `inf`, or out of range such as `1e400`) are rejected
    /// as well, since they cannot be carried to the server.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(PolynomialError::BadCoefficient(String::new()));
        }

        let descending = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .ok()
                    .filter(|c| c.is_finite())
                    .ok_or_else(|| PolynomialError::BadCoefficient(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Polynomial::from_descending_coefficients(descending))
    }
}

impl Polynomial {
    /// Renders the polynomial in the decoder's line format: every stored coefficient,
    /// highest degree first, separated by single spaces.
    pub fn to_coefficient_line(&self) -> String {
        self.to_descending_coefficients()
            .iter()
            .map(|c| format!("{c}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Reads one line from `reader` and decodes it as a polynomial.
///
/// # Errors
///
/// Returns `PolynomialError::EndOfInput` when the reader is exhausted before a full line
/// is read (a trailing fragment without `\n` counts as exhausted),
/// `PolynomialError::Io` on read failure and `PolynomialError::BadCoefficient` for the
/// first token that is not a finite number.
pub fn read_polynomial<R: BufRead>(reader: &mut R) -> Result<Polynomial, PolynomialError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 || !line.ends_with('\n') {
        return Err(PolynomialError::EndOfInput);
    }

    line.parse()
}
