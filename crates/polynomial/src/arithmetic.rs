// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Arithmetic engine.
//!
//! Every operation combines one or more polynomials left to right and allocates a fresh
//! result. Inputs are never mutated and no state is shared between calls, so the
//! functions can be called concurrently without synchronisation.

use crate::Polynomial;
use strum::{Display, EnumIter, EnumString};

/// The arithmetic operations exposed to remote callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Operation {
    Add,
    Sub,
    Mul,
}

impl Operation {
    /// Applies the operation to `polys`, combined left to right.
    pub fn apply(&self, polys: &[Polynomial]) -> Polynomial {
        match self {
            Operation::Add => add(polys),
            Operation::Sub => sub(polys),
            Operation::Mul => mul(polys),
        }
    }

    /// Infix symbol used when printing `p <op> q`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
        }
    }

    /// Lowercase name used as the route segment on the wire.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
        }
    }
}

fn max_len(polys: &[Polynomial]) -> usize {
    polys.iter().map(Polynomial::len).max().unwrap_or(0)
}

/// Sums all polynomials index-wise.
///
/// The result has as many coefficients as the longest input; missing coefficients of
/// shorter inputs count as zero.
pub fn add(polys: &[Polynomial]) -> Polynomial {
    let mut result = vec![0.0; max_len(polys)];
    for poly in polys {
        for (acc, coeff) in result.iter_mut().zip(&poly.coefficients) {
            *acc += coeff;
        }
    }

    Polynomial::new(result)
}

/// Subtracts every following polynomial from the first one.
///
/// The result has as many coefficients as the longest input. A single input is returned
/// unchanged and no input yields the empty polynomial.
pub fn sub(polys: &[Polynomial]) -> Polynomial {
    let Some((first, rest)) = polys.split_first() else {
        return Polynomial::empty();
    };

    let mut result = vec![0.0; max_len(polys)];
    result[..first.len()].copy_from_slice(&first.coefficients);
    for poly in rest {
        for (acc, coeff) in result.iter_mut().zip(&poly.coefficients) {
            *acc -= coeff;
        }
    }

    Polynomial::new(result)
}

/// Multiplies all polynomials by accumulating pairwise convolutions left to right.
///
/// If any input is identically zero (including an input without coefficients) the
/// product is the empty polynomial. Otherwise the result has
/// `1 + sum(degree(p))` coefficients. No input yields the empty polynomial.
pub fn mul(polys: &[Polynomial]) -> Polynomial {
    let Some((first, rest)) = polys.split_first() else {
        return Polynomial::empty();
    };

    if polys.iter().any(Polynomial::is_zero) {
        return Polynomial::empty();
    }

    let len = 1 + polys.iter().map(Polynomial::degree).sum::<usize>();
    let mut running = vec![0.0; len];
    running[..first.len()].copy_from_slice(&first.coefficients);

    // Only running[0..=degree] can be nonzero at each step.
    let mut degree = first.degree();
    for poly in rest {
        let mut product = vec![0.0; len];
        for (i, &c) in running[..=degree].iter().enumerate() {
            for (j, &d) in poly.coefficients.iter().enumerate() {
                product[i + j] += c * d;
            }
        }

        running = product;
        degree += poly.degree();
    }

    Polynomial::new(running)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn poly(coefficients: &[f64]) -> Polynomial {
        Polynomial::new(coefficients.to_vec())
    }

    #[test]
    fn test_add_differing_lengths() {
        let result = add(&[poly(&[1.0, 2.0]), poly(&[1.0, 2.0, 3.0])]);
        assert_eq!(result.coefficients(), &[2.0, 4.0, 3.0]);
    }

    #[test]
    fn test_add_degenerate_tuples() {
        assert!(add(&[]).is_empty());
        assert_eq!(add(&[poly(&[1.0, -1.0])]), poly(&[1.0, -1.0]));
        assert_eq!(add(&[Polynomial::empty(), poly(&[2.0])]), poly(&[2.0]));
    }

    #[test]
    fn test_sub_three_operands() {
        // 5-1-1 = 3, 5-0-1 = 4, 5-0-0 = 5
        let result = sub(&[poly(&[5.0, 5.0, 5.0]), poly(&[1.0]), poly(&[1.0, 1.0])]);
        assert_eq!(result.coefficients(), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sub_pads_to_longest_operand() {
        let result = sub(&[poly(&[1.0]), poly(&[0.0, 0.0, 2.0])]);
        assert_eq!(result.coefficients(), &[1.0, 0.0, -2.0]);
    }

    #[test]
    fn test_sub_degenerate_tuples() {
        assert!(sub(&[]).is_empty());
        assert_eq!(sub(&[poly(&[4.0, 3.0])]), poly(&[4.0, 3.0]));
        assert!(sub(&[Polynomial::empty()]).is_empty());
    }

    #[test]
    fn test_mul_two_operands() {
        // (x + 2)(x + 3) = x^2 + 5x + 6
        let result = mul(&[poly(&[2.0, 1.0]), poly(&[3.0, 1.0])]);
        assert_eq!(result.coefficients(), &[6.0, 5.0, 1.0]);
    }

    #[test]
    fn test_mul_three_operands() {
        // (x + 1)(x - 1)(2x) = 2x^3 - 2x
        let result = mul(&[poly(&[1.0, 1.0]), poly(&[-1.0, 1.0]), poly(&[0.0, 2.0])]);
        assert_eq!(result.coefficients(), &[0.0, -2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_mul_by_zero_is_empty() {
        assert!(mul(&[poly(&[0.0, 0.0]), poly(&[1.0, 1.0])]).is_empty());
        assert!(mul(&[poly(&[1.0, 1.0]), Polynomial::empty()]).is_empty());
        assert!(mul(&[poly(&[1.0]), poly(&[2.0]), poly(&[0.0])]).is_empty());
    }

    #[test]
    fn test_mul_keeps_over_length_degree() {
        // (1 + 0x^2) * (1 + x) is stored with degree 3
        let result = mul(&[poly(&[1.0, 0.0, 0.0]), poly(&[1.0, 1.0])]);
        assert_eq!(result.coefficients(), &[1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_mul_degenerate_tuples() {
        assert!(mul(&[]).is_empty());
        assert_eq!(mul(&[poly(&[3.0, 0.5])]), poly(&[3.0, 0.5]));
        assert!(mul(&[Polynomial::empty()]).is_empty());
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let inputs = vec![poly(&[1.0, 2.0]), poly(&[3.0])];
        let before = inputs.clone();
        for op in Operation::iter() {
            op.apply(&inputs);
        }
        assert_eq!(inputs, before);
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::Add.to_string(), "Add");
        assert_eq!(Operation::from_str("mul").unwrap(), Operation::Mul);
        assert_eq!(Operation::Sub.symbol(), "-");
        assert_eq!(Operation::Mul.path(), "mul");
        assert_eq!(Operation::iter().count(), 3);
    }

    fn arb_polynomial() -> impl Strategy<Value = Polynomial> {
        prop::collection::vec(-20i32..20, 0..6)
            .prop_map(|cs| Polynomial::new(cs.into_iter().map(f64::from).collect()))
    }

    fn arb_nonzero_polynomial() -> impl Strategy<Value = Polynomial> {
        arb_polynomial().prop_filter("nonzero", |p| !p.is_zero())
    }

    proptest! {
        #[test]
        fn add_commutative(p in arb_polynomial(), q in arb_polynomial()) {
            prop_assert_eq!(add(&[p.clone(), q.clone()]), add(&[q, p]));
        }

        #[test]
        fn add_associative(p in arb_polynomial(), q in arb_polynomial(), r in arb_polynomial()) {
            let left = add(&[add(&[p.clone(), q.clone()]), r.clone()]);
            let right = add(&[p.clone(), add(&[q.clone(), r.clone()])]);
            prop_assert_eq!(&left, &right);
            prop_assert_eq!(left, add(&[p, q, r]));
        }

        #[test]
        fn sub_single_is_identity(p in arb_polynomial()) {
            prop_assert_eq!(sub(&[p.clone()]), p);
        }

        #[test]
        fn sub_self_is_zero(p in arb_polynomial()) {
            let result = sub(&[p.clone(), p.clone()]);
            prop_assert_eq!(result, Polynomial::zero(p.len()));
        }

        #[test]
        fn mul_degree_is_sum_of_degrees(p in arb_nonzero_polynomial(), q in arb_nonzero_polynomial()) {
            let result = mul(&[p.clone(), q.clone()]);
            prop_assert_eq!(result.degree(), p.degree() + q.degree());
        }

        #[test]
        fn mul_by_zero_annihilates(p in arb_polynomial(), zeros in 0usize..4) {
            prop_assert!(mul(&[p.clone(), Polynomial::zero(zeros)]).is_empty());
            prop_assert!(mul(&[Polynomial::zero(zeros), p]).is_empty());
        }

        #[test]
        fn mul_associative(
            p in arb_nonzero_polynomial(),
            q in arb_nonzero_polynomial(),
            r in arb_nonzero_polynomial(),
        ) {
            let left = mul(&[mul(&[p.clone(), q.clone()]), r.clone()]);
            let right = mul(&[p.clone(), mul(&[q.clone(), r.clone()])]);
            prop_assert_eq!(&left, &right);
            prop_assert_eq!(left, mul(&[p, q, r]));
        }

        #[test]
        fn mul_agrees_with_evaluation(p in arb_polynomial(), q in arb_polynomial(), x in -3i32..3) {
            let x = f64::from(x);
            let product = mul(&[p.clone(), q.clone()]);
            prop_assert_eq!(product.evaluate(x), p.evaluate(x) * q.evaluate(x));
        }
    }
}
