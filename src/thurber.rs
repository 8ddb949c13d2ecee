//! The depth-first, iteratively-deepening search driver and its integer
//! front end.

use crate::error::{Result, ThurberError};
use crate::oracles::{bounds, lowerbound_vector, retain};
use crate::stack::{stackchildren, Stack};
use crate::vector::Vector;

/// Anything `thurber` can search for: a positive integer (dimension-1
/// target) or an explicit vector target.
pub trait IntoTarget {
    fn into_target(self) -> Vector;
}

impl IntoTarget for Vector {
    fn into_target(self) -> Vector {
        self
    }
}

impl IntoTarget for i64 {
    fn into_target(self) -> Vector {
        Vector::from(self)
    }
}

/// Shortest addition-chain length for `x` (a positive integer or a vector
/// target in the integer lattice).
///
/// Fails with [`ThurberError::OutOfSpace`] if `x` sums to zero.
pub fn thurber<T: IntoTarget>(x: T) -> Result<i64> {
    thurber_vector(&x.into_target())
}

fn thurber_vector(x: &Vector) -> Result<i64> {
    if x.sum() == 0 {
        return Err(ThurberError::OutOfSpace);
    }
    if x.is_basic() {
        return Ok(0);
    }

    let n = x.dimension();
    let mut stack = Stack::with_basis(Vector::basis(n));
    let mut lb = lowerbound_vector(x);

    loop {
        eprintln!("[thurber] exploring depth budget lb={lb}");
        if stack.len() == n {
            stackchildren(x, &mut stack);
        }
        let (vertical, slant) = bounds(x.sum(), lb + 1);

        loop {
            let i = stack.len() as i64;
            let depth = i - n as i64;

            if depth <= lb {
                let a = stack.top().tail().clone();
                let aprev = stack.get((i - 2) as usize).tail().clone();

                if a == *x {
                    return Ok(depth);
                } else if retain(
                    x.sum(),
                    lb,
                    vertical[(depth - 1) as usize],
                    slant[depth as usize],
                    depth - 1,
                    aprev.sum(),
                    a.sum(),
                ) {
                    stackchildren(x, &mut stack);
                    if stack.top().is_empty() {
                        eprintln!("[thurber] dead end at depth {depth}, backing up");
                        if !crate::oracles::backup(&mut stack, n) {
                            break;
                        }
                    }
                } else if !crate::oracles::backup(&mut stack, n) {
                    break;
                }
            } else {
                stack.pop();
                if stack.len() == n || !crate::oracles::backup(&mut stack, n) {
                    break;
                }
            }
        }

        lb += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_50: [i64; 50] = [
        0, 1, 2, 2, 3, 3, 4, 3, 4, 4, 5, 4, 5, 5, 5, 4, 5, 5, 6, 5, 6, 6, 6, 5, 6, 6, 6, 6, 7, 6,
        7, 5, 6, 6, 7, 6, 7, 7, 7, 6, 7, 7, 7, 7, 7, 7, 8, 6, 7, 7,
    ];

    #[test]
    fn matches_a003313_first_50() {
        for (idx, &expected) in FIRST_50.iter().enumerate() {
            let n = (idx + 1) as i64;
            assert_eq!(thurber(n).unwrap(), expected, "n = {n}");
        }
    }

    #[test]
    fn innovation_witnesses() {
        let witnesses: [i64; 18] = [
            1, 2, 3, 5, 7, 11, 19, 29, 47, 71, 127, 191, 379, 607, 1087, 1903, 3583, 6271,
        ];
        for (k, &a_k) in witnesses.iter().enumerate() {
            assert_eq!(thurber(a_k).unwrap(), k as i64, "a_{k} = {a_k}");
        }
    }

    #[test]
    fn basis_vectors_have_length_zero() {
        assert_eq!(thurber(Vector::from_data(vec![1, 0, 0])).unwrap(), 0);
        for e in Vector::basis(4) {
            assert_eq!(thurber(e).unwrap(), 0);
        }
    }

    #[test]
    fn vector_target_matches_scalar_equivalent() {
        assert_eq!(
            thurber(Vector::from_data(vec![2, 0])).unwrap(),
            thurber(2i64).unwrap()
        );
    }

    #[test]
    fn one_addition_for_sum_of_two_basis_elements() {
        assert_eq!(thurber(Vector::from_data(vec![1, 1])).unwrap(), 1);
    }

    #[test]
    fn zero_sum_is_out_of_space() {
        let err = thurber(Vector::from_data(vec![0, 0])).unwrap_err();
        assert_eq!(err, ThurberError::OutOfSpace);
    }

    #[test]
    fn doubling_adds_at_most_one_step() {
        for n in 1..60 {
            let len_n = thurber(n).unwrap();
            let len_2n = thurber(2 * n).unwrap();
            assert!(len_2n <= len_n + 1, "n={n}: len(n)={len_n} len(2n)={len_2n}");
        }
    }

    #[test]
    fn length_respects_log2_lower_bound() {
        for n in 1..60i64 {
            let len = thurber(n).unwrap();
            let mut bound = 0i64;
            while (1i64 << bound) < n {
                bound += 1;
            }
            assert!(len >= bound, "n={n}: len={len} bound={bound}");
        }
    }

    #[test]
    fn symmetric_under_permutation() {
        let v = Vector::from_data(vec![3, 1, 2]);
        let permuted = Vector::from_data(vec![1, 2, 3]);
        assert_eq!(thurber(v).unwrap(), thurber(permuted).unwrap());
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_doubling_adds_at_most_one_step(n in 1i64..30) {
            let len_n = thurber(n).unwrap();
            let len_2n = thurber(2 * n).unwrap();
            prop_assert!(len_2n <= len_n + 1);
        }

        #[test]
        fn prop_symmetric_under_permutation(mut data in proptest::collection::vec(0i64..10, 2..=5)) {
            let sum: i64 = data.iter().sum();
            prop_assume!(sum > 0 && sum <= 30);
            let original = thurber(Vector::from_data(data.clone())).unwrap();
            data.reverse();
            let reversed = thurber(Vector::from_data(data)).unwrap();
            prop_assert_eq!(original, reversed);
        }

        #[test]
        fn prop_length_respects_log2_lower_bound(n in 1i64..200) {
            let len = thurber(n).unwrap();
            let mut bound = 0i64;
            while (1i64 << bound) < n {
                bound += 1;
            }
            prop_assert!(len >= bound);
        }
    }
}
