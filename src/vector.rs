use crate::error::{Result, ThurberError};
use std::cmp::Ordering;
use std::fmt;

/// A vector in the integer lattice: a fixed-dimension sequence of signed
/// 64-bit components. Cheap to clone at the small dimensions this search
/// explores.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    data: Vec<i64>,
}

/// Result of the three-valued componentwise comparison.
///
/// This is a short-circuit lexicographic walk, not a true dominance test:
/// it returns `Less`/`Greater` at the first differing component and never
/// looks further. On the hot path this is only ever used as `c <= x` where
/// `x` dominates `c` by construction, so only the less/equivalent-vs-not
/// distinction is actually observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentOrdering {
    Less,
    Equivalent,
    Greater,
    Incomparable,
}

impl Vector {
    pub fn new(dimension: usize) -> Self {
        Vector {
            data: vec![0; dimension],
        }
    }

    pub fn from_data(data: Vec<i64>) -> Self {
        Vector { data }
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn get(&self, i: usize) -> i64 {
        self.data[i]
    }

    pub fn set(&mut self, i: usize, value: i64) {
        self.data[i] = value;
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Arithmetic sum of components, saturating rather than wrapping on overflow.
    pub fn sum(&self) -> i64 {
        self.data.iter().fold(0i64, |acc, &x| acc.saturating_add(x))
    }

    /// Componentwise addition. Fails if the operands have differing dimension.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        if self.dimension() != other.dimension() {
            return Err(ThurberError::DimensionMismatch {
                lhs: self.dimension(),
                rhs: other.dimension(),
            });
        }
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.saturating_add(*b))
                .collect(),
        })
    }

    /// Three-valued componentwise comparison (see [`ComponentOrdering`]).
    pub fn compare_componentwise(&self, other: &Vector) -> ComponentOrdering {
        if self.dimension() != other.dimension() {
            return ComponentOrdering::Incomparable;
        }
        for i in 0..self.dimension() {
            if self.data[i] < other.data[i] {
                return ComponentOrdering::Less;
            }
            if self.data[i] > other.data[i] {
                return ComponentOrdering::Greater;
            }
        }
        ComponentOrdering::Equivalent
    }

    /// True iff `self <= other` componentwise, under the walk above.
    pub fn dominated_by_or_equal(&self, other: &Vector) -> bool {
        matches!(
            self.compare_componentwise(other),
            ComponentOrdering::Less | ComponentOrdering::Equivalent
        )
    }

    /// True iff `self` is strictly dominated by `other`: same dimension,
    /// `self != other`, and `self[i] <= other[i]` for every `i`.
    pub fn is_below(&self, other: &Vector) -> bool {
        if self == other || self.dimension() != other.dimension() {
            return false;
        }
        self.data.iter().zip(&other.data).all(|(a, b)| a <= b)
    }

    /// True iff every component is non-negative and the components sum to 1.
    pub fn is_basic(&self) -> bool {
        let mut s: i64 = 0;
        for &x in &self.data {
            if x < 0 {
                return false;
            }
            s = s.saturating_add(x);
        }
        s == 1
    }

    /// The `n` unit basis vectors of this vector's dimension, in index order.
    pub fn basic(&self) -> Vec<Vector> {
        Vector::basis(self.dimension())
    }

    /// The `n` unit basis vectors `e_0, ..., e_{n-1}`.
    pub fn basis(n: usize) -> Vec<Vector> {
        (0..n)
            .map(|i| {
                let mut v = Vector::new(n);
                v.set(i, 1);
                v
            })
            .collect()
    }
}

impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total order by (sum ascending, lexicographic ascending) — the `ord`
/// canonicalization used to sort and deduplicate segments.
impl Ord for Vector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sum()
            .cmp(&other.sum())
            .then_with(|| self.data.cmp(&other.data))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

impl From<i64> for Vector {
    fn from(n: i64) -> Self {
        Vector { data: vec![n] }
    }
}

/// `ord(v, w)`: strict total order by (sum, lex), exposed as a free function
/// in addition to the `Ord` impl.
pub fn ord(v: &Vector, w: &Vector) -> bool {
    v < w
}
