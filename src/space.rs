//! The trivial enumeration utility used to drive batch searches.

use crate::vector::Vector;

/// Every `n`-vector with components in `[0, max]`, in lexicographic
/// (little-endian: index 0 fastest) order, starting at `[1, 0, ..., 0]` and
/// ending at `[max, max, ..., max]`. The all-zero vector is excluded.
///
/// Not on the hot path: this is a convenience for batch-driving [`crate::thurber`]
/// over a whole region of the lattice, not something the search itself calls.
pub fn vectorspace(n: usize, max: i64) -> Vec<Vector> {
    assert!(n > 0, "vectorspace dimension must be positive");
    if max <= 0 {
        return Vec::new();
    }

    let mut space = Vec::new();
    let mut x = Vector::new(n);
    x.set(0, 1);
    space.push(x.clone());

    loop {
        let mut i = 0;
        while i < n && x.get(i) == max {
            x.set(i, 0);
            i += 1;
        }
        if i == n {
            break;
        }
        x.set(i, x.get(i) + 1);
        space.push(x.clone());
    }

    space
}
