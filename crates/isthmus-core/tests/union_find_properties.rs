//! Property-based tests for the disjoint set.
//!
//! Random union sequences over small universes (1-40 elements) are checked
//! against a naive label-vector model and for the partition invariants.
#![allow(clippy::expect_used)]

use isthmus_core::{DisjointSet, DisjointSetError};
use proptest::prelude::*;
use std::collections::HashSet;

/// A universe size and a sequence of in-range union pairs.
fn unions() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..40).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..80)))
}

/// Reference model: every element carries a class label; union relabels.
fn model_union(labels: &mut [usize], p: usize, q: usize) -> bool {
    let (lp, lq) = (labels[p], labels[q]);
    if lp == lq {
        return false;
    }
    for l in labels.iter_mut() {
        if *l == lp {
            *l = lq;
        }
    }
    true
}

proptest! {
    #[test]
    fn matches_label_model((n, ops) in unions()) {
        let mut ds = DisjointSet::new(n);
        let mut labels: Vec<usize> = (0..n).collect();

        for (p, q) in ops {
            let merged = ds.union(p, q).expect("in range");
            prop_assert_eq!(merged, model_union(&mut labels, p, q));
        }

        for p in 0..n {
            for q in 0..n {
                prop_assert_eq!(
                    ds.connected(p, q).expect("in range"),
                    labels[p] == labels[q]
                );
            }
        }
    }

    #[test]
    fn count_equals_distinct_roots((n, ops) in unions()) {
        let mut ds = DisjointSet::new(n);
        for (p, q) in ops {
            ds.union(p, q).expect("in range");
        }
        let roots: HashSet<usize> = (0..n).map(|i| ds.find(i).expect("in range")).collect();
        prop_assert_eq!(ds.count(), roots.len());

        let total: usize = roots.iter().map(|&r| ds.set_size(r).expect("in range")).sum();
        prop_assert_eq!(total, n, "class sizes should sum to n");
    }

    #[test]
    fn count_is_monotone((n, ops) in unions()) {
        let mut ds = DisjointSet::new(n);
        let mut previous = ds.count();
        for (p, q) in ops {
            let merged = ds.union(p, q).expect("in range");
            let now = ds.count();
            if merged {
                prop_assert_eq!(now + 1, previous);
            } else {
                prop_assert_eq!(now, previous);
            }
            previous = now;
        }
    }

    #[test]
    fn connected_is_an_equivalence((n, ops) in unions(), a in 0usize..40, b in 0usize..40, c in 0usize..40) {
        let (a, b, c) = (a % n, b % n, c % n);
        let mut ds = DisjointSet::new(n);
        for (p, q) in ops {
            ds.union(p, q).expect("in range");
        }
        prop_assert!(ds.connected(a, a).expect("in range"));
        prop_assert_eq!(
            ds.connected(a, b).expect("in range"),
            ds.connected(b, a).expect("in range")
        );
        if ds.connected(a, b).expect("in range") && ds.connected(b, c).expect("in range") {
            prop_assert!(ds.connected(a, c).expect("in range"));
        }
    }

    #[test]
    fn repeated_union_is_idempotent((n, ops) in unions(), p in 0usize..40, q in 0usize..40) {
        let (p, q) = (p % n, q % n);
        let mut ds = DisjointSet::new(n);
        for (x, y) in ops {
            ds.union(x, y).expect("in range");
        }
        ds.union(p, q).expect("in range");
        let (rp, rq, count) = (
            ds.find(p).expect("in range"),
            ds.find(q).expect("in range"),
            ds.count(),
        );
        prop_assert!(!ds.union(p, q).expect("in range"));
        prop_assert_eq!(ds.find(p).expect("in range"), rp);
        prop_assert_eq!(ds.find(q).expect("in range"), rq);
        prop_assert_eq!(ds.count(), count);
    }

    #[test]
    fn out_of_range_is_rejected(n in 0usize..40, extra in 0usize..10) {
        let mut ds = DisjointSet::new(n);
        prop_assert_eq!(
            ds.find(n + extra),
            Err(DisjointSetError::OutOfRange { index: n + extra, len: n })
        );
        if n > 0 {
            prop_assert_eq!(ds.find(0), Ok(0));
            prop_assert_eq!(ds.find(n - 1), Ok(n - 1));
        }
    }
}
