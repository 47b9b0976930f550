//! Property tests for vector and matrix primitives.

use proptest::prelude::*;

use dah_core::{Context, FactorDef, FactorRegistry, Matrix, Vector};

fn ctx(n: usize) -> Context {
    let defs = (0..n).map(|i| FactorDef::new(format!("f{i}"), 1.0, 0.5));
    Context::new(FactorRegistry::new(defs).unwrap())
}

fn arb_values(n: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e6f64..1e6, n)
}

proptest! {
    #[test]
    fn identity_application_is_noop(values in arb_values(6)) {
        let ctx = ctx(6);
        let x = Vector::from_values(values);
        prop_assert_eq!(Matrix::identity(&ctx).apply(&x).unwrap(), x);
    }

    #[test]
    fn full_identity_matches_diagonal_identity(values in arb_values(4)) {
        let ctx = ctx(4);
        let rows = (0..4)
            .map(|i| {
                let mut row = ctx.zero_vector();
                row.set(i, 1.0).unwrap();
                row
            })
            .collect();
        let x = Vector::from_values(values);
        prop_assert_eq!(
            Matrix::full(rows).apply(&x).unwrap(),
            Matrix::identity(&ctx).apply(&x).unwrap()
        );
    }

    #[test]
    fn add_is_commutative(a in arb_values(5), b in arb_values(5)) {
        let (a, b) = (Vector::from_values(a), Vector::from_values(b));
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn zero_is_additive_identity(values in arb_values(5)) {
        let ctx = ctx(5);
        let x = Vector::from_values(values);
        prop_assert_eq!(x.add(&ctx.zero_vector()).unwrap(), x);
    }
}
