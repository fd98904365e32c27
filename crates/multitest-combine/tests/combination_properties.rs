//! Behaviour shared by the p-value combinations

use multitest_adjust::{BenjaminiHochberg, Bonferroni};
use multitest_combine::*;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn combinations() -> Vec<Box<dyn PValueCombination>> {
    vec![
        Box::new(Fisher),
        Box::new(Stouffer::new()),
        Box::new(Logit),
        Box::new(Tippett),
        Box::new(Simes),
        Box::new(Wilkinson::new(1)),
        Box::new(MinimumCombination::new(BenjaminiHochberg)),
    ]
}

fn open_unit() -> impl Strategy<Value = f64> {
    1e-6f64..(1.0 - 1e-6)
}

proptest! {
    // Property: combined p-values are probabilities
    #[test]
    fn prop_combined_in_unit_interval(pvalues in prop::collection::vec(open_unit(), 1..30)) {
        for method in combinations() {
            let p = method.combine(&pvalues).unwrap();
            prop_assert!((0.0..=1.0).contains(&p), "{} gave {}", method.name(), p);
        }
    }

    // Property: making one p-value smaller never weakens the evidence
    #[test]
    fn prop_combined_monotone_in_each_pvalue(
        pvalues in prop::collection::vec(open_unit(), 2..20),
        index in any::<prop::sample::Index>(),
        shrink in 0.0f64..1.0
    ) {
        let i = index.index(pvalues.len());
        let mut smaller = pvalues.clone();
        smaller[i] *= shrink.max(1e-3);
        for method in combinations() {
            let before = method.combine(&pvalues).unwrap();
            let after = method.combine(&smaller).unwrap();
            prop_assert!(after <= before + 1e-9, "{}: {} > {}", method.name(), after, before);
        }
    }

    // Property: identities between order-statistic combinations
    #[test]
    fn prop_order_statistic_identities(pvalues in prop::collection::vec(open_unit(), 1..30)) {
        let simes = Simes.combine(&pvalues).unwrap();
        let min_bh = MinimumCombination::new(BenjaminiHochberg).combine(&pvalues).unwrap();
        prop_assert!((simes - min_bh).abs() < 1e-12);

        let tippett = Tippett.combine(&pvalues).unwrap();
        let wilkinson = Wilkinson::new(1).combine(&pvalues).unwrap();
        prop_assert!((tippett - wilkinson).abs() < 1e-8);

        let bonferroni = MinimumCombination::new(Bonferroni).combine(&pvalues).unwrap();
        prop_assert!(tippett <= bonferroni + 1e-12);
    }
}

#[test]
fn test_combinations_are_calibrated_under_the_null() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let replicates = 2000;
    for method in combinations() {
        let rejections = (0..replicates)
            .filter(|_| {
                let p: Vec<f64> = (0..10).map(|_| rng.gen_range(1e-12..1.0)).collect();
                method.combine(&p).unwrap() < 0.05
            })
            .count();
        let rate = rejections as f64 / replicates as f64;
        assert!(
            (0.025..=0.075).contains(&rate),
            "{} rejected {:.3} of null replicates",
            method.name(),
            rate
        );
    }
}

#[test]
fn test_combinations_detect_signal() {
    let pvalues = [0.0005, 0.001, 0.004, 0.01, 0.2, 0.45, 0.6, 0.75];
    for method in combinations() {
        let p = method.combine(&pvalues).unwrap();
        assert!(p < 0.05, "{} gave {}", method.name(), p);
    }
}

#[test]
fn test_empty_input_rejected() {
    for method in combinations() {
        assert!(matches!(method.combine(&[]), Err(Error::InvalidInput(_))));
    }
}
