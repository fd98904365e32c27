//! Reference results of every procedure through the facade

mod common;

use common::*;
use multitest::*;

#[test]
fn test_fwer_adjustments() {
    let p = ADJUST_SAMPLE;

    assert_all_close(&adjust(&p, Bonferroni::new()).unwrap(), &[0.004, 0.04, 0.12, 1.0], 1e-12);
    assert_all_close(
        &adjust_n(&p, 6, Bonferroni::new()).unwrap(),
        &[0.006, 0.06, 0.18, 1.0],
        1e-12,
    );

    let expected = [0.004, 0.03, 0.06, 0.5];
    let expected_n6 = [0.006, 0.05, 0.12, 1.0];
    assert_all_close(&adjust(&p, Holm::new()).unwrap(), &expected, 1e-12);
    assert_all_close(&adjust(&p, Hochberg::new()).unwrap(), &expected, 1e-12);
    assert_all_close(&adjust(&p, Hommel::new()).unwrap(), &expected, 1e-12);
    assert_all_close(&adjust_n(&p, 6, Holm::new()).unwrap(), &expected_n6, 1e-12);
    assert_all_close(&adjust_n(&p, 6, Hochberg::new()).unwrap(), &expected_n6, 1e-12);
    assert_all_close(&adjust_n(&p, 6, Hommel::new()).unwrap(), &expected_n6, 1e-12);

    assert_all_close(
        &adjust(&p, Sidak::new()).unwrap(),
        &[0.003994, 0.039404, 0.114707, 0.9375],
        1e-6,
    );
    assert_all_close(
        &adjust_n(&p, 6, Sidak::new()).unwrap(),
        &[0.00598502, 0.0585199, 0.167028, 0.984375],
        1e-6,
    );
}

#[test]
fn test_fdr_adjustments() {
    let p = ADJUST_SAMPLE;

    assert_all_close(
        &adjust(&p, BenjaminiHochberg::new()).unwrap(),
        &[0.004, 0.02, 0.04, 0.5],
        1e-12,
    );
    assert_all_close(
        &adjust_n(&p, 6, BenjaminiHochberg::new()).unwrap(),
        &[0.006, 0.03, 0.06, 0.75],
        1e-12,
    );
    assert_all_close(
        &adjust(&p, BenjaminiHochbergAdaptive::new(Oracle::new(0.5))).unwrap(),
        &[0.002, 0.01, 0.02, 0.25],
        1e-12,
    );
    assert_all_close(
        &adjust(&p, BenjaminiHochbergAdaptive::with_pi0(0.9)).unwrap(),
        &[0.0036, 0.018, 0.036, 0.45],
        1e-12,
    );

    assert_all_close(
        &adjust(&p, BenjaminiYekutieli::new()).unwrap(),
        &[0.00833333, 0.0416667, 0.0833333, 1.0],
        1e-6,
    );
    assert_all_close(
        &adjust_n(&p, 6, BenjaminiYekutieli::new()).unwrap(),
        &[0.0147, 0.0735, 0.147, 1.0],
        1e-9,
    );

    assert_all_close(
        &adjust(&p, BenjaminiLiu::new()).unwrap(),
        &[0.003994, 0.0222757, 0.02955, 0.125],
        1e-6,
    );
    assert_all_close(
        &adjust_n(&p, 6, BenjaminiLiu::new()).unwrap(),
        &[0.00598502, 0.0408416, 0.0764715, 0.4375],
        1e-6,
    );

    let forward_stop = [
        0.0010005003335835344,
        0.005525418093542492,
        0.013836681223931188,
        0.1836643060579347,
    ];
    assert_all_close(&adjust(&p, ForwardStop::new()).unwrap(), &forward_stop, 1e-12);
    assert_all_close(&adjust_n(&p, 6, ForwardStop::new()).unwrap(), &forward_stop, 1e-12);

    assert_all_close(
        &adjust(&p, BarberCandes::new()).unwrap(),
        &[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0],
        1e-12,
    );
}

#[test]
fn test_pi0_estimators() {
    let p = PI0_SAMPLE;

    assert_relative_eq!(estimate_pi0(&p, Storey::new()).unwrap(), 0.2 / 0.9, max_relative = 1e-12);
    assert_relative_eq!(
        estimate_pi0(&p, Storey::new().with_lambda(0.4)).unwrap(),
        1.0 / 3.0,
        max_relative = 1e-12
    );
    assert_eq!(estimate_pi0(&p, StoreyBootstrap::new()).unwrap(), 0.0);
    assert_eq!(estimate_pi0(&p, LeastSlope::new()).unwrap(), 1.0);
    assert_relative_eq!(estimate_pi0(&p, TwoStep::new()).unwrap(), 0.2, max_relative = 1e-12);
    let known = TwoStep::new().with_adjustment(BenjaminiHochbergAdaptive::with_pi0(0.9));
    assert_relative_eq!(estimate_pi0(&p, known).unwrap(), 0.2, max_relative = 1e-12);
    assert_relative_eq!(
        estimate_pi0(&p, RightBoundary::new()).unwrap(),
        0.2127659574468085,
        max_relative = 1e-12
    );
    let tenths: Vec<f64> = (1..=9).map(|i| i as f64 / 10.0).collect();
    assert_relative_eq!(
        estimate_pi0(&p, RightBoundary::new().with_lambdas(tenths)).unwrap(),
        0.25,
        max_relative = 1e-12
    );
    assert_abs_diff_eq!(estimate_pi0(&p, Bum::new()).unwrap(), 0.22802795505154264, epsilon = 1e-6);
    assert_abs_diff_eq!(
        estimate_pi0(&p, CensoredBum::new()).unwrap(),
        0.21052495526400936,
        epsilon = 1e-6
    );
    assert_relative_eq!(
        estimate_pi0(&p, FlatGrenander::new()).unwrap(),
        0.42553191489361697,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        estimate_pi0(&p, ConvexDecreasing::new()).unwrap(),
        0.013007051336745304,
        max_relative = 1e-9
    );
    assert_eq!(estimate_pi0(&p, Oracle::new(0.5)).unwrap(), 0.5);
}

#[test]
fn test_combinations() {
    let p = COMBINE_SAMPLE;

    assert_relative_eq!(combine(&p, Fisher::new()).unwrap(), 0.007616871850449092, max_relative = 1e-9);
    assert_relative_eq!(combine(&p, Stouffer::new()).unwrap(), 0.007098326181265917, max_relative = 1e-8);
    assert_relative_eq!(
        combine_weighted(&p, &[1.0, 2.0, 0.4, 1.5]).unwrap(),
        0.007331653763696742,
        max_relative = 1e-8
    );
    assert_relative_eq!(combine(&p, Logit::new()).unwrap(), 0.006434494635148462, max_relative = 1e-6);
    assert_relative_eq!(combine(&p, Tippett::new()).unwrap(), 0.03940399, max_relative = 1e-9);
    assert_relative_eq!(combine(&p, Simes::new()).unwrap(), 0.04, max_relative = 1e-12);
    assert_relative_eq!(combine(&p, Wilkinson::new(1)).unwrap(), 0.03940399, max_relative = 1e-8);
    assert_relative_eq!(combine(&p, Wilkinson::new(4)).unwrap(), 0.0625, max_relative = 1e-8);
    assert_relative_eq!(
        combine(&p, MinimumCombination::new(BenjaminiHochberg::new())).unwrap(),
        0.04,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        combine(&p, MinimumCombination::new(ForwardStop::new())).unwrap(),
        0.01005033585350145,
        max_relative = 1e-12
    );
}

#[test]
fn test_higher_criticism() {
    let p = ADJUST_SAMPLE;
    let scores = estimate(&p, HigherCriticismScores::new()).unwrap();
    assert_all_close(
        &scores,
        &[1.1500817362257345, 1.96, 3.3255375505322444, 2.3094010767584976],
        1e-12,
    );
    assert_eq!(estimate(&p, HigherCriticismThreshold::new()).unwrap(), 0.03);
}

#[test]
fn test_convenience_constructors_match_types() {
    let p = ADJUST_SAMPLE;
    assert_eq!(
        adjust(&p, benjamini_hochberg_adaptive(oracle(0.5))).unwrap(),
        adjust(&p, BenjaminiHochbergAdaptive::new(Oracle::new(0.5))).unwrap()
    );
    assert_eq!(
        combine(&COMBINE_SAMPLE, minimum(holm())).unwrap(),
        combine(&COMBINE_SAMPLE, MinimumCombination::new(Holm::new())).unwrap()
    );
    assert_eq!(
        estimate(&p, higher_criticism_threshold(0.5)).unwrap(),
        0.01
    );
}
