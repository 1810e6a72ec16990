use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_hard_threshold() {
    let act = HardThreshold;
    assert_eq!(act.activate(0f64), 1.);
    assert_eq!(act.activate(3.2f64), 1.);
    assert_eq!(act.activate(-1e-9f64), 0.);
    assert_eq!(act.gradient_factor(0f64), 1.);
    assert_eq!(act.loss(1f64, 0.), 1.);
    assert_eq!(act.loss(0f64, 0.), 0.);
}

#[test]
fn test_sigmoid() {
    let act = Sigmoid;
    assert_abs_diff_eq!(act.activate(0f64), 0.5);
    assert_abs_diff_eq!(act.gradient_factor(0.5f64), 0.25);
    assert_abs_diff_eq!(act.loss(1f64, 0.5), (0.5f64).ln());
    assert_abs_diff_eq!(act.loss(0f64, 0.25), (0.75f64).ln());
}

#[test]
fn test_sigmoid_loss_saturates() {
    let act = Sigmoid;
    assert!(!act.loss(1f64, 0.).is_finite());
    assert!(!act.loss(0f64, 1.).is_finite());
}

#[test]
fn test_decision_threshold() {
    assert_eq!(Activation::<f64>::decision_threshold(&HardThreshold), 0.5);
    assert_eq!(Activation::<f32>::decision_threshold(&Sigmoid), 0.5);
}
