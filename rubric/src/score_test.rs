use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn weighted_average_weights_each_score() {
    let avg = weighted_average([(80.0, 40.0), (50.0, 30.0), (20.0, 30.0)]).unwrap();
    assert!(approx(avg, 53.0));
}

#[test]
fn weighted_average_skips_unusable_items() {
    let avg = weighted_average([(90.0, 0.0), (f64::NAN, 10.0), (60.0, 10.0), (10.0, -5.0)]).unwrap();
    assert!(approx(avg, 60.0));
}

#[test]
fn weighted_average_of_nothing_is_none() {
    assert_eq!(weighted_average(std::iter::empty()), None);
    assert_eq!(weighted_average([(50.0, 0.0)]), None);
}

#[test]
fn mean_is_unweighted() {
    assert!(approx(mean([70.0, 80.0, 90.0]).unwrap(), 80.0));
    assert_eq!(mean(std::iter::empty()), None);
}

#[test]
fn weights_or_equal_keeps_explicit_weights() {
    assert_eq!(weights_or_equal(&[Some(40.0), None, Some(30.0)]), vec![40.0, 0.0, 30.0]);
}

#[test]
fn weights_or_equal_splits_evenly_without_weights() {
    assert_eq!(weights_or_equal(&[None, None, None, None]), vec![25.0; 4]);
    assert!(weights_or_equal(&[]).is_empty());
}
