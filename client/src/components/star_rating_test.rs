use super::*;

#[test]
fn star_classes_are_distinct() {
    assert_eq!(star_class(Star::Full), "star star--full");
    assert_eq!(star_class(Star::Half), "star star--half");
    assert_eq!(star_class(Star::Empty), "star star--empty");
}

#[test]
fn star_label_shows_half_steps() {
    assert_eq!(star_label(72.0), "3.5 / 5");
    assert_eq!(star_label(100.0), "5 / 5");
    assert_eq!(star_label(0.0), "0 / 5");
}
