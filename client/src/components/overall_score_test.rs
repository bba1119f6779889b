use super::*;
use rubric::Level;

fn summaries() -> Vec<LevelSummary> {
    let doc = Document {
        average: "40%".into(),
        levels: vec![
            Level { id: "philosophy".into(), title: "Philosophy".into(), average: "20%".into(), weight: "30%".into(), ..Level::default() },
            Level { id: "neuroscience".into(), title: "Neuroscience".into(), average: "60%".into(), weight: "70%".into(), ..Level::default() },
        ],
        ..Document::default()
    };
    level_summaries(&doc)
}

#[test]
fn summaries_carry_weight_score_and_style() {
    let levels = summaries();
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].weight, 30.0);
    assert_eq!(levels[1].score, Some(60.0));
    assert_eq!(levels[1].style.accent, "purple");
}

#[test]
fn center_score_follows_hover() {
    let levels = summaries();
    assert_eq!(center_score(&levels, Some(40.0), None), Some(40.0));
    assert_eq!(center_score(&levels, Some(40.0), Some(0)), Some(20.0));
    // A stale index falls back to overview.
    assert_eq!(center_score(&levels, Some(40.0), Some(9)), Some(40.0));
}

#[test]
fn captions_switch_between_modes() {
    assert_eq!(caption_keys(false), ("overview.mode", "weight.proportions"));
    assert_eq!(caption_keys(true), ("focused.view", "detailed.achievement"));
}

#[test]
fn center_label_names_focused_level() {
    let levels = summaries();
    assert_eq!(center_label(Language::En, None), "Overall Score");
    assert_eq!(center_label(Language::Zh, focused_level(&levels, Some(1))), "神经科学");
}

#[test]
fn segment_class_highlights_hovered_only() {
    assert_eq!(segment_class(None, 0), "overall-score__segment");
    assert!(segment_class(Some(1), 1).ends_with("--active"));
    assert!(segment_class(Some(1), 0).ends_with("--dimmed"));
}

#[test]
fn score_and_weight_formatting() {
    assert_eq!(format_score(Some(39.04)), "39.0%");
    assert_eq!(format_score(None), "--");
    assert_eq!(format_weight(33.333), "33%");
}
