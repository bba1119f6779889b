use super::*;

fn sample() -> Document {
    let raw = include_str!("../../public/ai-consciousness-watch-i18n.json");
    Document::from_json(raw).unwrap()
}

#[test]
fn stars_text_rounds_to_half_stars() {
    assert_eq!(stars_text(0.0), "☆☆☆☆☆");
    assert_eq!(stars_text(50.0), "★★½☆☆");
    assert_eq!(stars_text(100.0), "★★★★★");
}

#[test]
fn score_text_marks_missing_scores() {
    assert_eq!(score_text(None), "--");
    assert_eq!(score_text(Some(39.0)), "39.0%");
}

#[test]
fn english_summary_lists_levels_and_metrics() {
    let out = summary(&sample(), Language::En);
    assert!(out.starts_with("AI Consciousness Watch\n"));
    assert!(out.contains("Overall Score: 39.0%"));
    assert!(out.contains("Philosophy  Weight 30%  Score 26.8%"));
    assert!(out.contains("  - Global Workspace Theory (30%) 55.0%"));
    assert!(out.contains("Version: 1.0.0"));
}

#[test]
fn chinese_summary_uses_chinese_labels() {
    let out = summary(&sample(), Language::Zh);
    assert!(out.starts_with("AI意识观察\n"));
    assert!(out.contains("总体评分: 39.0%"));
    assert!(out.contains("哲学  权重 30%  评分 26.8%"));
}

#[test]
fn summary_of_empty_document_uses_dictionary_defaults() {
    let out = summary(&Document::default(), Language::En);
    assert!(out.starts_with("AI Consciousness Watch\n"));
    assert!(out.contains("Overall Score: --"));
    assert!(!out.contains("Version"));
}

#[test]
fn papers_are_grouped_by_level_and_metric() {
    let out = papers(&sample(), Language::En);
    assert!(out.starts_with("Philosophy / Phenomenal Consciousness\n"));
    assert!(out.contains("Psychology / Theory of Mind (ToM)"));
    assert!(out.contains("★★★½☆ 70.0%  Theory of Mind May Have Spontaneously Emerged in Large Language Models"));
    assert_eq!(out.matches("https://").count(), sample().paper_count());
}

#[test]
fn papers_of_empty_document_is_blank() {
    assert_eq!(papers(&Document::default(), Language::Zh), "\n");
}

#[test]
fn plain_document_metrics_are_translated_by_id() {
    let raw = include_str!("../../public/ai-consciousness-watch.json");
    let out = summary(&Document::from_json(raw).unwrap(), Language::Zh);
    assert!(out.contains("整合信息论 (Information Integration Theory)"));
    assert!(out.contains("心智理论 (Theory of Mind, ToM)"));
}
