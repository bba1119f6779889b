use super::*;

#[test]
fn language_codes_round_trip() {
    assert_eq!(Language::default(), Language::Zh);
    assert_eq!(Language::from_code(" EN "), Some(Language::En));
    assert_eq!(Language::from_code("zh"), Some(Language::Zh));
    assert_eq!(Language::from_code("fr"), None);
    assert_eq!(Language::En.toggled(), Language::Zh);
    assert_eq!(Language::Zh.to_string(), "zh");
}

#[test]
fn html_lang_tags() {
    assert_eq!(Language::Zh.html_lang(), "zh-CN");
    assert_eq!(Language::En.html_lang(), "en");
}

#[test]
fn dictionaries_cover_the_same_keys() {
    assert_eq!(ZH.len(), EN.len());
    for (key, _) in ZH {
        assert!(lookup(Language::En, key).is_some(), "missing en entry for {key}");
    }
}

#[test]
fn translate_returns_key_when_unknown() {
    assert_eq!(translate(Language::En, "loading"), "Loading...");
    assert_eq!(translate(Language::Zh, "loading"), "加载中...");
    assert_eq!(translate(Language::En, "no.such.key"), "no.such.key");
}

#[test]
fn switch_labels_point_at_other_language() {
    assert_eq!(translate(Language::Zh, "switch.to.english"), "切换到英文");
    assert_eq!(translate(Language::En, "switch.to.chinese"), "切换到中文");
}

#[test]
fn key_slug_joins_words_with_dots() {
    assert_eq!(key_slug("Self-Awareness"), "self.awareness");
    assert_eq!(key_slug("Ethics & Intentionality"), "ethics.intentionality");
    assert_eq!(key_slug("  Cognitive   Science "), "cognitive.science");
}

#[test]
fn plain_level_titles_are_translated() {
    let title = LocalizedText::from("Neuroscience");
    assert_eq!(level_label(Language::Zh, &title), "神经科学");
    assert_eq!(level_label(Language::En, &title), "Neuroscience");

    let unknown = LocalizedText::from("Ethology");
    assert_eq!(level_label(Language::Zh, &unknown), "Ethology");
}

#[test]
fn bilingual_titles_skip_the_dictionary() {
    let title = LocalizedText::Pair { zh: "哲学视角".into(), en: "Philosophy".into() };
    assert_eq!(level_label(Language::Zh, &title), "哲学视角");
}

#[test]
fn metric_and_subtitle_labels() {
    let metric = LocalizedText::from("Self-Awareness");
    assert_eq!(metric_label(Language::Zh, "", &metric), "自我意识 (Self-Awareness)");

    let title = LocalizedText::from("Psychology");
    let subtitle = LocalizedText::from("Functions and Behaviors of Consciousness");
    assert_eq!(subtitle_label(Language::Zh, &title, &subtitle), "意识的功能与行为");

    let custom = LocalizedText::from("Custom");
    assert_eq!(subtitle_label(Language::Zh, &custom, &subtitle), "Functions and Behaviors of Consciousness");
}

#[test]
fn metric_ids_take_precedence_over_names() {
    let name = LocalizedText::from("Information Integration Theory");
    assert_eq!(
        metric_label(Language::Zh, "information-integration", &name),
        "整合信息论 (Information Integration Theory)"
    );
    assert_eq!(metric_label(Language::En, "information-integration", &name), "Information Integration Theory");
    assert_eq!(metric_label(Language::Zh, "unknown-id", &name), "Information Integration Theory");

    let pair = LocalizedText::Pair { zh: "整合信息".into(), en: "IIT".into() };
    assert_eq!(metric_label(Language::Zh, "information-integration", &pair), "整合信息");
}

#[test]
fn every_plain_metric_has_a_chinese_label() {
    let raw = include_str!("../../public/ai-consciousness-watch.json");
    let doc = crate::Document::from_json(raw).unwrap();
    let untranslated: Vec<String> = doc
        .levels
        .iter()
        .flat_map(|level| &level.metrics)
        .filter(|metric| metric_label(Language::Zh, &metric.id, &metric.name) == metric.name.resolve(Language::Zh))
        .map(|metric| format!("{} ({})", metric.name.resolve(Language::En), metric.id))
        .collect();
    assert!(untranslated.is_empty(), "untranslated metric names: {untranslated:?}");
}
