use super::*;

#[test]
fn plain_text_ignores_language() {
    let text = LocalizedText::from("Philosophy");
    assert_eq!(text.resolve(Language::Zh), "Philosophy");
    assert_eq!(text.resolve(Language::En), "Philosophy");
    assert!(!text.is_pair());
}

#[test]
fn pair_resolves_requested_language() {
    let text = LocalizedText::Pair { zh: "哲学".into(), en: "Philosophy".into() };
    assert_eq!(text.resolve(Language::Zh), "哲学");
    assert_eq!(text.resolve(Language::En), "Philosophy");
}

#[test]
fn pair_falls_back_when_requested_side_is_blank() {
    let text = LocalizedText::Pair { zh: "  ".into(), en: "Psychology".into() };
    assert_eq!(text.resolve(Language::Zh), "Psychology");
}

#[test]
fn deserializes_both_shapes() {
    let plain: LocalizedText = serde_json::from_str(r#""hello""#).unwrap();
    assert_eq!(plain, LocalizedText::Plain("hello".into()));

    let pair: LocalizedText = serde_json::from_str(r#"{"zh":"你好","en":"hello"}"#).unwrap();
    assert_eq!(pair, LocalizedText::Pair { zh: "你好".into(), en: "hello".into() });

    let partial: LocalizedText = serde_json::from_str(r#"{"en":"only english"}"#).unwrap();
    assert_eq!(partial.resolve(Language::Zh), "only english");
}

#[test]
fn emptiness_checks_every_side() {
    assert!(LocalizedText::default().is_empty());
    assert!(LocalizedText::Pair { zh: String::new(), en: " ".into() }.is_empty());
    assert!(!LocalizedText::Pair { zh: "x".into(), en: String::new() }.is_empty());
}
