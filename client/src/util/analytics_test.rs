use super::*;

#[test]
fn slug_replaces_every_non_alphanumeric() {
    assert_eq!(slug("Could a Large Language Model be Conscious?"), "could-a-large-language-model-be-conscious-");
    assert_eq!(slug("ToM (2023)"), "tom--2023-");
    assert_eq!(slug("意识"), "--");
}

#[test]
fn language_toggle_carries_codes() {
    let event = language_toggle(Language::Zh, Language::En);
    assert_eq!(event.name, "language-toggle");
    assert_eq!(event.data, json!({ "from": "zh", "to": "en" }));
}

#[test]
fn paper_click_emits_generic_and_specific_events() {
    let [generic, specific] = paper_click("Looking Inward", "https://arxiv.org/abs/2410.13787", "self-awareness", "Philosophy");
    assert_eq!(generic.name, "paper-click");
    assert_eq!(specific.name, "paper-click-looking-inward");
    assert_eq!(generic.data, specific.data);
    assert_eq!(generic.data["metric_id"], "self-awareness");
    assert_eq!(generic.data["level"], "Philosophy");
}

#[test]
fn metric_click_names_event_by_id() {
    let [generic, specific] = metric_click("creativity", "Creativity", "Psychology");
    assert_eq!(generic.name, "metric-click");
    assert_eq!(specific.name, "metric-click-creativity");
    assert_eq!(specific.data, json!({ "metric_id": "creativity", "metric_name": "Creativity", "level": "Psychology" }));
}

#[test]
fn time_on_page_reports_duration() {
    assert_eq!(time_on_page(42).data, json!({ "duration": 42 }));
}

#[test]
fn dispatch_without_browser_is_a_no_op() {
    dispatch_all(&metric_click("x", "X", "L"));
}
