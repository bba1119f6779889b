//! Umami analytics events.
//!
//! Events are plain values so their names and payloads can be tested
//! without a browser. [`dispatch`] forwards them to `window.umami.track`
//! when the tracking script is loaded and does nothing otherwise.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use rubric::Language;
use serde_json::{Value, json};

#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub data: Value,
}

impl AnalyticsEvent {
    fn new(name: impl Into<String>, data: Value) -> Self {
        Self { name: name.into(), data }
    }
}

/// Event-name slug: every non-alphanumeric char becomes `-`, lowercased.
pub fn slug(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}

pub fn language_toggle(from: Language, to: Language) -> AnalyticsEvent {
    AnalyticsEvent::new("language-toggle", json!({ "from": from.code(), "to": to.code() }))
}

/// Generic click plus a per-paper event so single papers can be counted.
pub fn paper_click(title: &str, url: &str, metric_id: &str, level: &str) -> [AnalyticsEvent; 2] {
    let data = json!({ "title": title, "url": url, "metric_id": metric_id, "level": level });
    [
        AnalyticsEvent::new("paper-click", data.clone()),
        AnalyticsEvent::new(format!("paper-click-{}", slug(title)), data),
    ]
}

/// Generic click plus a per-metric event.
pub fn metric_click(metric_id: &str, metric_name: &str, level: &str) -> [AnalyticsEvent; 2] {
    let data = json!({ "metric_id": metric_id, "metric_name": metric_name, "level": level });
    [
        AnalyticsEvent::new("metric-click", data.clone()),
        AnalyticsEvent::new(format!("metric-click-{metric_id}"), data),
    ]
}

pub fn time_on_page(seconds: u64) -> AnalyticsEvent {
    AnalyticsEvent::new("time-on-page", json!({ "duration": seconds }))
}

/// Send `event` to `window.umami.track`, if present.
pub fn dispatch(event: &AnalyticsEvent) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(umami) = js_sys::Reflect::get(&window, &JsValue::from_str("umami")) else {
            return;
        };
        if umami.is_undefined() || umami.is_null() {
            return;
        }
        let Ok(track) = js_sys::Reflect::get(&umami, &JsValue::from_str("track")) else {
            return;
        };
        let Some(track) = track.dyn_ref::<js_sys::Function>() else {
            return;
        };
        let Ok(data) = js_sys::JSON::parse(&event.data.to_string()) else {
            return;
        };
        if let Err(err) = track.call2(&umami, &JsValue::from_str(&event.name), &data) {
            log::debug!("umami.track({}) failed: {err:?}", event.name);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event;
    }
}

pub fn dispatch_all(events: &[AnalyticsEvent]) {
    for event in events {
        dispatch(event);
    }
}
