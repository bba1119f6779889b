use super::*;

#[test]
fn document_path_is_the_bilingual_file() {
    assert_eq!(DOCUMENT_PATH, "/ai-consciousness-watch-i18n.json");
}

#[test]
fn decode_document_parses_minimal_body() {
    let doc = decode_document(r#"{"name": "Watch", "average": "12.5%", "levels": []}"#).unwrap();
    assert_eq!(doc.average, "12.5%");
    assert!(doc.levels.is_empty());
}

#[test]
fn decode_document_reports_parse_errors() {
    let err = decode_document("<html>404</html>").unwrap_err();
    assert!(err.starts_with("invalid rubric document"), "{err}");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_is_unavailable_without_a_browser() {
    let result = block_on(fetch_document());
    assert_eq!(result.unwrap_err(), "not available on server");
}

/// Minimal executor for a future that never awaits anything pending.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
