use super::*;

fn sample_path() -> String {
    format!("{}/../public/ai-consciousness-watch-i18n.json", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn urls_are_detected_by_scheme() {
    assert!(is_url(DEFAULT_SOURCE));
    assert!(is_url("https://acw.gixia.org/ai-consciousness-watch-i18n.json"));
    assert!(!is_url("public/ai-consciousness-watch-i18n.json"));
    assert!(!is_url("httpdocs/data.json"));
}

#[tokio::test]
async fn loads_document_from_file() {
    let doc = load(&sample_path()).await.unwrap();
    assert_eq!(doc.levels.len(), 3);
}

#[tokio::test]
async fn missing_file_reports_path() {
    let err = load("/definitely/not/here.json").await.unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[tokio::test]
async fn malformed_file_is_parse_error() {
    let path = std::env::temp_dir().join(format!("acw-malformed-{}.json", std::process::id()));
    tokio::fs::write(&path, "{ not json").await.unwrap();
    let err = load(path.to_str().unwrap()).await.unwrap_err();
    tokio::fs::remove_file(&path).await.unwrap();
    assert!(matches!(err, CliError::Parse(_)));
}
