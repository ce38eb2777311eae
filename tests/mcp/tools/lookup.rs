use rmcp::handler::server::wrapper::Parameters;
use tscat::mcp::{TscatMcpServer, types::LookupTranslationParams};

use crate::{McpTestFixture, extract_tool_result_json, fixture_de, fixture_qt_ka};

fn lookup_params(catalog_path: String, context: &str, source: &str) -> LookupTranslationParams {
    LookupTranslationParams {
        catalog_path,
        context: context.to_string(),
        source: source.to_string(),
        comment: None,
        n: None,
        include_unfinished: None,
        fallback_paths: None,
    }
}

// ============================================================================
// lookup_translation tests
// ============================================================================

#[tokio::test]
async fn test_lookup_translation_found() {
    let fixture = fixture_de().unwrap();
    let server = TscatMcpServer::new();

    let params = lookup_params(fixture.path("translations/app_de.ts"), "CloseButton", "Close Tab");
    let result = server.lookup_translation(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], true);
    assert_eq!(json_result["text"], "Tab schließen");
    assert_eq!(json_result["language"], "de_DE");
}

#[tokio::test]
async fn test_lookup_translation_numerus() {
    let fixture = fixture_de().unwrap();
    let server = TscatMcpServer::new();

    let mut params = lookup_params(fixture.path("translations/app_de.ts"), "QFileDialog", "%n file(s)");
    params.n = Some(1);
    let result = server.lookup_translation(Parameters(params)).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["text"], "1 Datei");

    let mut params = lookup_params(fixture.path("translations/app_de.ts"), "QFileDialog", "%n file(s)");
    params.n = Some(3);
    let result = server.lookup_translation(Parameters(params)).await.unwrap();
    assert_eq!(extract_tool_result_json(&result)["text"], "3 Dateien");
}

#[tokio::test]
async fn test_lookup_translation_missing_returns_source() {
    let fixture = fixture_de().unwrap();
    let server = TscatMcpServer::new();

    // Unfinished and vanished entries are not used by default
    for source in ["Detail View", "List View", "Never Translated"] {
        let params = lookup_params(fixture.path("translations/app_de.ts"), "QFileDialog", source);
        let result = server.lookup_translation(Parameters(params)).await.unwrap();
        let json_result = extract_tool_result_json(&result);

        assert_eq!(json_result["found"], false, "{}", source);
        assert_eq!(json_result["text"], source);
    }
}

#[tokio::test]
async fn test_lookup_translation_fallback() {
    let fixture = fixture_qt_ka().unwrap();
    fixture
        .write_catalog("nls/app_de.ts", crate::DE_CATALOG)
        .unwrap();
    let server = TscatMcpServer::new();

    let mut params = lookup_params(fixture.path("nls/qt_ka.ts"), "CloseButton", "Close Window");
    params.fallback_paths = Some(vec![fixture.path("nls/app_de.ts")]);
    let result = server.lookup_translation(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], true);
    assert_eq!(json_result["text"], "Fenster schließen");
    assert_eq!(json_result["language"], "ka_GE");
}

#[tokio::test]
async fn test_lookup_translation_missing_catalog() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let params = lookup_params(fixture.path("nope.ts"), "CloseButton", "Close Tab");
    let err = server
        .lookup_translation(Parameters(params))
        .await
        .unwrap_err();

    assert!(err.message.contains("Failed to load catalog"));
}
