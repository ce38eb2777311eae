use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{TscatMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["catalogsRoot"], ".");
    assert_eq!(json_result["config"]["includes"], json!(["**/*.ts"]));
    assert_eq!(json_result["config"]["ignoreContexts"], json!([]));
    assert!(json_result["config"]["primaryLanguage"].is_null());
    assert_eq!(json_result["config"]["includeUnfinished"], false);
}

#[tokio::test]
async fn test_get_config_from_tscatrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "catalogsRoot": "translations",
            "ignoreContexts": ["QPrintDialog"],
            "primaryLanguage": "ka"
        }))
        .unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["catalogsRoot"], "translations");
    assert_eq!(json_result["config"]["ignoreContexts"], json!(["QPrintDialog"]));
    assert_eq!(json_result["config"]["primaryLanguage"], "ka");
    // Unset fields keep their defaults
    assert_eq!(json_result["config"]["includes"], json!(["**/*.ts"]));
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    std::fs::write(fixture.root_path().join(".tscatrc.json"), "{ not json").unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
