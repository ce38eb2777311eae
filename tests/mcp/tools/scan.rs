use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tscat::mcp::{
    TscatMcpServer,
    types::{ScanIssuesParams, ScanOverviewParams},
};

use crate::{McpTestFixture, assert_pagination, extract_tool_result_json, fixture_de, fixture_qt_ka};

fn scan_params(fixture: &McpTestFixture, rules: Option<Vec<&str>>) -> ScanIssuesParams {
    ScanIssuesParams {
        project_root_path: fixture.root(),
        rules: rules.map(|r| r.into_iter().map(String::from).collect()),
        limit: None,
        offset: None,
    }
}

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview_fixture() {
    let fixture = fixture_qt_ka().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogCount"], 1);
    assert_eq!(json_result["totalCount"], 401);
    assert_eq!(json_result["errorCount"], 1);
    assert_eq!(json_result["warningCount"], 400);

    assert_eq!(
        json_result["rules"],
        json!([
            {"rule": "place-marker", "severity": "error", "totalCount": 1, "fileCount": 1},
            {"rule": "accelerator", "severity": "warning", "totalCount": 5, "fileCount": 1},
            {"rule": "punctuation", "severity": "warning", "totalCount": 1, "fileCount": 1},
            {"rule": "unfinished", "severity": "warning", "totalCount": 394, "fileCount": 1}
        ])
    );
}

#[tokio::test]
async fn test_scan_overview_empty_project() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogCount"], 0);
    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["rules"], json!([]));
}

// ============================================================================
// scan_issues tests
// ============================================================================

#[tokio::test]
async fn test_scan_issues_default_rules() {
    let fixture = fixture_de().unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .scan_issues(Parameters(scan_params(&fixture, None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["totalFileCount"], 1);

    let items = json_result["items"].as_array().unwrap();
    let rules: Vec<&str> = items.iter().map(|i| i["rule"].as_str().unwrap()).collect();
    assert_eq!(rules, vec!["place-marker", "accelerator", "vanished"]);

    let place_marker = &items[0];
    assert_eq!(place_marker["severity"], "error");
    assert_eq!(place_marker["filePath"], fixture.path("translations/app_de.ts"));
    assert_eq!(place_marker["line"], 24);
    assert_eq!(place_marker["col"], 5);
    assert_eq!(place_marker["message"], "Open %1");
    assert_eq!(place_marker["context"], "QFileDialog");
    assert_eq!(place_marker["translation"], "%2 öffnen");
    assert!(place_marker.get("comment").is_none());

    assert_pagination(&json_result, 0, 20, false);
}

#[tokio::test]
async fn test_scan_issues_rule_filter() {
    let fixture = fixture_de().unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .scan_issues(Parameters(scan_params(&fixture, Some(vec!["unfinished"]))))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    let item = &json_result["items"][0];
    assert_eq!(item["rule"], "unfinished");
    assert_eq!(item["message"], "Detail View");
}

#[tokio::test]
async fn test_scan_issues_pagination() {
    let fixture = fixture_qt_ka().unwrap();
    let server = TscatMcpServer::new();

    let mut params = scan_params(&fixture, Some(vec!["unfinished"]));
    params.limit = Some(50);
    params.offset = Some(380);

    let result = server.scan_issues(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 394);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 14);
    assert_pagination(&json_result, 380, 50, false);

    let mut params = scan_params(&fixture, Some(vec!["unfinished"]));
    params.limit = Some(500);

    let result = server.scan_issues(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    // Limit is capped
    assert_eq!(json_result["items"].as_array().unwrap().len(), 100);
    assert_pagination(&json_result, 0, 100, true);
}

#[tokio::test]
async fn test_scan_issues_includes_parse_errors() {
    let fixture = fixture_de().unwrap();
    fixture
        .write_catalog(
            "translations/app_fr.ts",
            "<TS version=\"2.1\">\n<context>\n<name>C</name>\n</TS>",
        )
        .unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .scan_issues(Parameters(scan_params(&fixture, Some(vec!["punctuation"]))))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    let item = &json_result["items"][0];
    assert_eq!(item["rule"], "parse-error");
    assert_eq!(item["filePath"], fixture.path("translations/app_fr.ts"));
    assert!(item.get("context").is_none());
}

#[tokio::test]
async fn test_scan_issues_unknown_rule() {
    let fixture = fixture_de().unwrap();
    let server = TscatMcpServer::new();

    let result = server
        .scan_issues(Parameters(scan_params(&fixture, Some(vec!["hardcoded"]))))
        .await;

    let err = result.unwrap_err();
    assert!(err.message.contains("Unknown rule"));
}
