use rmcp::handler::server::wrapper::Parameters;
use tscat::mcp::{TscatMcpServer, types::GetCatalogsParams};

use crate::{McpTestFixture, extract_tool_result_json, fixture_de, fixture_qt_ka};

// ============================================================================
// get_catalogs tests
// ============================================================================

#[tokio::test]
async fn test_get_catalogs_fixture() {
    let fixture = fixture_qt_ka().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 1);

    let catalog = &catalogs[0];
    assert_eq!(catalog["filePath"], fixture.path("nls/qt_ka.ts"));
    assert_eq!(catalog["language"], "ka_GE");
    assert_eq!(catalog["version"], "2.1");
    assert_eq!(catalog["contextCount"], 123);
    assert_eq!(catalog["messageCount"], 1775);
    assert_eq!(catalog["finishedCount"], 1381);
    assert_eq!(catalog["unfinishedCount"], 394);
    assert_eq!(catalog["vanishedCount"], 0);
    assert_eq!(catalog["completion"], 77.8);
    assert!(json_result["parseErrors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_catalogs_counts_vanished() {
    let fixture = fixture_de().unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let catalog = &json_result["catalogs"][0];
    assert_eq!(catalog["filePath"], fixture.path("translations/app_de.ts"));
    assert_eq!(catalog["language"], "de_DE");
    assert_eq!(catalog["contextCount"], 2);
    assert_eq!(catalog["messageCount"], 7);
    assert_eq!(catalog["finishedCount"], 5);
    assert_eq!(catalog["unfinishedCount"], 1);
    assert_eq!(catalog["vanishedCount"], 1);
}

#[tokio::test]
async fn test_get_catalogs_reports_parse_errors() {
    let fixture = McpTestFixture::with_catalogs(vec![
        ("qt_de.ts", "<TS version=\"2.1\">\n<context>\n<name>C</name>\n</TS>"),
    ])
    .unwrap();
    let server = TscatMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(json_result["catalogs"].as_array().unwrap().is_empty());
    let errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["filePath"], fixture.path("qt_de.ts"));
}
