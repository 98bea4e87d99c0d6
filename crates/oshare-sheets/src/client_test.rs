use super::*;
use crate::auth::StaticToken;

fn test_client(base_url: &str) -> SheetsClient {
    SheetsClient::new(
        SheetsConfig {
            spreadsheet_id: "sheet-123".to_string(),
            worksheet_title: "landing_pages".to_string(),
            base_url: base_url.to_string(),
            timeout_secs: 5,
        },
        Arc::new(StaticToken("test-token".to_string())),
    )
    .expect("client construction should not fail")
}

fn sheet(title: &str, index: i64) -> SheetProperties {
    SheetProperties {
        title: title.to_string(),
        index,
    }
}

#[test]
fn select_worksheet_prefers_exact_title() {
    let sheets = vec![sheet("drafts", 0), sheet("landing_pages", 1)];
    let chosen = select_worksheet(&sheets, "landing_pages").expect("sheet");
    assert_eq!(chosen.title, "landing_pages");
}

#[test]
fn select_worksheet_title_match_is_case_sensitive() {
    let sheets = vec![sheet("Landing_Pages", 1), sheet("first", 0)];
    let chosen = select_worksheet(&sheets, "landing_pages").expect("sheet");
    assert_eq!(chosen.title, "first");
}

#[test]
fn select_worksheet_falls_back_to_lowest_index() {
    let sheets = vec![sheet("second", 1), sheet("first", 0), sheet("third", 2)];
    let chosen = select_worksheet(&sheets, "landing_pages").expect("sheet");
    assert_eq!(chosen.title, "first");
}

#[test]
fn select_worksheet_returns_none_without_sheets() {
    assert!(select_worksheet(&[], "landing_pages").is_none());
}

#[test]
fn a1_sheet_range_quotes_and_escapes_title() {
    assert_eq!(a1_sheet_range("landing_pages"), "'landing_pages'");
    assert_eq!(a1_sheet_range("Tom's picks"), "'Tom''s picks'");
}

#[test]
fn metadata_url_requests_sheet_properties_only() {
    let client = test_client("https://sheets.googleapis.com");
    let url = client.metadata_url();
    assert_eq!(url.path(), "/v4/spreadsheets/sheet-123");
    assert_eq!(
        url.query_pairs().find(|(k, _)| k == "fields").map(|(_, v)| v.into_owned()),
        Some("sheets.properties(title,index)".to_string())
    );
}

#[test]
fn values_url_encodes_worksheet_title() {
    let client = test_client("https://sheets.googleapis.com/");
    let url = client.values_url("Spring sale");
    assert_eq!(
        url.as_str(),
        "https://sheets.googleapis.com/v4/spreadsheets/sheet-123/values/'Spring%20sale'"
    );
}

#[test]
fn values_url_encodes_slash_in_title() {
    let client = test_client("https://sheets.googleapis.com");
    let url = client.values_url("a/b");
    assert!(
        url.path().ends_with("/values/'a%2Fb'"),
        "slash should stay inside one segment: {url}"
    );
}

#[test]
fn new_rejects_invalid_base_url() {
    let result = SheetsClient::new(
        SheetsConfig {
            spreadsheet_id: "sheet-123".to_string(),
            worksheet_title: "landing_pages".to_string(),
            base_url: "not a url".to_string(),
            timeout_secs: 5,
        },
        Arc::new(StaticToken("t".to_string())),
    );
    assert!(
        matches!(result, Err(DataSourceError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}
