//! Session and export integration tests

use pagesift::export::Export;
use pagesift::session::{Role, SessionContext};
use pretty_assertions::assert_eq;

#[test]
fn test_session_transcript_serializes_role_tagged() {
    let mut session = SessionContext::new();
    session.push_user("https://example.com");
    session.push_bot("=== OVERVIEW ===\ncontent");

    let json = serde_json::to_value(session.turns()).unwrap();
    assert_eq!(json[0]["role"], "user");
    assert_eq!(json[0]["content"], "https://example.com");
    assert_eq!(json[1]["role"], "bot");
}

#[test]
fn test_session_round_trips_through_json() {
    let mut session = SessionContext::new();
    session.push_user("https://example.com");
    session.push_bot("ERROR: Failed to scrape the page: HTTP status 500");

    let json = serde_json::to_string(&session).unwrap();
    let back: SessionContext = serde_json::from_str(&json).unwrap();

    assert_eq!(back.session_id, session.session_id);
    assert_eq!(back.turns().len(), 2);
    assert_eq!(back.turns()[1].role, Role::Bot);
    assert_eq!(back.turns()[1].content, session.turns()[1].content);
}

#[test]
fn test_export_files_round_trip() {
    let content = "=== OVERVIEW ===\nHello World\n\n=== SOCIAL MEDIA LINKS ===\nhttps://t.me/x";
    let dir = std::env::temp_dir();
    let txt_path = dir.join(format!("pagesift_export_{}.txt", std::process::id()));
    let json_path = dir.join(format!("pagesift_export_{}.json", std::process::id()));

    Export::write_txt(content, &txt_path).unwrap();
    Export::write_json(content, &json_path).unwrap();

    assert_eq!(std::fs::read_to_string(&txt_path).unwrap(), content);

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["structured_content"], content);

    let _ = std::fs::remove_file(txt_path);
    let _ = std::fs::remove_file(json_path);
}
