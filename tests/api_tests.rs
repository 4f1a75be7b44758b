use bet_dashboard::api::{decode_response, HttpApi};
use bet_dashboard::error::FetchError;
use bet_dashboard::model::{Bet, GamesDocument};
use bet_dashboard::notice::Resource;

#[test]
fn decodes_success_bodies() {
    let json = std::fs::read_to_string("tests/sample_games.json").expect("failed to read sample_games.json");
    let doc: GamesDocument = decode_response(200, &json).expect("games");
    assert_eq!(doc.types.len(), 3);
    assert_eq!(doc.types[0].type_field, "Lotofácil");
    assert_eq!(doc.types[0].color, "#7F3992");

    let json = std::fs::read_to_string("tests/sample_bets.json").expect("failed to read sample_bets.json");
    let bets: Vec<Bet> = decode_response(200, &json).expect("bets");
    assert_eq!(bets.len(), 3);
    assert_eq!(bets[1].type_field.id, 3);
    assert_eq!(bets[1].choosen_numbers, "5,10,15,20,25");
}

#[test]
fn client_fault_with_message_is_classified() {
    let err = decode_response::<Vec<Bet>>(401, r#"{"message":"Token inválido"}"#).unwrap_err();
    assert_eq!(err, FetchError::Rejected { status: 401, message: "Token inválido".to_string() });
    assert!(err.is_classified());
    assert_eq!(err.notice_text(Resource::Bets), "Token inválido");
}

#[test]
fn server_fault_is_unclassified_even_with_message() {
    let err = decode_response::<Vec<Bet>>(503, r#"{"message":"internal details"}"#).unwrap_err();
    assert_eq!(err, FetchError::Server { status: 503 });
    assert!(!err.is_classified());
    assert_eq!(err.notice_text(Resource::Games), "An unknown error occurred while fetching the games!");
}

#[test]
fn client_fault_without_message_is_unclassified() {
    let err = decode_response::<Vec<Bet>>(404, "Not Found").unwrap_err();
    assert_eq!(err, FetchError::Unstructured { status: 404 });
    assert_eq!(err.notice_text(Resource::Bets), "An unknown error occurred while fetching the bets!");
}

#[test]
fn undecodable_success_body_is_unclassified() {
    let err = decode_response::<Vec<Bet>>(200, r#"{"unexpected":true}"#).unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
    assert_eq!(err.notice_text(Resource::Bets), Resource::Bets.unknown_error());
}

#[test]
fn transport_failure_uses_unknown_error_text() {
    let err = FetchError::Transport("connection refused".to_string());
    assert_eq!(err.notice_text(Resource::Games), "An unknown error occurred while fetching the games!");
}

#[test]
fn http_api_trims_trailing_slash() {
    let api = HttpApi::new("https://lottery.example.invalid/api/");
    assert_eq!(api.base_url(), "https://lottery.example.invalid/api");
    // Avoid network: don't call fetch_games/fetch_bets here
}
