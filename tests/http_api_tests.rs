use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use bet_dashboard::api::{HttpApi, LotteryApi};
use bet_dashboard::error::FetchError;
use bet_dashboard::notice::Resource;

/// Serve one canned response on 127.0.0.1 and hand back the raw request head.
fn serve_once(status_line: &str, body: &str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind local listener");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).expect("write response");
        String::from_utf8_lossy(&head).into_owned()
    });
    (format!("http://{}", addr), handle)
}

/// Request target from the request line, with bracket escapes undone.
fn request_target(head: &str) -> String {
    let line = head.lines().next().unwrap_or("");
    let target = line.split_whitespace().nth(1).unwrap_or("");
    target.replace("%5B", "[").replace("%5D", "]")
}

#[test]
fn fetches_games_catalog() {
    let json = std::fs::read_to_string("tests/sample_games.json").expect("failed to read sample_games.json");
    let (base_url, server) = serve_once("200 OK", &json);

    let games = HttpApi::new(base_url).fetch_games().expect("games");
    let head = server.join().unwrap();

    assert!(head.starts_with("GET /cart_games HTTP/1.1\r\n"), "request was: {}", head);
    assert_eq!(games.len(), 3);
    assert_eq!(games[1].type_field, "Mega-Sena");
}

#[test]
fn filtered_bets_send_type_and_bearer_token() {
    let json = std::fs::read_to_string("tests/sample_bets.json").expect("failed to read sample_bets.json");
    let (base_url, server) = serve_once("200 OK", &json);

    let bets = HttpApi::new(base_url).fetch_bets("tok", Some("Mega-Sena")).expect("bets");
    let head = server.join().unwrap();

    assert_eq!(request_target(&head), "/bet/all-bets?type[]=Mega-Sena", "request was: {}", head);
    assert!(head.to_ascii_lowercase().contains("\r\nauthorization: bearer tok\r\n"), "request was: {}", head);
    assert_eq!(bets.len(), 3);
}

#[test]
fn unfiltered_bets_omit_query_string() {
    let (base_url, server) = serve_once("200 OK", "[]");

    let bets = HttpApi::new(base_url).fetch_bets("tok", None).expect("bets");
    let head = server.join().unwrap();

    assert_eq!(request_target(&head), "/bet/all-bets", "request was: {}", head);
    assert!(head.to_ascii_lowercase().contains("\r\nauthorization: bearer tok\r\n"), "request was: {}", head);
    assert!(bets.is_empty());
}

#[test]
fn client_fault_body_reaches_user_verbatim() {
    let (base_url, server) = serve_once("400 Bad Request", r#"{"message":"X"}"#);

    let err = HttpApi::new(base_url).fetch_bets("tok", None).unwrap_err();
    server.join().unwrap();

    assert_eq!(err, FetchError::Rejected { status: 400, message: "X".to_string() });
    assert_eq!(err.notice_text(Resource::Bets), "X");
}

#[test]
fn server_fault_is_unclassified() {
    let (base_url, server) = serve_once("503 Service Unavailable", r#"{"message":"db down"}"#);

    let err = HttpApi::new(base_url).fetch_games().unwrap_err();
    server.join().unwrap();

    assert_eq!(err, FetchError::Server { status: 503 });
    assert_eq!(err.notice_text(Resource::Games), "An unknown error occurred while fetching the games!");
}

#[test]
fn unreachable_server_is_a_transport_failure() {
    // Bind then drop to get a local port with nothing listening
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

    let err = HttpApi::new(format!("http://{}", addr)).fetch_games().unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)), "error was: {:?}", err);
    assert!(!err.is_classified());
}
