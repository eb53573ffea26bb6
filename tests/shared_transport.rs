use std::net::TcpListener;
use std::sync::Once;
use std::time::Duration;

use httpmock::prelude::*;
use twilio_sms::{MessagingClient, ProviderResponse, SendError, TransportConfig};

// "AC123:secret"
const BASIC_AUTH: &str = "Basic QUMxMjM6c2VjcmV0";

fn ensure_transport() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        twilio_sms::init(TransportConfig::default().timeout(Duration::from_secs(10)))
            .expect("shared transport init");
    });
}

fn client_for(server: &MockServer) -> MessagingClient {
    ensure_transport();
    MessagingClient::builder("AC123", "secret")
        .api_base(server.base_url())
        .build()
        .unwrap()
}

#[test]
fn second_init_is_rejected() {
    ensure_transport();
    assert!(twilio_sms::is_initialized());
    assert!(matches!(
        twilio_sms::init(TransportConfig::default()),
        Err(twilio_sms::InitError::AlreadyInitialized)
    ));
}

#[test]
fn sms_is_posted_with_basic_auth_and_form_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/2010-04-01/Accounts/AC123/Messages")
            .header("authorization", BASIC_AUTH)
            .header("content-type", "application/x-www-form-urlencoded")
            .body("To=15550001111&From=15550002222&Body=hello+world");
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"sid":"SM42","status":"queued","num_segments":"1"}"#);
    });

    let client = client_for(&server);
    let result = client.send_message("15550001111", "15550002222", "hello world", None, true);

    mock.assert();
    assert!(result.success, "diagnostic: {}", result.diagnostic);
    assert_eq!(result.status(), Some(201));
    let Some(ProviderResponse::Message(msg)) = result.provider_response() else {
        panic!("expected message resource: {}", result.diagnostic);
    };
    assert_eq!(msg.sid, "SM42");
    assert_eq!(msg.num_segments, Some(1));
}

#[test]
fn mms_adds_media_url() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/2010-04-01/Accounts/AC123/Messages")
            .body("To=1&From=2&Body=pic&MediaUrl=https://example.com/cat.png");
        then.status(201).body("{}");
    });

    let client = client_for(&server);
    let result = client.send_message("1", "2", "pic", Some("https://example.com/cat.png"), false);

    mock.assert();
    assert!(result.success);
    assert_eq!(result.diagnostic, "");
}

#[test]
fn provider_rejection_is_classified() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/2010-04-01/Accounts/AC123/Messages");
        then.status(400).body(
            r#"{"code":21211,"message":"Invalid 'To' Phone Number","more_info":"https://www.twilio.com/docs/errors/21211","status":400}"#,
        );
    });

    let client = client_for(&server);

    let quiet = client.send_message("bogus", "2", "hello", None, false);
    assert!(!quiet.success);
    assert_eq!(quiet.diagnostic, "");
    assert_eq!(quiet.status(), Some(400));

    let verbose = client.send_message("bogus", "2", "hello", None, true);
    assert!(!verbose.success);
    let Some(ProviderResponse::Error(err)) = verbose.provider_response() else {
        panic!("expected error document: {}", verbose.diagnostic);
    };
    assert_eq!(err.code, Some(21211));
    assert_eq!(err.status, Some(400));

    mock.assert_hits(2);
}

#[test]
fn oversized_body_never_hits_the_server() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(201);
    });

    let client = client_for(&server);
    let result = client.send_message("1", "2", "x".repeat(1601), None, true);

    assert!(!result.success);
    assert!(result.diagnostic.contains("1601"));
    mock.assert_hits(0);
}

#[test]
fn refused_connection_is_a_transport_failure() {
    ensure_transport();
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = MessagingClient::builder("AC123", "secret")
        .api_base(format!("http://127.0.0.1:{port}"))
        .build()
        .unwrap();
    let result = client.send_message("1", "2", "hello", None, true);

    assert!(!result.success);
    assert!(!result.diagnostic.is_empty());
    assert_eq!(result.status(), None);
    assert!(matches!(
        result.into_result(),
        Err(SendError::Transport(_))
    ));
}
