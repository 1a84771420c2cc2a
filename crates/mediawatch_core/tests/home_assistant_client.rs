use mediawatch_core::{HomeAssistantConfig, HomeAssistantNotifier, Notifier, NotifyError};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Accepts one connection, captures the request and answers with `status_line`.
fn serve_once(status_line: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("stub server should bind");
    let addr = listener.local_addr().expect("stub server address");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("stub server should accept");
        let mut reader = BufReader::new(stream.try_clone().expect("stream clone"));

        let mut request_line = String::new();
        reader
            .read_line(&mut request_line)
            .expect("request line should be readable");

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("header line");
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((key, value)) = line.split_once(':') {
                headers.push((key.trim().to_ascii_lowercase(), value.trim().to_string()));
            }
        }

        let content_length = headers
            .iter()
            .find(|(key, _)| key == "content-length")
            .map(|(_, value)| value.parse::<usize>().expect("numeric content-length"))
            .unwrap_or(0);
        let mut body = vec![0_u8; content_length];
        reader.read_exact(&mut body).expect("request body");

        write!(
            stream,
            "{status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        )
        .expect("response should be written");
        stream.flush().expect("response flush");

        CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(body).expect("body should be UTF-8"),
        }
    });

    (format!("http://{addr}"), handle)
}

fn notifier_for(base_url: String) -> HomeAssistantNotifier {
    let config = HomeAssistantConfig {
        base_url,
        token: "secret-token".to_string(),
        entity_id: "light.on_air_light".to_string(),
        timeout: Duration::from_secs(5),
    };
    HomeAssistantNotifier::new(config.normalized().expect("config should validate"))
}

#[test]
fn active_media_posts_turn_on_with_auth_and_entity() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK");
    let notifier = notifier_for(base_url);

    notifier
        .set_media_active(true)
        .expect("200 response should be success");

    let request = server.join().expect("stub server thread");
    assert_eq!(
        request.request_line,
        "POST /api/services/light/turn_on HTTP/1.1"
    );
    assert_eq!(request.header("authorization"), Some("Bearer secret-token"));
    assert_eq!(request.header("content-type"), Some("application/json"));

    let body: serde_json::Value =
        serde_json::from_str(&request.body).expect("body should be JSON");
    assert_eq!(body, serde_json::json!({ "entity_id": "light.on_air_light" }));
}

#[test]
fn inactive_media_posts_turn_off() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK");
    let notifier = notifier_for(format!("{base_url}/"));

    notifier
        .set_media_active(false)
        .expect("200 response should be success");

    let request = server.join().expect("stub server thread");
    assert_eq!(
        request.request_line,
        "POST /api/services/light/turn_off HTTP/1.1"
    );
}

#[test]
fn error_status_maps_to_status_error() {
    let (base_url, server) = serve_once("HTTP/1.1 401 Unauthorized");
    let notifier = notifier_for(base_url);

    let err = notifier
        .set_media_active(true)
        .expect_err("401 should be reported");
    assert!(matches!(err, NotifyError::Status(401)), "unexpected error: {err}");
    server.join().expect("stub server thread");
}

#[test]
fn refused_connection_maps_to_network_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("probe bind");
        listener.local_addr().expect("probe address").port()
    };
    let notifier = notifier_for(format!("http://127.0.0.1:{port}"));

    let err = notifier
        .set_media_active(true)
        .expect_err("closed port should fail");
    assert!(matches!(err, NotifyError::Network(_)), "unexpected error: {err}");
}

#[test]
fn silent_peer_is_bounded_by_timeout() {
    // Bound but never accepted: the connect succeeds and the response never comes.
    let listener = TcpListener::bind("127.0.0.1:0").expect("silent peer bind");
    let addr = listener.local_addr().expect("silent peer address");
    let config = HomeAssistantConfig {
        base_url: format!("http://{addr}"),
        timeout: Duration::from_millis(300),
        ..HomeAssistantConfig::default()
    };
    let notifier = HomeAssistantNotifier::new(config);

    let err = notifier
        .set_media_active(false)
        .expect_err("silent peer should time out");
    assert!(matches!(err, NotifyError::Network(_)), "unexpected error: {err}");
    drop(listener);
}
