use staticd::http::response::Response;
use staticd::http::writer::{ResponseWriter, serialize_response};
use tokio::io::AsyncReadExt;

fn header_section(serialized: &[u8]) -> String {
    let end = serialized
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("no header/body separator");
    String::from_utf8(serialized[..end + 2].to_vec()).unwrap()
}

#[test]
fn test_serialized_status_line() {
    let serialized = serialize_response(&Response::ok(b"hi".to_vec(), "text/html"));
    assert!(serialized.starts_with(b"HTTP/1.1 200 OK\r\n"));

    let serialized = serialize_response(&Response::not_found("text/plain"));
    assert!(serialized.starts_with(b"HTTP/1.1 404 Not Found\r\n"));
}

#[test]
fn test_serialized_header_order() {
    let serialized = serialize_response(&Response::ok(b"hi".to_vec(), "text/html"));
    let headers = header_section(&serialized);

    let date = headers.find("Date: ").unwrap();
    let content_type = headers.find("Content-Type: ").unwrap();
    let content_length = headers.find("Content-Length: ").unwrap();
    let connection = headers.find("Connection: close").unwrap();
    let server = headers.find("Server: ").unwrap();

    assert!(date < content_type);
    assert!(content_type < content_length);
    assert!(content_length < connection);
    assert!(connection < server);
}

#[test]
fn test_serialized_date_is_valid_http_date() {
    let serialized = serialize_response(&Response::ok(Vec::new(), "text/plain"));
    let headers = header_section(&serialized);

    let date_line = headers
        .lines()
        .find(|line| line.starts_with("Date: "))
        .unwrap();
    let value = date_line.trim_start_matches("Date: ");

    assert!(httpdate::parse_http_date(value).is_ok());
}

#[test]
fn test_serialized_body_follows_blank_line_verbatim() {
    let body = vec![0u8, 159, 146, 150, 13, 10];
    let serialized = serialize_response(&Response::ok(body.clone(), "text/plain"));

    let end = serialized.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
    assert_eq!(&serialized[end + 4..], body.as_slice());
}

#[test]
fn test_head_serialization_omits_body() {
    let serialized = serialize_response(&Response::head(12345, "text/html"));
    let headers = header_section(&serialized);

    assert!(headers.contains("Content-Length: 12345"));
    assert!(serialized.ends_with(b"\r\n\r\n"));
}

#[test]
fn test_partial_drain_reconstructs_response() {
    let response = Response::ok(b"some file content for draining".to_vec(), "text/plain");
    let mut writer = ResponseWriter::new(&response);
    let full = writer.pending().to_vec();

    // drain in deliberately awkward chunk sizes
    let mut reconstructed = Vec::new();
    let chunks = [1usize, 2, 3, 5, 7, 11, 13];
    let mut i = 0;
    while !writer.is_done() {
        let n = chunks[i % chunks.len()].min(writer.pending().len());
        reconstructed.extend_from_slice(&writer.pending()[..n]);
        writer.advance(n);
        i += 1;
    }

    assert_eq!(reconstructed, full);
    assert!(writer.pending().is_empty());
}

#[test]
fn test_advance_never_overruns() {
    let mut writer = ResponseWriter::new(&Response::ok(b"abc".to_vec(), "text/plain"));
    let total = writer.pending().len();

    writer.advance(total + 1000);
    assert!(writer.is_done());
    assert!(writer.pending().is_empty());
}

#[tokio::test]
async fn test_write_to_stream_with_tiny_write_buffer() {
    let response = Response::ok(vec![b'x'; 4096], "text/plain");
    let mut writer = ResponseWriter::new(&response);
    let expected = writer.pending().to_vec();

    // a 16 byte duplex forces many partial writes
    let (mut client, mut server) = tokio::io::duplex(16);

    let reader = tokio::spawn(async move {
        let mut received = Vec::new();
        server.read_to_end(&mut received).await.unwrap();
        received
    });

    writer.write_to_stream(&mut client).await.unwrap();
    drop(client);

    let received = reader.await.unwrap();
    assert_eq!(received, expected);
}
