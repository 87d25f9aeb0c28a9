use crate::http::mime;

/// HTTP status codes emitted by the server.
///
/// - `Ok` (200): Request successful
/// - `BadRequest` (400): Malformed request
/// - `NotFound` (404): Resource not found or outside the document root
/// - `MethodNotAllowed` (405): HTTP method not supported
/// - `InternalServerError` (500): Server error (reserved, currently unused)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A complete HTTP response ready for serialization.
///
/// Built fresh per request, never cached. `content_length` is carried
/// separately from the body: HEAD responses advertise the on-disk file
/// size while their body stays empty.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Value of the Content-Type header
    pub content_type: &'static str,
    /// Value of the Content-Length header
    pub content_length: u64,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// 200 with the full file content.
    pub fn ok(body: Vec<u8>, content_type: &'static str) -> Self {
        let content_length = body.len() as u64;
        Self {
            status: StatusCode::Ok,
            content_type,
            content_length,
            body,
        }
    }

    /// 200 for a HEAD request: on-disk size only, no body.
    pub fn head(size: u64, content_type: &'static str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type,
            content_length: size,
            body: Vec::new(),
        }
    }

    /// 404 for a path that is empty, escapes the document root, or is
    /// otherwise not resolvable.
    pub fn forbidden(content_type: &'static str) -> Self {
        Self::fixed(StatusCode::NotFound, content_type, "Forbidden!")
    }

    /// 404 for a resolved path that could not be opened or read.
    pub fn not_found(content_type: &'static str) -> Self {
        Self::fixed(StatusCode::NotFound, content_type, "Not Found")
    }

    /// 405 for any method other than GET or HEAD.
    pub fn method_not_allowed(content_type: &'static str) -> Self {
        Self::fixed(
            StatusCode::MethodNotAllowed,
            content_type,
            "Method not supported yet!",
        )
    }

    /// 400 for a request the parser rejected.
    pub fn bad_request() -> Self {
        Self::fixed(
            StatusCode::BadRequest,
            mime::DEFAULT_CONTENT_TYPE,
            "Bad Request",
        )
    }

    fn fixed(status: StatusCode, content_type: &'static str, message: &str) -> Self {
        Self {
            status,
            content_type,
            content_length: message.len() as u64,
            body: message.as_bytes().to_vec(),
        }
    }
}
