use std::collections::HashMap;

/// HTTP request methods.
///
/// The server produces content for GET and HEAD only. POST is recognized
/// on the wire but always answered 405 Method Not Allowed, and any other
/// token parses as `UNKNOWN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Recognized syntactically, never served
    POST,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// Any other method token
    UNKNOWN,
}

impl Method {
    /// Parses an HTTP method token, case-insensitively.
    ///
    /// Unrecognized tokens map to `Method::UNKNOWN` rather than failing,
    /// so a well-formed request with an exotic method is answered 405
    /// instead of being dropped as malformed.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Method::GET);
    /// assert_eq!(Method::from_str("get"), Method::GET);
    /// assert_eq!(Method::from_str("BREW"), Method::UNKNOWN);
    /// ```
    pub fn from_str(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "HEAD" => Method::HEAD,
            _ => Method::UNKNOWN,
        }
    }

    /// Whether the server will serve content for this method.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Method::GET | Method::HEAD)
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Built once per fully received header block and immutable afterwards.
/// The query string is carried verbatim; splitting it into key/value
/// pairs is not this layer's job.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, HEAD, ...)
    pub method: Method,
    /// The request target exactly as it appeared on the request line
    pub uri: String,
    /// Percent-decoded path component of the URI
    pub path: String,
    /// Raw query string, if the URI contained one
    pub query: Option<String>,
    /// HTTP version ("HTTP/1.0" or "HTTP/1.1")
    pub version: String,
    /// Request headers. Names are lower-cased and trimmed; when a client
    /// repeats a header name, the last occurrence wins.
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Retrieves a header value by its lower-case name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.as_str())
    }
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    query: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            query: None,
            version: None,
            headers: HashMap::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Adds a header, lower-casing the name to match parser output.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        let path = self.path.ok_or("path missing")?;
        let uri = match &self.query {
            Some(query) => format!("{path}?{query}"),
            None => path.clone(),
        };

        Ok(Request {
            method: self.method.ok_or("method missing")?,
            uri,
            path,
            query: self.query,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
