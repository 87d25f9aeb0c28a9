use crate::files::resolver::PathResolver;
use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::Response;

/// Turns parsed requests into responses backed by the document root.
///
/// One handler is shared read-only by every connection of every worker.
pub struct StaticHandler {
    resolver: PathResolver,
}

impl StaticHandler {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    /// Produces the response for a request.
    ///
    /// Decision order: path confinement, then method, then filesystem.
    /// The content type always reflects the resolved path's extension,
    /// even on error responses; an unresolvable path falls back to
    /// `text/plain`.
    pub async fn handle(&self, request: &Request) -> Response {
        let resolved = self.resolver.resolve(&request.path);

        let content_type = resolved
            .as_deref()
            .map(mime::content_type_for)
            .unwrap_or(mime::DEFAULT_CONTENT_TYPE);

        let Some(path) = resolved else {
            return Response::forbidden(content_type);
        };

        if !request.method.is_allowed() {
            return Response::method_not_allowed(content_type);
        }

        match request.method {
            Method::HEAD => match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => Response::head(meta.len(), content_type),
                Ok(_) => Response::not_found(content_type),
                Err(err) => {
                    tracing::debug!(path = ?path, error = %err, "Stat failed");
                    Response::not_found(content_type)
                }
            },
            _ => match tokio::fs::read(&path).await {
                Ok(body) => Response::ok(body, content_type),
                Err(err) => {
                    // every read failure maps to 404, whatever the kind
                    tracing::debug!(path = ?path, error = %err, "Read failed");
                    Response::not_found(content_type)
                }
            },
        }
    }
}
