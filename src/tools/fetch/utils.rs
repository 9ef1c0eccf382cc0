use reqwest::StatusCode;

/// Human-readable reason for a non-success upstream status.
pub(super) fn describe_status(status: StatusCode) -> String {
    let reason = match status {
        StatusCode::TOO_MANY_REQUESTS => "rate limited",
        StatusCode::FORBIDDEN => "forbidden",
        StatusCode::NOT_FOUND => "not found",
        StatusCode::UNAUTHORIZED => "unauthorized",
        StatusCode::BAD_REQUEST => "bad request",
        s if s.is_server_error() => "server error",
        s if s.is_redirection() => "unfollowed redirect",
        _ => "unexpected status",
    };
    format!("upstream responded with status {} ({})", status.as_u16(), reason)
}

/// Join the origin and a request path without doubling or dropping the slash.
pub(super) fn join_url(origin: &str, path: &str) -> String {
    let origin = origin.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{origin}{path}")
    } else {
        format!("{origin}/{path}")
    }
}
