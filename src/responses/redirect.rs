use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};

pub const SESSION_COOKIE: &str = "session";

/// 302 to a local path.
pub fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// Attach a freshly issued session cookie.
pub fn with_session_cookie(mut resp: Response, token: &str) -> Result<Response, ServerError> {
    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    match cookie.parse() {
        Ok(value) => {
            resp.headers_mut().append("Set-Cookie", value);
        }
        Err(_) => return Err(ServerError::InternalError),
    }
    Ok(resp)
}

/// Accept only same-site absolute paths as a post-action destination.
pub fn safe_return_path(candidate: Option<&str>) -> Option<&str> {
    candidate
        .map(str::trim)
        .filter(|p| p.starts_with('/') && !p.starts_with("//") && !p.contains('\\'))
}
