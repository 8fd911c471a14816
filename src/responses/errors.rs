use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML error page.
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => {
            "The page you're looking for doesn't exist or has been removed.".to_string()
        }
        ServerError::BadRequest(msg) | ServerError::Forbidden(msg) => msg.clone(),
        // Storage details stay in the logs.
        ServerError::DbError(_) | ServerError::InternalError => {
            "Something went wrong on our side. Please try again.".to_string()
        }
    };

    let body = error_page(status, &message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
