pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::{html_error_response, ResultResp};

pub use html::{css_response, html_response, html_response_with_status};
pub use redirect::{redirect, safe_return_path, with_session_cookie};
