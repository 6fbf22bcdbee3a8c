pub mod errors;
pub mod html;
pub mod json;
pub mod redirect;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;

// Normal HTML response
pub use html::{html_response, text_response};
pub use json::json_response;
pub use redirect::see_other;
pub use xlsx::xlsx_response;
