pub mod auth;
pub mod request_id;

pub use auth::{bearer_token, BearerAuth};
pub use request_id::{RequestId, RequestIdValue, REQUEST_ID_HEADER};
