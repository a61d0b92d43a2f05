//! REST API endpoint implementations.
//!
//! Each function issues exactly one HTTP call and returns the captured
//! [`ApiResponse`]; status dispatch happens in the `client` layer.

mod datasources;
mod readiness;
pub mod request;
mod service_accounts;
pub mod url_encoding;

pub use datasources::{create_data_source, get_data_source_by_name, get_data_source_health};
pub use readiness::{probe, wait_until_ready};
pub use request::{ApiResponse, send_request};
pub use service_accounts::{
    create_service_account, create_service_account_token, search_service_accounts,
};
pub use url_encoding::encode_path_segment;
