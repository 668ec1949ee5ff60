pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod request;
pub(crate) mod response;
pub(crate) mod url;

pub use client::ApiClient;
pub use error::{ClientError, Result as ClientResult};
pub use request::{ApiRequest, RequestBody};
pub use response::{GENERIC_ERROR_MESSAGE, error_message};
pub use url::resolve_url;
