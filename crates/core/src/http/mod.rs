//! HTTP port used for token exchange and profile requests

pub mod ports;

pub use ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody};
