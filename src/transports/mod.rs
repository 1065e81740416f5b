pub mod http;
#[cfg(test)]
pub mod mock;

pub use http::ReqwestTransport;
#[cfg(test)]
pub use mock::{MockTransport, RecordedRequest};
