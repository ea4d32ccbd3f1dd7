//! HTTP layer — request descriptors, transport, fetch-and-decode pipeline.

pub mod pipeline;
pub mod request;
pub mod transport;

pub use pipeline::{decode, Pipeline};
pub use request::{
    build_detail_request, build_history_request, build_list_request, HttpMethod,
    RequestDescriptor,
};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{HttpRequest, Transport};
