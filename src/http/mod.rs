pub(crate) mod request;
pub(crate) mod response;

pub use request::{HttpRequest, PageKind};
pub use response::HttpResponse;
