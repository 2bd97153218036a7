use url::Url;

/// What the fetched page is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Listing,
    Course,
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    pub kind: PageKind,
}

impl HttpRequest {
    pub fn new(url: Url, kind: PageKind) -> Self {
        Self { url, kind }
    }
}
