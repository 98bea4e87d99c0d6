use thiserror::Error;

/// No catalog record is routed under the requested slug.
///
/// A normal outcome, rendered as the "page not found" document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no landing page for slug {slug:?}")]
pub struct NotFoundError {
    pub slug: String,
}
