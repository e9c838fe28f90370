use crate::error::ApiError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use bakery_service::ServiceError;

/// The `{id}` segment of a record route, kept as written until a handler
/// resolves it. Anything that is not an `i32` cannot name a stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId {
    raw: String,
    id: Option<i32>,
}

impl RecordId {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let id = raw.parse().ok();
        Self { raw, id }
    }

    /// The numeric id, or the not-found error built from the raw segment.
    pub fn resolve<F>(self, not_found: F) -> Result<i32, ApiError>
    where
        F: FnOnce(String) -> ServiceError,
    {
        match self.id {
            Some(id) => Ok(id),
            None => Err(not_found(self.raw).into()),
        }
    }
}

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "undecodable record id");
                ApiError::NotFound("Resource not found.".to_owned())
            })?;
        Ok(Self::parse(raw))
    }
}
