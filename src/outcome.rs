use std::error::Error as StdError;

use crate::classify::{Classifier, ErrorChain};
use crate::taxonomy::shapes::shape_of;
use crate::taxonomy::{Fault, StructuredError};
use crate::wrapped::MetadataRequestError;

/// Inspectable, serializable view of a wrapped metadata failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ErrorSummary {
    pub request_key: String,
    pub code: String,
    pub message: String,
    pub fault: Fault,
    /// Transport status of the first operation error in the chain, if any.
    pub status: Option<u16>,
    pub not_found: bool,
}

impl Classifier {
    /// Turn the result of a metadata fetch into `Ok(None)` when the item does not exist,
    /// and into a [`MetadataRequestError`] for every other failure.
    pub fn resolve<T, E>(
        &self,
        request_key: &str,
        result: Result<T, E>,
    ) -> Result<Option<T>, MetadataRequestError>
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        let cause = match result {
            Ok(value) => return Ok(Some(value)),
            Err(cause) => cause,
        };

        let wrapped = MetadataRequestError::new(request_key, cause);
        if self.is_not_found(wrapped.source()) {
            tracing::debug!(request_key, "metadata item not found, treating as absent");
            return Ok(None);
        }

        tracing::warn!(
            request_key,
            code = wrapped.code(),
            fault = %wrapped.fault(),
            error = %wrapped,
            "metadata request failed"
        );
        Err(wrapped)
    }

    pub fn summarize(&self, err: &MetadataRequestError) -> ErrorSummary {
        let status = ErrorChain::new(err, self.options().max_chain_depth)
            .find_map(|link| shape_of(link).as_operation())
            .and_then(|op| op.status_code());

        ErrorSummary {
            request_key: err.request_key().to_string(),
            code: err.code().to_string(),
            message: err.message(),
            fault: err.fault(),
            status,
            not_found: self.is_not_found(err.source()),
        }
    }
}

/// [`Classifier::resolve`] with default options.
pub fn resolve_metadata<T, E>(
    request_key: &str,
    result: Result<T, E>,
) -> Result<Option<T>, MetadataRequestError>
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    Classifier::default().resolve(request_key, result)
}
