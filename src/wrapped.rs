use std::error::Error as StdError;

use crate::classify::ErrorChain;
use crate::classify::options::DEFAULT_MAX_CHAIN_DEPTH;
use crate::taxonomy::shapes::shape_of;
use crate::taxonomy::{Fault, StructuredError};

/// Fallback code reported when the cause carries no structured code.
pub const DEFAULT_CODE: &str = "IMDSRequestError";

/// A failed instance-metadata fetch, normalized around its original cause.
///
/// `code()` and `fault()` defer to the first structured error found anywhere in the
/// cause chain and only fall back to [`DEFAULT_CODE`] / [`Fault::Unknown`] when there is none.
#[derive(Debug, thiserror::Error)]
#[error("failed to retrieve {request_key} from instance metadata {cause}")]
pub struct MetadataRequestError {
    request_key: String,
    #[source]
    cause: Box<dyn StdError + Send + Sync>,
    default_code: String,
    default_fault: Fault,
}

impl MetadataRequestError {
    pub fn new(
        request_key: impl Into<String>,
        cause: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            request_key: request_key.into(),
            cause: cause.into(),
            default_code: DEFAULT_CODE.to_string(),
            default_fault: Fault::Unknown,
        }
    }

    pub fn request_key(&self) -> &str {
        &self.request_key
    }

    /// The wrapped error, exactly as it was handed over.
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }

    fn structured_cause(&self) -> Option<&dyn StructuredError> {
        ErrorChain::new(&*self.cause, DEFAULT_MAX_CHAIN_DEPTH)
            .find_map(|link| shape_of(link).as_structured())
    }
}

impl StructuredError for MetadataRequestError {
    fn code(&self) -> &str {
        match self.structured_cause() {
            Some(structured) => structured.code(),
            None => self.default_code.as_str(),
        }
    }

    fn fault(&self) -> Fault {
        match self.structured_cause() {
            Some(structured) => structured.fault(),
            None => self.default_fault,
        }
    }
}
