use std::error::Error as StdError;

use crate::error::Error;
use crate::taxonomy::{Fault, OperationFailure, StructuredError};
use crate::wrapped::MetadataRequestError;

/// Transport-level failure of a named service operation.
///
/// Renders the nested source inline so the transport status indicator
/// (`StatusCode: NNN`) stays visible in the operation's own text.
#[derive(Debug, thiserror::Error)]
#[error("operation error {service_id}: {operation_name}, {source}")]
pub struct OperationError {
    pub service_id: String,
    pub operation_name: String,
    pub source: Box<dyn StdError + Send + Sync>,
}

impl OperationError {
    pub fn new(
        service_id: impl Into<String>,
        operation_name: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            operation_name: operation_name.into(),
            source: source.into(),
        }
    }
}

impl OperationFailure for OperationError {}

/// Structured error as returned in an API error body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
#[error("api error {code}: {message}")]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub fault: Fault,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>, fault: Fault) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            fault,
        }
    }

    /// Parse a `{"code": .., "message": .., "fault": ..}` body. `fault` may be omitted.
    pub fn from_json(body: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(body)?)
    }
}

impl StructuredError for ApiError {
    fn code(&self) -> &str {
        &self.code
    }

    fn fault(&self) -> Fault {
        self.fault
    }

    fn message(&self) -> String {
        self.message.clone()
    }
}

/// The closed set of error shapes the classifier recognises.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Operation(&'a OperationError),
    Api(&'a ApiError),
    Metadata(&'a MetadataRequestError),
    Opaque,
}

impl<'a> Shape<'a> {
    pub fn as_operation(self) -> Option<&'a dyn OperationFailure> {
        match self {
            Self::Operation(op) => Some(op as &dyn OperationFailure),
            Self::Api(_) | Self::Metadata(_) | Self::Opaque => None,
        }
    }

    pub fn as_structured(self) -> Option<&'a dyn StructuredError> {
        match self {
            Self::Api(api) => Some(api as &dyn StructuredError),
            Self::Metadata(wrapped) => Some(wrapped as &dyn StructuredError),
            Self::Operation(_) | Self::Opaque => None,
        }
    }
}

/// Match a single chain link against the known shapes, in order.
pub fn shape_of<'a>(err: &'a (dyn StdError + 'static)) -> Shape<'a> {
    if let Some(op) = err.downcast_ref::<OperationError>() {
        return Shape::Operation(op);
    }
    if let Some(api) = err.downcast_ref::<ApiError>() {
        return Shape::Api(api);
    }
    if let Some(wrapped) = err.downcast_ref::<MetadataRequestError>() {
        return Shape::Metadata(wrapped);
    }
    Shape::Opaque
}
