#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod classify;
pub mod error;
pub mod outcome;
pub mod taxonomy;
pub mod wrapped;

pub use classify::{Classifier, ClassifyOptions, ErrorChain, is_not_found};
pub use error::Error;
pub use outcome::{ErrorSummary, resolve_metadata};
pub use taxonomy::shapes::{ApiError, OperationError, Shape, shape_of};
pub use taxonomy::{Fault, NOT_FOUND_CODE, NOT_FOUND_STATUS, OperationFailure, StructuredError};
pub use wrapped::{DEFAULT_CODE, MetadataRequestError};
