//! Request and response types shared by the admin API

pub mod error;
pub mod validated;

pub use error::{ApiError, ApiErrorResponse, ApiErrors};
pub use validated::{RequestShape, Validated};
