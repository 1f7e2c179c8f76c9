mod error;
mod health;

pub use error::{ErrorResponse, MessageResponse};
pub use health::HealthResponse;
