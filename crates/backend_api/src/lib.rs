pub mod error;
pub mod handlers;
pub mod prompt;
pub mod router;
pub mod server;

pub use error::{ApiError, Result};
pub use router::create_router;
pub use server::run_server;
