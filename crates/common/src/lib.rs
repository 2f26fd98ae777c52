pub mod environment;
mod environment_variables;
mod error;
mod invocation_span;
pub mod models;

pub use error::Top10Error;
pub use invocation_span::invocation_span;
