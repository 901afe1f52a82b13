pub mod errors;
pub mod fan_out;

pub use errors::DomainError;
pub use fan_out::join_all_or_first_error;
