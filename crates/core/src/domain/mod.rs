// Domain Layer - Pure business logic and entities

pub mod customer;
pub mod error;
pub mod queue;

// Re-exports
pub use customer::{Customer, CustomerId, CustomerStatus};
pub use error::DomainError;
pub use queue::{Queue, QueueId};
