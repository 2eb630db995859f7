// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Queue not found: {0}")]
    QueueNotFound(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
