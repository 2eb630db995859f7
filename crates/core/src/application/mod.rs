// Application Layer - Use Cases

pub mod registry;

// Re-exports
pub use registry::QueueRegistry;
