// Waitline Infra-Memory - In-memory QueueStore adapter

mod queue_store;

pub use queue_store::MemoryQueueStore;
