pub mod in_memory;
pub mod provider;
pub mod resolver;
pub mod types;
