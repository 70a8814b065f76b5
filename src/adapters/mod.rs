// Adapters layer: concrete implementations of the host ports.

pub mod memory;
