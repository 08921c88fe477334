pub mod bindings;
pub mod client;
pub mod keys;
pub mod msg;

pub use client::{ExecuteClient, QueryClient};
