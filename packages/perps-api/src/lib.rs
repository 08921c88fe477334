pub mod bindings;
pub mod client;
pub mod keys;
pub mod math;
pub mod msg;

pub use client::{ExecuteClient, QueryClient};
pub use math::SignedDecimal;
