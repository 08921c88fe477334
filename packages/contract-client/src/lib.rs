pub mod binding;
pub mod cache_key;
pub mod client;
pub mod codec;
pub mod config;
pub mod cosmos;
pub mod error;
pub mod fee;
pub mod transport;

pub use binding::{MutationOperation, ReadOperation};
pub use cache_key::{CacheKey, KeyFragment};
pub use client::{ContractHandle, ExecuteClient, QueryClient, SigningIdentity};
pub use codec::WireEnvelope;
pub use config::GrpcConfig;
pub use error::{Error, Result};
pub use fee::{ExecuteOptions, Fee, StdFee};
pub use transport::{ExecuteTransport, QueryTransport, TxEvent, TxResult};
