use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GrpcConfig {
    pub url: Url,
    /// Upper bound for a single request. The client layer itself never times out a call.
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            url: Url::parse("http://localhost:9090").expect("default grpc url must be valid"),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }
}
