use contract_client::{CacheKey, Result};

use crate::msg::QueryMsg;

pub const CONTRACT_NAME: &str = "marsPerps";

pub fn contract() -> CacheKey {
    CacheKey::contract(CONTRACT_NAME)
}

pub fn address(address: Option<&str>) -> CacheKey {
    contract().with_address(address)
}

pub fn method(address: Option<&str>, method: &str) -> Result<CacheKey> {
    self::address(address).with_method(method, None)
}

pub fn query(address: Option<&str>, msg: &QueryMsg) -> Result<CacheKey> {
    CacheKey::for_query(CONTRACT_NAME, address, msg)
}
