use contract_client::{CacheKey, Result, WireEnvelope};

use crate::msg::{ExtensionQueryMsg, QueryMsg};

pub const CONTRACT_NAME: &str = "marsVault";

const EXTENSION_METHOD: &str = "vault_extension";

pub fn contract() -> CacheKey {
    CacheKey::contract(CONTRACT_NAME)
}

pub fn address(address: Option<&str>) -> CacheKey {
    contract().with_address(address)
}

/// Prefix of every key of a vault standard `method`. All extension queries share the
/// `vaultExtension` prefix; use [`extension_method`] to select a single one of them.
pub fn method(address: Option<&str>, method: &str) -> Result<CacheKey> {
    self::address(address).with_method(method, None)
}

/// Prefix of every key of the extension query `method`, e.g. `userUnlocks`.
pub fn extension_method(address: Option<&str>, method: &str) -> Result<CacheKey> {
    self::method(address, EXTENSION_METHOD)?.with_method(method, None)
}

/// Full key of a query. Extension queries key on the nested method as its own fragment.
pub fn query(address: Option<&str>, msg: &QueryMsg) -> Result<CacheKey> {
    match msg {
        QueryMsg::VaultExtension(ExtensionQueryMsg::VaultInfo) => {
            extension_method(address, "vault_info")
        }
        QueryMsg::VaultExtension(extension @ ExtensionQueryMsg::UserUnlocks { .. }) => {
            let envelope = WireEnvelope::encode(extension)?;

            extension_method(address, envelope.method())?.with_args(envelope.args().clone())
        }
        msg => CacheKey::for_query(CONTRACT_NAME, address, msg),
    }
}
