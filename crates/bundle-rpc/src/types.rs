//! Typed results of the block-engine methods.
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::BundleRpcError;

/// A tip account, selected from the list returned by `getTipAccounts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TipAccount {
    /// The account address.
    pub address: String,
}

impl TipAccount {
    /// Create a new tip account.
    pub const fn new(address: String) -> Self {
        Self { address }
    }

    /// Pick one account uniformly at random from `addresses`.
    pub fn choose(addresses: &[String]) -> Result<Self, BundleRpcError> {
        if addresses.is_empty() {
            return Err(BundleRpcError::NoTipAccounts);
        }
        let idx = rand::rng().random_range(0..addresses.len());
        Ok(Self::new(addresses[idx].clone()))
    }
}

impl From<TipAccount> for String {
    fn from(account: TipAccount) -> Self {
        account.address
    }
}

/// The slot context attached to status responses.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RpcContext {
    /// The slot at which the response was produced.
    pub slot: u64,
}

/// Response of `getBundleStatuses`. Entries line up with the requested ids;
/// unknown bundles are `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BundleStatuses {
    /// Slot context.
    pub context: RpcContext,
    /// Per-bundle statuses. A null list decodes as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: Vec<Option<BundleStatus>>,
}

impl BundleStatuses {
    /// Iterate over the statuses of known bundles.
    pub fn known(&self) -> impl Iterator<Item = &BundleStatus> {
        self.value.iter().flatten()
    }

    /// Find the status of a bundle by id.
    pub fn get(&self, bundle_id: &str) -> Option<&BundleStatus> {
        self.known().find(|status| status.bundle_id == bundle_id)
    }
}

/// The status of a single landed bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BundleStatus {
    /// The bundle id.
    pub bundle_id: String,
    /// Signatures of the transactions in the bundle.
    #[serde(default, deserialize_with = "null_as_default")]
    pub transactions: Vec<String>,
    /// The slot the bundle landed in.
    pub slot: u64,
    /// The commitment level reached.
    pub confirmation_status: ConfirmationStatus,
    /// The execution result. Missing or null decodes as an empty object.
    #[serde(default, deserialize_with = "null_as_default")]
    pub err: BundleErr,
}

/// Decode `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Commitment level of a landed bundle.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationStatus {
    /// Processed by a leader.
    Processed,
    /// Voted on by a supermajority.
    Confirmed,
    /// Rooted.
    Finalized,
    /// Any status this client does not know about.
    #[serde(other)]
    Unknown,
}

/// The `err` member of a [`BundleStatus`]. The only defined member is `Ok`,
/// which marks the absence of an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct BundleErr(pub Map<String, Value>);

impl BundleErr {
    /// The `Ok` marker.
    pub fn ok() -> Self {
        let mut map = Map::new();
        map.insert("Ok".to_string(), Value::Null);
        Self(map)
    }

    /// True if the `Ok` marker is present.
    pub fn is_ok(&self) -> bool {
        self.0.contains_key("Ok")
    }
}

/// Response of `getInflightBundleStatuses`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InflightBundleStatuses {
    /// Slot context.
    pub context: RpcContext,
    /// Per-bundle statuses.
    pub value: Vec<InflightBundleStatus>,
}

/// The status of a bundle that has not been finalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InflightBundleStatus {
    /// The bundle id.
    pub bundle_id: String,
    /// The bundle's state.
    pub status: InflightState,
    /// The slot the bundle landed in, if it has.
    #[serde(default)]
    pub landed_slot: Option<u64>,
}

/// States of an inflight bundle.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InflightState {
    /// Not found, or outside the lookback window.
    Invalid,
    /// Not yet landed.
    Pending,
    /// Rejected or expired.
    Failed,
    /// Landed on chain.
    Landed,
    /// Any state this client does not know about.
    #[serde(other)]
    Unknown,
}
