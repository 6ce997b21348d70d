/// Mainnet block-engine JSON-RPC base URL.
pub const MAINNET_URL: &str = "https://mainnet.block-engine.jito.wtf/api/v1";
/// Amsterdam block-engine JSON-RPC base URL.
pub const AMSTERDAM_URL: &str = "https://amsterdam.mainnet.block-engine.jito.wtf/api/v1";
/// Frankfurt block-engine JSON-RPC base URL.
pub const FRANKFURT_URL: &str = "https://frankfurt.mainnet.block-engine.jito.wtf/api/v1";
/// New York block-engine JSON-RPC base URL.
pub const NY_URL: &str = "https://ny.mainnet.block-engine.jito.wtf/api/v1";
/// Tokyo block-engine JSON-RPC base URL.
pub const TOKYO_URL: &str = "https://tokyo.mainnet.block-engine.jito.wtf/api/v1";
/// Salt Lake City block-engine JSON-RPC base URL.
pub const SLC_URL: &str = "https://slc.mainnet.block-engine.jito.wtf/api/v1";

/// The endpoints of the block engine, relative to the base URL.
pub const BUNDLES: &str = "/bundles";
/// Bundle status endpoint.
pub const BUNDLE_STATUSES: &str = "/getBundleStatuses";
/// Inflight bundle status endpoint.
pub const INFLIGHT_BUNDLE_STATUSES: &str = "/getInflightBundleStatuses";
/// Single transaction endpoint.
pub const TRANSACTIONS: &str = "/transactions";
/// Simulation is served from the bare base URL.
pub const SIMULATE: &str = "";

/// `getTipAccounts`
pub const GET_TIP_ACCOUNTS: &str = "getTipAccounts";
/// `getBundleStatuses`
pub const GET_BUNDLE_STATUSES: &str = "getBundleStatuses";
/// `getInflightBundleStatuses`
pub const GET_INFLIGHT_BUNDLE_STATUSES: &str = "getInflightBundleStatuses";
/// `sendBundle`
pub const SEND_BUNDLE: &str = "sendBundle";
/// `simulateBundle`
pub const SIMULATE_BUNDLE: &str = "simulateBundle";
/// `sendTransaction`
pub const SEND_TRANSACTION: &str = "sendTransaction";

/// Header carrying the access token.
pub const AUTH_HEADER: &str = "x-jito-auth";
/// Query parameter carrying the access token.
pub const UUID_QUERY_KEY: &str = "uuid";
