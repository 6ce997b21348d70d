use crate::{
    constants::{
        AUTH_HEADER, BUNDLES, BUNDLE_STATUSES, GET_BUNDLE_STATUSES, GET_INFLIGHT_BUNDLE_STATUSES,
        GET_TIP_ACCOUNTS, INFLIGHT_BUNDLE_STATUSES, MAINNET_URL, SEND_BUNDLE, SEND_TRANSACTION,
        SIMULATE, SIMULATE_BUNDLE, TRANSACTIONS, UUID_QUERY_KEY,
    },
    pretty::prettify_json,
    request::{base64_encoding, flatten_groups, InflightStatusParams, JsonRpcRequest},
    types::{BundleStatuses, InflightBundleStatuses, TipAccount},
    BundleRpcError, JsonRpcResponse, Result,
};
use serde::de::DeserializeOwned;
use serde_json::{json, value::RawValue, Value};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tracing::{debug, instrument, warn};

/// Block-engine JSON-RPC client.
///
/// Posts JSON-RPC requests to `{url}{endpoint}` and decodes the responses.
/// Cheap to clone; clones share the transport and the request id counter.
#[derive(Debug, Clone)]
pub struct BlockEngineClient {
    /// The base URL of the block engine.
    url: reqwest::Url,
    /// Access token, if any.
    uuid: Option<String>,
    /// Log requests and responses.
    debug: bool,
    /// The reqwest client used to send requests.
    client: reqwest::Client,
    /// Next JSON-RPC request id.
    next_id: Arc<AtomicU64>,
}

impl BlockEngineClient {
    /// Create a new client with the given URL and reqwest client.
    pub fn new_with_client(url: reqwest::Url, client: reqwest::Client) -> Self {
        Self { url, uuid: None, debug: false, client, next_id: Arc::new(AtomicU64::new(1)) }
    }

    /// Instantiate a new client with the given URL and a new reqwest client.
    pub fn new(url: reqwest::Url) -> Self {
        Self::new_with_client(url, reqwest::Client::new())
    }

    /// Create a new client given a string URL.
    pub fn new_from_string(url: &str) -> Result<Self> {
        let url = reqwest::Url::parse(url)?;
        Ok(Self::new(url))
    }

    /// Connect to the public mainnet block engine.
    pub fn mainnet() -> Result<Self> {
        Self::new_from_string(MAINNET_URL)
    }

    /// Set the access token.
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into()).filter(|uuid: &String| !uuid.is_empty());
        self
    }

    /// Enable or disable debug logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Enable or disable debug logging.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// True if requests and responses are logged.
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Get the base URL.
    pub const fn url(&self) -> &reqwest::Url {
        &self.url
    }

    /// Get the access token, if any.
    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    /// Get the client used to send requests
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Build the URL for an endpoint, attaching the access token. The endpoint
    /// is appended to the base path; any query on the base URL is kept.
    fn endpoint_url(&self, endpoint: &str) -> Result<reqwest::Url> {
        let mut url = self.url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                warn!(url = %self.url, "Base URL cannot carry a path");
                BundleRpcError::Validation("base URL cannot carry a path")
            })?;
            segments.pop_if_empty();
            let endpoint = endpoint.trim_matches('/');
            if !endpoint.is_empty() {
                segments.push(endpoint);
            }
        }
        if let Some(uuid) = &self.uuid {
            url.query_pairs_mut().append_pair(UUID_QUERY_KEY, uuid);
        }
        Ok(url)
    }

    /// Send a JSON-RPC request and return the raw result.
    ///
    /// `sendBundle` and `sendTransaction` params get the base64 encoding
    /// directive appended. All other params are sent unmodified.
    #[instrument(skip(self, params), fields(id = tracing::field::Empty))]
    pub async fn send_request(
        &self,
        endpoint: &str,
        method: &str,
        params: Value,
    ) -> Result<Box<RawValue>> {
        let url = self.endpoint_url(endpoint)?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::Span::current().record("id", id);

        let request = JsonRpcRequest::new(id, method, params);
        let body = serde_json::to_vec(&request).map_err(BundleRpcError::Encoding)?;

        if self.debug {
            debug!(%url, "Sending request");
            debug!(body = %String::from_utf8_lossy(&body), "Request body");
        }

        let mut req = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(uuid) = &self.uuid {
            req = req.header(AUTH_HEADER, uuid);
        }

        let resp =
            req.send().await.inspect_err(|e| warn!(%e, "Failed to send request to block engine"))?;
        let status = resp.status();
        if self.debug {
            debug!(%status, "Response status");
        }

        let bytes = resp
            .bytes()
            .await
            .inspect_err(|e| warn!(%e, "Failed to read response from block engine"))?;

        let envelope = match serde_json::from_slice::<JsonRpcResponse>(&bytes) {
            Ok(envelope) => envelope,
            Err(source) if !status.is_success() => {
                warn!(%status, %source, "Block engine returned an error status");
                return Err(BundleRpcError::HttpStatus {
                    status,
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                    source,
                });
            }
            Err(err) => {
                warn!(%err, "Failed to parse response from block engine");
                return Err(BundleRpcError::Decoding(err));
            }
        };

        let result = envelope
            .into_result()
            .inspect_err(|e| warn!(%e, "Block engine returned an error"))?;

        if self.debug {
            debug!(body = %prettify_json(result.get().as_bytes()), "Response body");
        }

        Ok(result)
    }

    /// Send a JSON-RPC request and decode the result into `T`.
    pub async fn send_request_typed<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: &str,
        params: Value,
    ) -> Result<T> {
        let raw = self.send_request(endpoint, method, params).await?;
        decode(&raw)
    }

    /// Get the tip accounts, as a raw JSON array of addresses.
    #[instrument(skip_all)]
    pub async fn get_tip_accounts(&self) -> Result<Box<RawValue>> {
        self.send_request(BUNDLES, GET_TIP_ACCOUNTS, Value::Null).await
    }

    /// Get one tip account, chosen uniformly at random.
    #[instrument(skip_all)]
    pub async fn get_random_tip_account(&self) -> Result<TipAccount> {
        let raw = self.get_tip_accounts().await?;
        // A null list is treated as an empty one.
        let addresses: Vec<String> = decode::<Option<_>>(&raw)?.unwrap_or_default();
        TipAccount::choose(&addresses)
    }

    /// Get the statuses of landed bundles.
    #[instrument(skip_all)]
    pub async fn get_bundle_statuses<I, S>(&self, bundle_ids: I) -> Result<BundleStatuses>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = bundle_ids.into_iter().map(Into::into).collect();
        self.send_request_typed(BUNDLE_STATUSES, GET_BUNDLE_STATUSES, json!([ids])).await
    }

    /// Get the statuses of inflight bundles, as raw JSON.
    #[instrument(skip_all)]
    pub async fn get_inflight_bundle_statuses(
        &self,
        params: InflightStatusParams,
    ) -> Result<Box<RawValue>> {
        let params = params.into_params()?;
        self.send_request(INFLIGHT_BUNDLE_STATUSES, GET_INFLIGHT_BUNDLE_STATUSES, params).await
    }

    /// Get the statuses of inflight bundles.
    #[instrument(skip_all)]
    pub async fn get_inflight_bundle_statuses_typed(
        &self,
        params: InflightStatusParams,
    ) -> Result<InflightBundleStatuses> {
        let raw = self.get_inflight_bundle_statuses(params).await?;
        decode(&raw)
    }

    /// Send a bundle. The groups are flattened into a single list of
    /// base64-encoded transactions. Returns the raw result, normally the
    /// bundle id.
    #[instrument(skip_all)]
    pub async fn send_bundle<I, G, S>(&self, groups: I) -> Result<Box<RawValue>>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let txs = flatten_groups(groups);
        self.send_request(BUNDLES, SEND_BUNDLE, json!([txs])).await
    }

    /// Simulate a bundle without submitting it. Shaped like
    /// [`Self::send_bundle`], posted to the base URL.
    #[instrument(skip_all)]
    pub async fn simulate_bundle<I, G, S>(&self, groups: I) -> Result<Box<RawValue>>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let txs = flatten_groups(groups);
        self.send_request(SIMULATE, SIMULATE_BUNDLE, json!([txs, base64_encoding()])).await
    }

    /// Send a single base64-encoded transaction. Returns the raw result,
    /// normally the signature.
    #[instrument(skip_all)]
    pub async fn send_transaction(&self, tx: impl Into<String>) -> Result<Box<RawValue>> {
        self.send_request(TRANSACTIONS, SEND_TRANSACTION, Value::String(tx.into())).await
    }
}

fn decode<T: DeserializeOwned>(raw: &RawValue) -> Result<T> {
    serde_json::from_str(raw.get())
        .inspect_err(|e| warn!(%e, "Failed to decode result from block engine"))
        .map_err(BundleRpcError::Decoding)
}
