use crate::{client::BlockEngineClient, constants, BundleRpcError};
use std::{borrow::Cow, time::Duration};

/// Configuration for a [`BlockEngineClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEngineConfig {
    /// Base URL of the block-engine JSON-RPC API.
    pub url: Cow<'static, str>,
    /// Access token, sent as the `uuid` query parameter and the
    /// `x-jito-auth` header.
    pub uuid: Option<String>,
    /// Log requests and responses.
    pub debug: bool,
    /// Per-request timeout applied to the HTTP transport.
    pub timeout: Option<Duration>,
}

impl BlockEngineConfig {
    /// Create a new config for the given base URL.
    pub fn new(url: impl Into<Cow<'static, str>>) -> Self {
        Self { url: url.into(), uuid: None, debug: false, timeout: None }
    }

    /// Config for the public mainnet block engine.
    pub const fn mainnet() -> Self {
        Self {
            url: Cow::Borrowed(constants::MAINNET_URL),
            uuid: None,
            debug: false,
            timeout: None,
        }
    }

    /// Set the access token.
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    /// Enable or disable debug logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the HTTP transport and connect a client.
    pub fn connect(self) -> Result<BlockEngineClient, BundleRpcError> {
        let url = reqwest::Url::parse(&self.url)?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let mut engine = BlockEngineClient::new_with_client(url, client).with_debug(self.debug);
        if let Some(uuid) = self.uuid {
            engine = engine.with_uuid(uuid);
        }
        Ok(engine)
    }
}

impl Default for BlockEngineConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}
