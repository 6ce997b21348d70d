use crate::{
    constants::{SEND_BUNDLE, SEND_TRANSACTION},
    BundleRpcError,
};
use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use serde_json::{json, value::RawValue, Value};

/// The JSON-RPC version tag.
pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonRpcRequest {
    /// Always [`JSONRPC_VERSION`].
    pub jsonrpc: String,
    /// The request id.
    pub id: u64,
    /// The remote method.
    pub method: String,
    /// Method-specific parameters.
    pub params: Value,
}

impl JsonRpcRequest {
    /// Create a new request, shaping `params` for `method`.
    pub fn new(id: u64, method: &str, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.to_string(),
            params: shape_params(method, params),
        }
    }
}

/// The error member of a JSON-RPC response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RpcErrorObject {
    /// The error code.
    pub code: i64,
    /// The error message.
    pub message: String,
    /// Additional error data, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A JSON-RPC 2.0 response envelope. The result is kept as raw JSON so that
/// callers may decode it lazily, or not at all.
///
/// Only a JSON object is accepted as an envelope. Members other than `result`
/// and `error` are ignored.
#[derive(Debug)]
pub struct JsonRpcResponse {
    /// The raw result.
    pub result: Option<Box<RawValue>>,
    /// The error, if any.
    pub error: Option<RpcErrorObject>,
}

impl<'de> Deserialize<'de> for JsonRpcResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Result,
            Error,
            #[serde(other)]
            Other,
        }

        struct EnvelopeVisitor;

        impl<'de> Visitor<'de> for EnvelopeVisitor {
            type Value = JsonRpcResponse;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a JSON-RPC response object")
            }

            fn visit_map<M>(self, mut map: M) -> Result<JsonRpcResponse, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut result: Option<Option<Box<RawValue>>> = None;
                let mut error: Option<Option<RpcErrorObject>> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Result => {
                            if result.is_some() {
                                return Err(serde::de::Error::duplicate_field("result"));
                            }
                            result = Some(map.next_value()?);
                        }
                        Field::Error => {
                            if error.is_some() {
                                return Err(serde::de::Error::duplicate_field("error"));
                            }
                            error = Some(map.next_value()?);
                        }
                        Field::Other => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(JsonRpcResponse { result: result.flatten(), error: error.flatten() })
            }
        }

        deserializer.deserialize_map(EnvelopeVisitor)
    }
}

impl JsonRpcResponse {
    /// Convert the envelope into its result. The error member wins when both
    /// are present. A missing result is returned as raw `null`.
    pub fn into_result(self) -> Result<Box<RawValue>, BundleRpcError> {
        if let Some(error) = self.error {
            return Err(BundleRpcError::Rpc(error));
        }
        match self.result {
            Some(result) => Ok(result),
            None => RawValue::from_string("null".to_string()).map_err(BundleRpcError::Decoding),
        }
    }
}

/// The encoding directive appended to transaction submissions.
pub fn base64_encoding() -> Value {
    json!({ "encoding": "base64" })
}

/// Apply method-specific shaping. Only `sendBundle` and `sendTransaction`
/// are touched: they get the base64 encoding directive appended.
pub fn shape_params(method: &str, params: Value) -> Value {
    if method != SEND_BUNDLE && method != SEND_TRANSACTION {
        return params;
    }
    match params {
        Value::Array(mut items) => {
            items.push(base64_encoding());
            Value::Array(items)
        }
        Value::Null => Value::Array(vec![base64_encoding()]),
        other => Value::Array(vec![other, base64_encoding()]),
    }
}

/// Flatten transaction groups into a single list of transactions.
pub fn flatten_groups<I, G, S>(groups: I) -> Vec<String>
where
    I: IntoIterator<Item = G>,
    G: IntoIterator<Item = S>,
    S: Into<String>,
{
    groups.into_iter().flat_map(|group| group.into_iter().map(Into::into)).collect()
}

/// Parameters for `getInflightBundleStatuses`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InflightStatusParams {
    /// Query by bundle id. Sent as `[[id, ...]]`.
    BundleIds(Vec<String>),
    /// Caller-supplied positional parameters, sent as-is.
    Positional(Vec<Value>),
}

impl InflightStatusParams {
    /// Query the given bundle ids.
    pub fn bundle_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::BundleIds(ids.into_iter().map(Into::into).collect())
    }

    /// Check the params are well-formed.
    pub fn validate(&self) -> Result<(), BundleRpcError> {
        match self {
            Self::BundleIds(ids) if ids.is_empty() => {
                Err(BundleRpcError::Validation("at least one bundle id is required"))
            }
            Self::BundleIds(ids) if ids.iter().any(|id| id.trim().is_empty()) => {
                Err(BundleRpcError::Validation("bundle ids must not be blank"))
            }
            Self::Positional(params) if params.is_empty() => {
                Err(BundleRpcError::Validation("positional params must not be empty"))
            }
            _ => Ok(()),
        }
    }

    /// Validate and convert to the JSON params value.
    pub fn into_params(self) -> Result<Value, BundleRpcError> {
        self.validate()?;
        Ok(match self {
            Self::BundleIds(ids) => json!([ids]),
            Self::Positional(params) => Value::Array(params),
        })
    }
}

impl From<Vec<String>> for InflightStatusParams {
    fn from(ids: Vec<String>) -> Self {
        Self::BundleIds(ids)
    }
}
