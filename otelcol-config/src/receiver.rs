//! Receiver configuration.
//!
//! Receivers share two flattened blocks: the generic receiver identity and
//! the protocol server settings (endpoint, optional TLS).

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Default Zipkin HTTP endpoint.
pub const ZIPKIN_DEFAULT_ENDPOINT: &str = "0.0.0.0:9411";

/// Configured receivers. A receiver is enabled when its section is present.
#[derive(Default, Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct ReceiversConfig {
    /// Zipkin receiver.
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipkin: Option<ZipkinReceiverConfig>,
}

/// Identity shared by every receiver.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct ReceiverSettings {
    /// Receiver type.
    #[serde(rename = "type")]
    #[validate(custom(function = validation::validate_non_blank))]
    pub type_name: String,

    /// Receiver instance name.
    #[validate(custom(function = validation::validate_non_blank))]
    pub name: String,
}

/// Server side of a receiver protocol.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct ProtocolServerSettings {
    /// `[host]:port` the receiver listens on.
    #[validate(custom(function = validation::validate_endpoint))]
    pub endpoint: String,

    /// TLS for the listener; plaintext when absent.
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_credentials: Option<TlsCredentials>,
}

/// Certificate and key for a TLS listener.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct TlsCredentials {
    #[validate(custom(function = validation::validate_non_blank))]
    pub cert_file: String,

    #[validate(custom(function = validation::validate_non_blank))]
    pub key_file: String,
}

/// Zipkin receiver configuration.
///
/// Keys missing from a configured `zipkin` section are filled from
/// [`ZipkinReceiverConfig::default`] at load time.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct ZipkinReceiverConfig {
    #[serde(flatten)]
    #[validate(nested)]
    pub receiver: ReceiverSettings,

    #[serde(flatten)]
    #[validate(nested)]
    pub protocol: ProtocolServerSettings,
}

fn zipkin_receiver_settings() -> ReceiverSettings {
    ReceiverSettings {
        type_name: "zipkin".into(),
        name: "zipkin".into(),
    }
}

fn zipkin_protocol_settings() -> ProtocolServerSettings {
    ProtocolServerSettings {
        endpoint: ZIPKIN_DEFAULT_ENDPOINT.into(),
        tls_credentials: None,
    }
}

impl Default for ZipkinReceiverConfig {
    fn default() -> Self {
        Self {
            receiver: zipkin_receiver_settings(),
            protocol: zipkin_protocol_settings(),
        }
    }
}

impl ZipkinReceiverConfig {
    pub fn endpoint(&self) -> &str {
        &self.protocol.endpoint
    }

    pub fn is_tls(&self) -> bool {
        self.protocol.tls_credentials.is_some()
    }
}
