//! Authorization issuance options and startup validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{client_properties, code_types, endpoint_paths, formats};

/// Raised at startup when a required option is unset or left at a zero
/// value. The process must refuse to start rather than run with undefined
/// behavior.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bad or missing configuration: {option}")]
    MissingOption { option: &'static str },
}

/// Maximum accepted lengths for caller-supplied inputs.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct InputLengthRestrictions {
    /// Maximum length of the free-text description.
    pub description: usize,

    /// Maximum length of the return URL.
    pub return_url: usize,

    /// Maximum length of the transport addressing data.
    pub transport_data: usize,
}

impl Default for InputLengthRestrictions {
    fn default() -> Self {
        Self {
            description: 200,
            return_url: 400,
            transport_data: 200,
        }
    }
}

impl InputLengthRestrictions {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.description == 0 {
            return Err(ConfigError::MissingOption {
                option: "input_length_restrictions.description",
            });
        }
        if self.return_url == 0 {
            return Err(ConfigError::MissingOption {
                option: "input_length_restrictions.return_url",
            });
        }
        if self.transport_data == 0 {
            return Err(ConfigError::MissingOption {
                option: "input_length_restrictions.transport_data",
            });
        }
        Ok(())
    }
}

/// Options governing out-of-band authorization code issuance.
///
/// Every field participates in [`AuthorizationOptions::validate`]; a zero or
/// empty value is treated as misconfiguration and rejected at startup, never
/// at issuance time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorizationOptions {
    /// Default downstream redemption retry budget.
    pub allowed_retries: i64,

    /// Client property name that overrides `allowed_retries`.
    pub allowed_retries_property_name: String,

    /// Default lifetime of an issued record, in seconds.
    pub default_lifetime: i64,

    /// Client property name that overrides `default_lifetime`.
    pub lifetime_property_name: String,

    /// User-code type used when the client does not configure one.
    pub default_user_code_type: String,

    /// System default SMS message format.
    pub default_user_code_sms_format: String,

    /// System default email message format.
    pub default_user_code_email_format: String,

    /// Client property name overriding the default SMS format.
    pub user_code_sms_format_property_name: String,

    /// Client property name overriding the default email format.
    pub user_code_email_format_property_name: String,

    /// Polling interval returned to the caller, in seconds.
    pub interval: i64,

    /// URI where the user enters the code.
    pub verification_uri: String,

    /// URI where a redeemed grant is activated.
    pub activation_uri: String,

    /// Transport channels enabled for delivery.
    pub transports: Vec<String>,

    /// Maximum accepted input lengths.
    #[serde(default)]
    pub input_length_restrictions: InputLengthRestrictions,
}

impl Default for AuthorizationOptions {
    fn default() -> Self {
        Self {
            allowed_retries: 3,
            allowed_retries_property_name: client_properties::ALLOWED_RETRIES.to_string(),
            default_lifetime: 300,
            lifetime_property_name: client_properties::LIFETIME.to_string(),
            default_user_code_type: code_types::NUMERIC.to_string(),
            default_user_code_sms_format: formats::USER_CODE_SMS.to_string(),
            default_user_code_email_format: formats::USER_CODE_EMAIL.to_string(),
            user_code_sms_format_property_name: client_properties::USER_CODE_SMS_FORMAT
                .to_string(),
            user_code_email_format_property_name: client_properties::USER_CODE_EMAIL_FORMAT
                .to_string(),
            interval: 5,
            verification_uri: endpoint_paths::VERIFICATION.to_string(),
            activation_uri: endpoint_paths::ACTIVATION.to_string(),
            transports: vec!["sms".to_string(), "email".to_string()],
            input_length_restrictions: InputLengthRestrictions::default(),
        }
    }
}

impl AuthorizationOptions {
    /// Validate the options eagerly at startup.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - All options carry usable values
    /// * `Err(ConfigError)` - The first unset or zero option found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_retries <= 0 {
            return Err(ConfigError::MissingOption {
                option: "allowed_retries",
            });
        }
        if self.allowed_retries_property_name.is_empty() {
            return Err(ConfigError::MissingOption {
                option: "allowed_retries_property_name",
            });
        }
        if self.default_lifetime <= 0 {
            return Err(ConfigError::MissingOption {
                option: "default_lifetime",
            });
        }
        if self.lifetime_property_name.is_empty() {
            return Err(ConfigError::MissingOption {
                option: "lifetime_property_name",
            });
        }
        if self.default_user_code_type.is_empty() {
            return Err(ConfigError::MissingOption {
                option: "default_user_code_type",
            });
        }
        if self.default_user_code_sms_format.is_empty() {
            return Err(ConfigError::MissingOption {
                option: "default_user_code_sms_format",
            });
        }
        if self.default_user_code_email_format.is_empty() {
            return Err(ConfigError::MissingOption {
                option: "default_user_code_email_format",
            });
        }
        if self.user_code_sms_format_property_name.is_empty() {
            return Err(ConfigError::MissingOption {
                option: "user_code_sms_format_property_name",
            });
        }
        if self.user_code_email_format_property_name.is_empty() {
            return Err(ConfigError::MissingOption {
                option: "user_code_email_format_property_name",
            });
        }
        if self.interval <= 0 {
            return Err(ConfigError::MissingOption { option: "interval" });
        }
        if self.verification_uri.is_empty() {
            return Err(ConfigError::MissingOption {
                option: "verification_uri",
            });
        }
        if self.activation_uri.is_empty() {
            return Err(ConfigError::MissingOption {
                option: "activation_uri",
            });
        }
        if self.transports.is_empty() {
            return Err(ConfigError::MissingOption {
                option: "transports",
            });
        }
        self.input_length_restrictions.validate()
    }
}
