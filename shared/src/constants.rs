//! Protocol constants shared by the issuance pipeline and its callers.

/// Client property names recognized by the issuance pipeline.
///
/// Clients may carry these in their free-form property bag to override
/// the system-wide defaults on a per-client basis.
pub mod client_properties {
    /// Overrides the downstream redemption retry budget.
    pub const ALLOWED_RETRIES: &str = "allowed_retries";

    /// Overrides the issued record's lifetime in seconds.
    pub const LIFETIME: &str = "code_lifetime";

    /// Overrides the default SMS message format.
    pub const USER_CODE_SMS_FORMAT: &str = "user_code_sms_format";

    /// Overrides the default email message format.
    pub const USER_CODE_EMAIL_FORMAT: &str = "user_code_email_format";

    /// Prefix for transport-specific format overrides (`formats:{transport}`).
    pub const FORMATS_PREFIX: &str = "formats:";
}

/// Known transport channel names.
pub mod transport_types {
    pub const SMS: &str = "sms";
    pub const EMAIL: &str = "email";
}

/// Message format strings and the placeholder they substitute.
pub mod formats {
    /// Placeholder replaced with the generated user code when rendering.
    pub const USER_CODE_FIELD: &str = "{{user_code}}";

    /// System default SMS message format.
    pub const USER_CODE_SMS: &str = "Your verification code is {{user_code}}";

    /// System default email message format.
    pub const USER_CODE_EMAIL: &str =
        "Hello,\n\nYour verification code is {{user_code}}.\n\nIf you did not request this code you can ignore this message.";
}

/// Endpoint paths where the user completes or activates the grant.
pub mod endpoint_paths {
    pub const VERIFICATION: &str = "/connect/verify";
    pub const ACTIVATION: &str = "/connect/activate";
}

/// Query parameter names used on the user-interaction endpoints.
pub mod user_interaction {
    /// Parameter carrying the verification code on the complete URI.
    pub const VERIFICATION_CODE: &str = "verification_code";
}

/// Default user-code type registered by the code-generation service.
pub mod code_types {
    pub const NUMERIC: &str = "numeric";
    pub const ALPHANUMERIC: &str = "alphanumeric";
}
