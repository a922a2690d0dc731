//! Main issuance service implementation.

use std::sync::Arc;

use oob_shared::config::AuthorizationOptions;
use oob_shared::constants::user_interaction;
use oob_shared::utils::uri::remove_trailing_slash;

use crate::domain::entities::IssuanceRecord;
use crate::domain::value_objects::{AuthorizationResponse, DeliveryContext, ValidatedRequest};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CodeStore;
use crate::services::clock::Clock;
use crate::services::handle::HandleGenerationService;
use crate::services::hashing::UserCodeHasher;
use crate::services::message;
use crate::services::transport::{dispatch_fire_and_forget, Transporter};
use crate::services::user_code::UserCodeService;

/// Single entry point of the issuance pipeline.
///
/// One `issue` call runs its steps sequentially; concurrency arises only
/// across simultaneous calls sharing the code store. Persisting the record
/// and dispatching the message are fire-and-forget: the response can return
/// to the caller before either completes, and there is no compensating
/// rollback if the caller goes away in between.
pub struct IssuanceService<S: CodeStore + 'static> {
    /// Store for issuance records, shared with the redemption flow.
    code_store: Arc<S>,
    /// Registry of user-code generators by code type.
    user_codes: Arc<UserCodeService>,
    /// Capability-indexed set of delivery channels.
    transports: Vec<Arc<dyn Transporter>>,
    /// Opaque verification-code generator.
    handles: Arc<dyn HandleGenerationService>,
    /// One-way digest of user codes before storage.
    hasher: Arc<dyn UserCodeHasher>,
    /// Time source for record creation timestamps.
    clock: Arc<dyn Clock>,
    /// Validated issuance options.
    options: AuthorizationOptions,
}

impl<S: CodeStore + 'static> IssuanceService<S> {
    /// Create a new issuance service.
    ///
    /// # Arguments
    ///
    /// * `code_store` - Persistence for issuance records
    /// * `user_codes` - User-code generator registry
    /// * `transports` - Registered delivery channels
    /// * `handles` - Opaque handle generator
    /// * `hasher` - User-code digest function
    /// * `clock` - UTC time source
    /// * `options` - Options already validated at startup
    pub fn new(
        code_store: Arc<S>,
        user_codes: Arc<UserCodeService>,
        transports: Vec<Arc<dyn Transporter>>,
        handles: Arc<dyn HandleGenerationService>,
        hasher: Arc<dyn UserCodeHasher>,
        clock: Arc<dyn Clock>,
        options: AuthorizationOptions,
    ) -> Self {
        Self {
            code_store,
            user_codes,
            transports,
            handles,
            hasher,
            clock,
            options,
        }
    }

    /// Issue an out-of-band authorization code for a validated request.
    ///
    /// Steps:
    /// 1. Generate the opaque verification code.
    /// 2. Resolve lifetime from the client property override, else default.
    /// 3. Resolve the redemption retry budget the same way.
    /// 4. Generate a unique user code for the client's code type.
    /// 5. Build the record (hash only, never the plaintext code) and
    ///    persist it fire-and-forget.
    /// 6. Render the delivery message and dispatch it fire-and-forget. A
    ///    format resolution failure aborts the operation here, after the
    ///    record write was already started.
    /// 7. Assemble the response with both verification URI variants.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthorizationResponse)` - Code issued and dispatch attempted
    /// * `Err(DomainError)` - See the error taxonomy in [`crate::errors`]
    pub async fn issue(&self, request: &ValidatedRequest) -> DomainResult<AuthorizationResponse> {
        tracing::info!(
            transport = %request.transport,
            event = "issuance_started",
            "processing out-of-band authorization request"
        );

        let client = request.client.as_ref().ok_or_else(|| {
            DomainError::InvalidArgument {
                field: "client".to_string(),
            }
        })?;
        self.check_input_lengths(request)?;

        let verification_code = self.handles.generate().await?;
        tracing::debug!(
            client_id = %client.client_id,
            event = "verification_code_generated",
            "generated opaque verification code"
        );

        let lifetime =
            client.int_property_or(&self.options.lifetime_property_name, self.options.default_lifetime);
        let allowed_retries = client.int_property_or(
            &self.options.allowed_retries_property_name,
            self.options.allowed_retries,
        );
        tracing::debug!(
            client_id = %client.client_id,
            lifetime,
            allowed_retries,
            interval = self.options.interval,
            "resolved per-client issuance parameters"
        );

        let code_type = client
            .user_code_type
            .as_deref()
            .unwrap_or(&self.options.default_user_code_type);
        let user_code = self.generate_unique_user_code(code_type).await?;

        let record = IssuanceRecord {
            client_id: client.client_id.clone(),
            verification_code: verification_code.clone(),
            user_code_hash: self.hasher.hash(&user_code),
            created_at: self.clock.now_utc(),
            lifetime,
            allowed_retries,
            transport: request.transport.clone(),
            description: request.description.clone(),
            return_url: request.return_url.clone(),
            requested_scopes: request.requested_scopes.clone(),
        };

        // Fire-and-forget write: at-most-once, best-effort. A caller that
        // polls immediately after receiving the response may race this.
        let store = Arc::clone(&self.code_store);
        let key = verification_code.clone();
        let stored = record.clone();
        tokio::spawn(async move {
            if let Err(error) = store.store(&key, &stored).await {
                tracing::error!(
                    client_id = %stored.client_id,
                    error = %error,
                    event = "record_store_failed",
                    "failed to persist issuance record"
                );
            }
        });

        let format = message::resolve_format(client, &request.transport, &self.options)?;
        tracing::debug!(
            client_id = %client.client_id,
            source = ?format.source,
            "resolved message format"
        );
        let context = DeliveryContext {
            transport: request.transport.clone(),
            data: request.transport_data.clone(),
            provider: request.provider.clone(),
            body: message::render(&format.format, &user_code),
        };
        dispatch_fire_and_forget(&self.transports, context);

        let verification_uri = self.options.verification_uri.clone();
        let verification_uri_complete = format!(
            "{}?{}={}",
            remove_trailing_slash(&verification_uri),
            user_interaction::VERIFICATION_CODE,
            verification_code
        );

        tracing::info!(
            client_id = %client.client_id,
            transport = %request.transport,
            event = "issuance_completed",
            "out-of-band authorization code issued"
        );
        Ok(AuthorizationResponse {
            verification_code,
            verification_uri,
            verification_uri_complete,
            expires_in: lifetime,
            interval: self.options.interval,
        })
    }

    /// Generate a user code whose hash collides with no active record.
    ///
    /// Purely sequential: one candidate and one store round-trip per
    /// attempt, bounding worst-case latency under collision storms in
    /// small code spaces. Exhausting the generator's retry limit fails the
    /// issuance with nothing persisted.
    async fn generate_unique_user_code(&self, code_type: &str) -> DomainResult<String> {
        let generator = self.user_codes.generator(code_type).ok_or_else(|| {
            DomainError::Internal {
                message: format!("no user-code generator registered for type '{code_type}'"),
            }
        })?;

        let mut attempts = 0;
        while attempts < generator.retry_limit() {
            let candidate = generator.generate().await;
            let hash = self.hasher.hash(&candidate);
            let existing = self
                .code_store
                .find_by_user_code_hash(&hash, false)
                .await?;
            if existing.is_none() {
                return Ok(candidate);
            }
            tracing::debug!(
                code_type,
                attempt = attempts + 1,
                event = "user_code_collision",
                "user-code candidate collided with an active record"
            );
            attempts += 1;
        }

        tracing::warn!(
            code_type,
            attempts,
            event = "user_code_retries_exhausted",
            "unable to create a unique user code"
        );
        Err(DomainError::ExhaustedRetries { attempts })
    }

    /// Enforce the configured input length restrictions. These are caller
    /// contract violations, so they fail fast as `InvalidArgument`.
    fn check_input_lengths(&self, request: &ValidatedRequest) -> DomainResult<()> {
        let restrictions = &self.options.input_length_restrictions;
        if request
            .description
            .as_ref()
            .is_some_and(|d| d.len() > restrictions.description)
        {
            return Err(DomainError::InvalidArgument {
                field: "description".to_string(),
            });
        }
        if request
            .return_url
            .as_ref()
            .is_some_and(|u| u.len() > restrictions.return_url)
        {
            return Err(DomainError::InvalidArgument {
                field: "return_url".to_string(),
            });
        }
        if request.transport_data.len() > restrictions.transport_data {
            return Err(DomainError::InvalidArgument {
                field: "transport_data".to_string(),
            });
        }
        Ok(())
    }
}
