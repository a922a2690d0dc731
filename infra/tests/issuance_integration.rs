//! End-to-end issuance test wiring the real pipeline against the in-memory
//! store and the logging transporter.

use std::sync::Arc;
use std::time::Duration;

use oob_core::domain::entities::Client;
use oob_core::domain::value_objects::ValidatedRequest;
use oob_core::services::clock::SystemClock;
use oob_core::services::handle::DefaultHandleGenerationService;
use oob_core::services::hashing::{Sha256UserCodeHasher, UserCodeHasher};
use oob_core::services::issuance::IssuanceService;
use oob_core::services::transport::Transporter;
use oob_core::services::user_code::UserCodeService;
use oob_infra::store::InMemoryCodeStore;
use oob_infra::transport::LoggingTransporter;
use oob_shared::config::AuthorizationOptions;

fn options() -> AuthorizationOptions {
    AuthorizationOptions {
        verification_uri: "https://auth.example.com/connect/verify".to_string(),
        activation_uri: "https://auth.example.com/connect/activate".to_string(),
        ..AuthorizationOptions::default()
    }
}

fn service(
    store: Arc<InMemoryCodeStore>,
    sms: Arc<LoggingTransporter>,
) -> IssuanceService<InMemoryCodeStore> {
    let transports: Vec<Arc<dyn Transporter>> = vec![sms];
    IssuanceService::new(
        store,
        Arc::new(UserCodeService::with_defaults()),
        transports,
        Arc::new(DefaultHandleGenerationService::default()),
        Arc::new(Sha256UserCodeHasher),
        Arc::new(SystemClock),
        options(),
    )
}

/// Let the fire-and-forget store and dispatch tasks run to completion.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(20)).await;
}

#[tokio::test]
async fn full_pipeline_issues_persists_and_delivers() {
    let store = Arc::new(InMemoryCodeStore::new());
    let sms = Arc::new(LoggingTransporter::new("sms"));
    let service = service(Arc::clone(&store), Arc::clone(&sms));

    let mut client = Client::new("device-app", "Device App");
    client
        .properties
        .insert("allowed_retries".to_string(), "5".to_string());
    let request = ValidatedRequest::new(client, "sms", "+8613912345678");

    let response = service.issue(&request).await.unwrap();
    settle().await;

    // Response shape.
    assert_eq!(response.verification_uri, "https://auth.example.com/connect/verify");
    assert_eq!(
        response.verification_uri_complete,
        format!(
            "https://auth.example.com/connect/verify?verification_code={}",
            response.verification_code
        )
    );
    assert_eq!(response.expires_in, 300);
    assert_eq!(response.interval, 5);

    // Persisted record carries the client override and the code hash.
    let record = store
        .get(&response.verification_code)
        .await
        .expect("record should be persisted");
    assert_eq!(record.client_id, "device-app");
    assert_eq!(record.allowed_retries, 5);
    assert_eq!(record.lifetime, 300);
    assert_eq!(record.transport, "sms");

    // Delivered message carries the plaintext code the record only hashed.
    let sent = sms.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].data, "+8613912345678");
    let code = sent[0]
        .body
        .strip_prefix("Your verification code is ")
        .expect("system default sms format");
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(record.user_code_hash, Sha256UserCodeHasher.hash(code));
    assert!(!sent[0].body.contains(&record.user_code_hash));
}

#[tokio::test]
async fn issued_hash_blocks_reuse_until_expiry() {
    let store = Arc::new(InMemoryCodeStore::new());
    let sms = Arc::new(LoggingTransporter::new("sms"));
    let service = service(Arc::clone(&store), Arc::clone(&sms));

    let request = ValidatedRequest::new(
        Client::new("device-app", "Device App"),
        "sms",
        "+8613912345678",
    );
    let response = service.issue(&request).await.unwrap();
    settle().await;

    let record = store.get(&response.verification_code).await.unwrap();
    use oob_core::repositories::CodeStore;
    let found = store
        .find_by_user_code_hash(&record.user_code_hash, false)
        .await
        .unwrap();
    assert!(found.is_some(), "active hash must be visible to uniqueness checks");
}
