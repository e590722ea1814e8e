//! Unit tests for the authentication service.

use crate::access::Role;
use crate::identity::{
    adapters::memory::{InMemorySessionStore, InMemoryUserRepository},
    domain::{Credential, EmailAddress, Theme, UserDraft},
    ports::{CredentialVerifier, UserRepository},
    services::{AuthenticationError, AuthenticationService, RECOVERY_ACKNOWLEDGEMENT},
};
use crate::lifecycle::ErrorKind;
use crate::notification::{
    adapters::memory::RecordingTransport,
    services::{DispatchWorker, NotificationDispatcher, NotificationRenderer},
};
use crate::testing::FixedClock;
use eyre::{bail, ensure};
use mockall::mock;
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::time::Duration;

const TEST_COST: u32 = 4;

type TestService = AuthenticationService<InMemoryUserRepository, InMemorySessionStore, FixedClock>;

struct Harness {
    service: TestService,
    users: Arc<InMemoryUserRepository>,
    transport: RecordingTransport,
    worker: DispatchWorker,
}

impl Harness {
    async fn delivered_after_shutdown(self) -> usize {
        let Self {
            service,
            transport,
            worker,
            ..
        } = self;
        drop(service);
        worker.finish().await;
        transport.delivered().len()
    }
}

fn provision(users: &InMemoryUserRepository, name: &str, role: Role, email: &str, record: &str) {
    let draft = UserDraft::new(
        name,
        role,
        EmailAddress::new(email).expect("valid email"),
        Credential::from_stored(record),
    )
    .expect("valid draft");
    users.provision(draft).expect("provisioned");
}

#[fixture]
fn harness() -> Harness {
    let users = Arc::new(InMemoryUserRepository::new());
    provision(&users, "Lucía", Role::Manager, "lucia@studio.pe", "abc123");
    let hashed = Credential::hash("s3cret", TEST_COST).expect("hashable");
    provision(&users, "Ana", Role::InternalTeam, "ana@studio.pe", hashed.as_stored());
    provision(&users, "Leo", Role::Freelancer, "leo@studio.pe", "freelance");

    let transport = RecordingTransport::new();
    let (notifier, worker) = NotificationDispatcher::spawn(
        Arc::new(transport.clone()),
        NotificationRenderer::new("Gametech SGP"),
        Duration::from_secs(2),
    );
    let service = AuthenticationService::new(
        Arc::clone(&users),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(FixedClock::at(2026, 3, 10, 15, 0)),
        notifier,
    )
    .with_hash_cost(TEST_COST);
    Harness {
        service,
        users,
        transport,
        worker,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn legacy_login_opens_a_session(harness: Harness) -> eyre::Result<()> {
    let session = harness.service.login("Lucia@Studio.pe", "abc123").await?;
    ensure!(session.user().role == Role::Manager);

    let found = harness.service.session(session.id()).await?;
    ensure!(found == session);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hashed_login_opens_a_session(harness: Harness) -> eyre::Result<()> {
    let session = harness.service.login("ana@studio.pe", "s3cret").await?;
    ensure!(session.actor().name() == "Ana");
    Ok(())
}

#[rstest]
#[case("nobody@studio.pe", "abc123")]
#[case("lucia@studio.pe", "abc124")]
#[case("ana@studio.pe", "abc123")]
#[case("not an address", "abc123")]
#[tokio::test(flavor = "multi_thread")]
async fn failed_logins_are_indistinguishable(
    harness: Harness,
    #[case] email: &str,
    #[case] secret: &str,
) -> eyre::Result<()> {
    match harness.service.login(email, secret).await {
        Err(err @ AuthenticationError::InvalidCredentials) => {
            ensure!(err.kind() == ErrorKind::Authentication);
            ensure!(err.kind().caller_message() == "invalid credentials");
        }
        other => bail!("expected invalid credentials, got {other:?}"),
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn legacy_records_stay_legacy_without_rehash(harness: Harness) -> eyre::Result<()> {
    harness.service.login("lucia@studio.pe", "abc123").await?;
    let email = EmailAddress::new("lucia@studio.pe")?;
    let user = harness
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| eyre::eyre!("user should exist"))?;
    ensure!(user.credential().is_legacy());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rehash_migrates_matching_legacy_records(harness: Harness) -> eyre::Result<()> {
    let service = harness.service.clone().with_legacy_rehash(TEST_COST);
    service.login("lucia@studio.pe", "abc123").await?;

    let email = EmailAddress::new("lucia@studio.pe")?;
    let user = harness
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| eyre::eyre!("user should exist"))?;
    ensure!(!user.credential().is_legacy());
    ensure!(service.login("lucia@studio.pe", "abc123").await.is_ok());
    ensure!(service.login("lucia@studio.pe", "abc124").await.is_err());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_is_idempotent(harness: Harness) -> eyre::Result<()> {
    let session = harness.service.login("lucia@studio.pe", "abc123").await?;
    harness.service.logout(session.id()).await?;
    harness.service.logout(session.id()).await?;

    let result = harness.service.session(session.id()).await;
    ensure!(matches!(result, Err(AuthenticationError::SessionNotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn theme_changes_require_manage_settings(harness: Harness) -> eyre::Result<()> {
    let internal = harness.service.login("ana@studio.pe", "s3cret").await?;
    let updated = harness.service.set_theme(internal.id(), Theme::Light).await?;
    ensure!(updated.theme() == Theme::Light);
    ensure!(harness.service.session(internal.id()).await?.theme() == Theme::Light);

    let freelancer = harness.service.login("leo@studio.pe", "freelance").await?;
    let denied = harness.service.set_theme(freelancer.id(), Theme::Light).await;
    match denied {
        Err(err @ AuthenticationError::Denied(_)) => {
            ensure!(err.kind() == ErrorKind::Authorization);
        }
        other => bail!("expected denial, got {other:?}"),
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recovery_acknowledges_every_address_but_mails_known_ones(
    harness: Harness,
) -> eyre::Result<()> {
    let known = harness.service.recover_access("ana@studio.pe").await?;
    let unknown = harness.service.recover_access("ghost@studio.pe").await?;
    let malformed = harness.service.recover_access("ghost").await?;
    ensure!(known == RECOVERY_ACKNOWLEDGEMENT);
    ensure!(unknown == known && malformed == known);

    ensure!(harness.delivered_after_shutdown().await == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn directory_listings_omit_credentials(harness: Harness) -> eyre::Result<()> {
    let users = harness.service.list_users().await?;
    ensure!(users.len() == 3);
    let managers = harness.service.list_managers().await?;
    ensure!(managers.len() == 1 && managers[0].name == "Lucía");
    Ok(())
}

mock! {
    pub Verifier {}

    impl CredentialVerifier for Verifier {
        fn verify(&self, credential: &Credential, supplied: &str) -> bool;
    }
}

fn service_with(harness: &Harness, verifier: MockVerifier) -> TestService {
    harness.service.clone().with_verifier(Arc::new(verifier))
}

#[rstest]
#[case("nobody@studio.pe")]
#[case("not an address")]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_addresses_still_check_a_hashed_record(
    harness: Harness,
    #[case] email: &str,
) -> eyre::Result<()> {
    let mut verifier = MockVerifier::new();
    verifier
        .expect_verify()
        .withf(|credential, supplied| !credential.is_legacy() && supplied == "abc123")
        .times(1)
        .return_const(false);
    let service = service_with(&harness, verifier);

    let result = service.login(email, "abc123").await;
    ensure!(matches!(result, Err(AuthenticationError::InvalidCredentials)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn known_addresses_check_their_stored_record_once(harness: Harness) -> eyre::Result<()> {
    let mut verifier = MockVerifier::new();
    verifier
        .expect_verify()
        .withf(|credential, supplied| credential.as_stored() == "abc123" && supplied == "abc124")
        .times(1)
        .return_const(false);
    let service = service_with(&harness, verifier);

    let result = service.login("lucia@studio.pe", "abc124").await;
    ensure!(matches!(result, Err(AuthenticationError::InvalidCredentials)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn decoy_record_never_admits_a_login(harness: Harness) -> eyre::Result<()> {
    let result = harness
        .service
        .login("nobody@studio.pe", "atelier-decoy-credential")
        .await;
    ensure!(matches!(result, Err(AuthenticationError::InvalidCredentials)));
    Ok(())
}
