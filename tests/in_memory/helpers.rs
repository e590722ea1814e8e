//! Shared studio wiring for in-memory integration tests.

use atelier::access::Role;
use atelier::identity::{
    adapters::memory::{InMemorySessionStore, InMemoryUserRepository},
    domain::{Credential, EmailAddress, User, UserDraft},
    services::AuthenticationService,
};
use atelier::lifecycle::{LifecycleCoordinator, LifecyclePolicy, Repositories};
use atelier::notification::{
    adapters::memory::RecordingTransport,
    domain::OutboundMessage,
    services::{DispatchWorker, NotificationDispatcher, NotificationRenderer},
};
use atelier::project::adapters::memory::InMemoryProjectRepository;
use atelier::reporting::ReportingService;
use atelier::resource::adapters::memory::InMemoryResourceRepository;
use atelier::risk::{ReferenceFrame, RiskClassifier};
use atelier::task::adapters::memory::InMemoryTaskRepository;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;
use std::time::Duration;

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct StudioClock(pub DateTime<Utc>);

impl Clock for StudioClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Authentication service type used by the studio.
pub type StudioAuth = AuthenticationService<InMemoryUserRepository, InMemorySessionStore, StudioClock>;

/// Every service of the tracker wired to memory adapters.
pub struct Studio {
    pub auth: StudioAuth,
    pub coordinator: LifecycleCoordinator<StudioClock>,
    pub reports: ReportingService<StudioClock>,
    pub transport: RecordingTransport,
    pub today: NaiveDate,
    pub manager: User,
    pub internal: User,
    pub freelancer: User,
    worker: DispatchWorker,
}

fn provision(
    users: &InMemoryUserRepository,
    name: &str,
    role: Role,
    email: &str,
    credential: Credential,
) -> eyre::Result<User> {
    let draft = UserDraft::new(name, role, EmailAddress::new(email)?, credential)?;
    Ok(users.provision(draft)?)
}

impl Studio {
    /// Builds a studio whose clock reads 2026-03-10 at noon studio time.
    ///
    /// # Errors
    ///
    /// Returns an error if a user cannot be provisioned.
    pub fn build(policy: LifecyclePolicy, transport: RecordingTransport) -> eyre::Result<Self> {
        let instant = Utc
            .with_ymd_and_hms(2026, 3, 10, 17, 0, 0)
            .single()
            .ok_or_else(|| eyre::eyre!("ambiguous instant"))?;
        let clock = Arc::new(StudioClock(instant));
        let frame = ReferenceFrame::default();

        let users = Arc::new(InMemoryUserRepository::new());
        let manager = provision(
            &users,
            "Lucía",
            Role::Manager,
            "lucia@studio.pe",
            Credential::hash("abc123", 4)?,
        )?;
        let internal = provision(
            &users,
            "Ana",
            Role::InternalTeam,
            "ana@studio.pe",
            Credential::from_stored("abc123"),
        )?;
        let freelancer = provision(
            &users,
            "Leo",
            Role::Freelancer,
            "leo@studio.pe",
            Credential::from_stored("pixel-pusher"),
        )?;

        let (notifier, worker) = NotificationDispatcher::spawn(
            Arc::new(transport.clone()),
            NotificationRenderer::new("Gametech SGP"),
            Duration::from_secs(2),
        );
        let projects = Arc::new(InMemoryProjectRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let risk = RiskClassifier::new(Arc::clone(&clock), frame);

        let auth = AuthenticationService::new(
            Arc::clone(&users),
            Arc::new(InMemorySessionStore::new()),
            Arc::clone(&clock),
            notifier.clone(),
        )
        .with_hash_cost(4);
        let reports = ReportingService::new(
            Arc::clone(&projects) as _,
            Arc::clone(&tasks) as _,
            risk.clone(),
        );
        let stores = Repositories {
            projects,
            tasks,
            users,
            resources: Arc::new(InMemoryResourceRepository::new()),
        };

        Ok(Self {
            auth,
            coordinator: LifecycleCoordinator::new(stores, notifier, risk, policy),
            reports,
            transport,
            today: frame.day_of(instant),
            manager,
            internal,
            freelancer,
            worker,
        })
    }

    /// Stops the dispatcher and returns every delivered message.
    pub async fn shutdown(self) -> Vec<OutboundMessage> {
        let Self {
            auth,
            coordinator,
            transport,
            worker,
            ..
        } = self;
        drop(auth);
        drop(coordinator);
        worker.finish().await;
        transport.delivered()
    }
}

/// Provides a studio with the default policy and a working transport.
///
/// # Errors
///
/// Returns an error if the studio cannot be wired.
#[fixture]
pub fn studio() -> eyre::Result<Studio> {
    Studio::build(LifecyclePolicy::default(), RecordingTransport::new())
}
