//! Shared world state for project lifecycle BDD scenarios.

use std::sync::Arc;
use std::time::Duration;

use atelier::access::Role;
use atelier::identity::{
    adapters::memory::InMemoryUserRepository,
    domain::{Actor, Credential, EmailAddress, User, UserDraft},
};
use atelier::lifecycle::{LifecycleCoordinator, LifecycleError, LifecyclePolicy, Repositories};
use atelier::notification::{
    adapters::memory::RecordingTransport,
    domain::OutboundMessage,
    services::{DispatchWorker, NotificationDispatcher, NotificationRenderer},
};
use atelier::project::{adapters::memory::InMemoryProjectRepository, domain::Project};
use atelier::resource::adapters::memory::InMemoryResourceRepository;
use atelier::risk::{ReferenceFrame, RiskClassifier};
use atelier::task::{adapters::memory::InMemoryTaskRepository, domain::Task};
use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock frozen at the instant the world was built.
#[derive(Debug, Clone, Copy)]
pub struct FrozenClock(DateTime<Utc>);

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scenario world for project lifecycle behaviour tests.
#[derive(Default)]
pub struct LifecycleWorld {
    pub coordinator: Option<LifecycleCoordinator<FrozenClock>>,
    pub worker: Option<DispatchWorker>,
    pub transport: RecordingTransport,
    pub today: Option<NaiveDate>,
    pub manager: Option<User>,
    pub freelancer: Option<User>,
    pub project: Option<Project>,
    pub task: Option<Task>,
    pub last_error: Option<LifecycleError>,
    pub delivered: Vec<OutboundMessage>,
}

fn provision(users: &InMemoryUserRepository, name: &str, role: Role, email: &str) -> eyre::Result<User> {
    let draft = UserDraft::new(
        name,
        role,
        EmailAddress::new(email)?,
        Credential::from_stored("abc123"),
    )?;
    Ok(users.provision(draft)?)
}

impl LifecycleWorld {
    /// Wires a coordinator over memory adapters with one manager and one
    /// freelancer.
    ///
    /// # Errors
    ///
    /// Returns an error if a user cannot be provisioned.
    pub fn open_studio(&mut self) -> eyre::Result<()> {
        let clock = FrozenClock(Utc::now());
        let frame = ReferenceFrame::default();
        let users = Arc::new(InMemoryUserRepository::new());
        self.manager = Some(provision(&users, "Lucía", Role::Manager, "lucia@studio.pe")?);
        self.freelancer = Some(provision(&users, "Leo", Role::Freelancer, "leo@studio.pe")?);

        let (notifier, worker) = NotificationDispatcher::spawn(
            Arc::new(self.transport.clone()),
            NotificationRenderer::new("Gametech SGP"),
            Duration::from_secs(2),
        );
        let stores = Repositories {
            projects: Arc::new(InMemoryProjectRepository::new()),
            tasks: Arc::new(InMemoryTaskRepository::new()),
            users,
            resources: Arc::new(InMemoryResourceRepository::new()),
        };
        let risk = RiskClassifier::new(Arc::new(clock), frame);
        self.coordinator = Some(LifecycleCoordinator::new(
            stores,
            notifier,
            risk,
            LifecyclePolicy::default(),
        ));
        self.worker = Some(worker);
        self.today = Some(frame.day_of(clock.0));
        Ok(())
    }

    /// Returns the wired coordinator.
    ///
    /// # Errors
    ///
    /// Returns an error if the studio was never opened or has shut down.
    pub fn coordinator(&self) -> eyre::Result<&LifecycleCoordinator<FrozenClock>> {
        self.coordinator
            .as_ref()
            .ok_or_else(|| eyre::eyre!("studio is not open"))
    }

    /// Returns the acting user with the given role.
    ///
    /// # Errors
    ///
    /// Returns an error if the studio was never opened.
    pub fn actor(&self, role: Role) -> eyre::Result<Actor> {
        let user = match role {
            Role::Manager => self.manager.as_ref(),
            Role::InternalTeam | Role::Freelancer => self.freelancer.as_ref(),
        }
        .ok_or_else(|| eyre::eyre!("missing {role} in scenario world"))?;
        Ok(Actor::new(user.id(), user.name(), user.role()))
    }

    /// Returns the current calendar day of the studio.
    ///
    /// # Errors
    ///
    /// Returns an error if the studio was never opened.
    pub fn today(&self) -> eyre::Result<NaiveDate> {
        self.today.ok_or_else(|| eyre::eyre!("studio is not open"))
    }

    /// Records the outcome of an action that may fail.
    pub fn record<T>(&mut self, result: Result<T, LifecycleError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.last_error = Some(err);
                None
            }
        }
    }

    /// Stops the dispatcher, collecting every delivered message.
    pub fn shutdown(&mut self) {
        drop(self.coordinator.take());
        if let Some(worker) = self.worker.take() {
            run_async(worker.finish());
        }
        self.delivered = self.transport.delivered();
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LifecycleWorld {
    LifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
