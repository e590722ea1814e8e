//! Fire-and-forget dispatch of notifications.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tracing::{debug, warn};

use super::NotificationRenderer;
use crate::notification::{
    domain::{LifecycleEvent, Notification},
    ports::MessageTransport,
};

/// Handle used by lifecycle services to enqueue notifications.
///
/// Enqueueing never blocks and never fails from the caller's perspective.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    sender: mpsc::UnboundedSender<Notification>,
}

/// Background worker delivering enqueued notifications.
///
/// The worker stops once every [`NotificationDispatcher`] clone has been
/// dropped and all in-flight deliveries have finished.
#[derive(Debug)]
pub struct DispatchWorker {
    handle: JoinHandle<DeliveryStats>,
}

/// Delivery outcomes observed by a worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryStats {
    /// Messages accepted by the transport.
    pub delivered: usize,
    /// Messages that failed to render, failed to send or timed out.
    pub failed: usize,
}

impl DeliveryStats {
    fn record(&mut self, outcome: Result<bool, JoinError>) {
        match outcome {
            Ok(true) => self.delivered += 1,
            Ok(false) => self.failed += 1,
            Err(err) => {
                warn!(error = %err, "notification delivery task aborted");
                self.failed += 1;
            }
        }
    }
}

impl NotificationDispatcher {
    /// Starts a dispatch worker on the current Tokio runtime.
    ///
    /// `deadline` caps each delivery attempt regardless of the transport's
    /// own timeouts.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    #[must_use]
    pub fn spawn(
        transport: Arc<dyn MessageTransport>,
        renderer: NotificationRenderer,
        deadline: Duration,
    ) -> (Self, DispatchWorker) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_worker(
            receiver,
            transport,
            Arc::new(renderer),
            deadline,
        ));
        (Self { sender }, DispatchWorker { handle })
    }

    /// Enqueues a notification for delivery.
    pub fn notify(&self, notification: Notification) {
        if let Err(err) = self.sender.send(notification) {
            warn!(
                recipient = %err.0.recipient(),
                "notification dropped, dispatch worker has stopped"
            );
        }
    }

    /// Enqueues the notification composed for `event`.
    pub fn emit(&self, event: &LifecycleEvent) {
        self.notify(event.to_notification());
    }
}

impl DispatchWorker {
    /// Waits for the worker to drain and returns what it observed.
    pub async fn finish(self) -> DeliveryStats {
        self.handle.await.unwrap_or_else(|err| {
            warn!(error = %err, "notification worker terminated abnormally");
            DeliveryStats::default()
        })
    }
}

async fn run_worker(
    mut receiver: mpsc::UnboundedReceiver<Notification>,
    transport: Arc<dyn MessageTransport>,
    renderer: Arc<NotificationRenderer>,
    deadline: Duration,
) -> DeliveryStats {
    let mut stats = DeliveryStats::default();
    let mut in_flight = JoinSet::new();

    while let Some(notification) = receiver.recv().await {
        in_flight.spawn(deliver(
            Arc::clone(&transport),
            Arc::clone(&renderer),
            notification,
            deadline,
        ));
        while let Some(outcome) = in_flight.try_join_next() {
            stats.record(outcome);
        }
    }
    while let Some(outcome) = in_flight.join_next().await {
        stats.record(outcome);
    }
    stats
}

async fn deliver(
    transport: Arc<dyn MessageTransport>,
    renderer: Arc<NotificationRenderer>,
    notification: Notification,
    deadline: Duration,
) -> bool {
    let recipient = notification.recipient().clone();
    let message = match renderer.render(&notification) {
        Ok(message) => message,
        Err(err) => {
            warn!(%recipient, error = %err, "notification rendering failed");
            return false;
        }
    };

    match tokio::time::timeout(deadline, transport.send(message)).await {
        Ok(Ok(())) => {
            debug!(%recipient, subject = notification.subject(), "notification delivered");
            true
        }
        Ok(Err(err)) => {
            warn!(%recipient, error = %err, "notification delivery failed");
            false
        }
        Err(_) => {
            warn!(%recipient, ?deadline, "notification delivery timed out");
            false
        }
    }
}
