//! Shared helpers for unit tests.

use crate::notification::{
    domain::OutboundMessage,
    ports::{MessageTransport, TransportResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Freezes the clock at `hour:minute` UTC on the given day.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let instant = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .expect("valid instant");
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a calendar date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Transport whose sends never complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct StalledTransport;

#[async_trait]
impl MessageTransport for StalledTransport {
    async fn send(&self, _message: OutboundMessage) -> TransportResult<()> {
        std::future::pending().await
    }
}
