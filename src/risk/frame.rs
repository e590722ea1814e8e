//! Calendar frame used to turn instants into whole days.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

const DEFAULT_OFFSET_MINUTES: i32 = -300;

/// Fixed UTC offset that defines "today" for risk classification.
///
/// A fixed offset keeps day boundaries identical on every host regardless of
/// its local time zone setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceFrame {
    offset: FixedOffset,
}

impl ReferenceFrame {
    /// Builds a frame from an offset in minutes east of UTC.
    ///
    /// Returns `None` for offsets of a day or more.
    #[must_use]
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        let seconds = minutes.checked_mul(60)?;
        FixedOffset::east_opt(seconds).map(|offset| Self { offset })
    }

    /// Returns the UTC frame.
    #[must_use]
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Returns the offset of the frame.
    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the calendar day that contains `instant` in this frame.
    #[must_use]
    pub fn day_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }
}

impl Default for ReferenceFrame {
    fn default() -> Self {
        Self::from_offset_minutes(DEFAULT_OFFSET_MINUTES).unwrap_or_else(Self::utc)
    }
}
