/// Elapsed time in whole milliseconds. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Timestamp {
    total_ms: i64,
}

impl Timestamp {
    #[cfg(test)]
    pub const ZERO: Timestamp = Timestamp { total_ms: 0 };

    /// Builds a timestamp from raw clock fields. Fields are not range checked;
    /// `0:75:00,000` is the same instant as `1:15:00,000`. Returns `None` for
    /// negative fields or a total that does not fit.
    pub fn from_parts(hours: i64, minutes: i64, seconds: i64, millis: i64) -> Option<Self> {
        if hours < 0 || minutes < 0 || seconds < 0 || millis < 0 {
            return None;
        }
        let total_ms = hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(seconds)?
            .checked_mul(1000)?
            .checked_add(millis)?;
        Some(Self { total_ms })
    }

    #[cfg(test)]
    pub fn from_millis(total_ms: i64) -> Option<Self> {
        (total_ms >= 0).then_some(Self { total_ms })
    }

    #[cfg(test)]
    pub fn as_millis(self) -> i64 {
        self.total_ms
    }

    /// Normalized `(hours, minutes, seconds, millis)`.
    pub fn parts(self) -> (i64, i64, i64, i64) {
        let hours = self.total_ms / 3_600_000;
        let rem = self.total_ms % 3_600_000;
        let minutes = rem / 60_000;
        let rem = rem % 60_000;
        (hours, minutes, rem / 1000, rem % 1000)
    }

    /// Applies `by`, flooring the result at zero.
    pub fn shifted(self, by: Shift) -> Shifted {
        let raw = self.total_ms.saturating_add(by.millis);
        Shifted {
            timestamp: Timestamp {
                total_ms: raw.max(0),
            },
            clamped: raw < 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shifted {
    pub timestamp: Timestamp,
    pub clamped: bool,
}

/// A signed offset, already truncated to whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shift {
    millis: i64,
}

impl Shift {
    /// Truncates toward zero: `0.0019` s is 1 ms and `-0.0019` s is -1 ms.
    /// Non-finite input saturates (`NaN` becomes zero).
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            millis: (seconds * 1000.0).trunc() as i64,
        }
    }

    #[cfg(test)]
    pub fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    pub fn millis(self) -> i64 {
        self.millis
    }
}
