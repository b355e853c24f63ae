use crate::core::events::EventLog;
use crate::errors::AppResult;
use crate::models::record::EventRecord;
use std::num::IntErrorKind;

/// Bounds applied to the listing count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimits {
    pub default: usize,
    pub max: usize,
}

impl Default for ListLimits {
    fn default() -> Self {
        Self {
            default: 10,
            max: 50,
        }
    }
}

impl ListLimits {
    /// Lenient count parsing: blank or non-numeric input gives the default,
    /// any integer (however large) is clamped into `[1, max]`.
    pub fn resolve(&self, arg: Option<&str>) -> usize {
        let max = self.max.max(1);
        let fallback = self.default.clamp(1, max);

        let Some(arg) = arg.map(str::trim).filter(|a| !a.is_empty()) else {
            return fallback;
        };

        let requested = match arg.parse::<i64>() {
            Ok(n) => n,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return fallback,
            },
        };

        if requested < 1 {
            1
        } else {
            usize::try_from(requested).map_or(max, |n| n.min(max))
        }
    }
}

pub struct ListLogic;

impl ListLogic {
    /// The most recent records for a listing request, oldest first.
    pub fn recent(
        log: &EventLog,
        arg: Option<&str>,
        limits: ListLimits,
    ) -> AppResult<Vec<EventRecord>> {
        let n = limits.resolve(arg);
        log.tail(n)
    }
}
