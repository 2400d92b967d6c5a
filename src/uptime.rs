use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use tracing::debug;

/// Допуск на дрожание часов при сравнении моментов загрузки, мс
pub const BOOT_TIME_TOLERANCE_MS: i64 = 5_000;

/// Момент загрузки устройства, сохраняемый между опросами
#[derive(Debug, Clone, Default)]
pub struct UptimeTracker {
    boot_time: Option<DateTime<Utc>>,
}

impl UptimeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boot_time(&self) -> Option<DateTime<Utc>> {
        self.boot_time
    }

    /// Переводит sysUpTime (сотые доли секунды) в момент загрузки и сверяет с сохранённым
    pub fn reconcile(&mut self, ticks: u64, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let elapsed = i64::try_from(ticks)
            .ok()
            .and_then(|t| t.checked_mul(10))
            .and_then(TimeDelta::try_milliseconds)?;
        let candidate = now.checked_sub_signed(elapsed)?.trunc_subsecs(0);
        Some(self.adopt(candidate))
    }

    /// Принимает кандидата, только если он отличается больше чем на допуск
    pub fn adopt(&mut self, candidate: DateTime<Utc>) -> DateTime<Utc> {
        match self.boot_time {
            Some(stored) if (candidate - stored).num_milliseconds().abs() <= BOOT_TIME_TOLERANCE_MS => {
                stored
            }
            previous => {
                if previous.is_some() {
                    debug!(%candidate, "момент загрузки изменился, устройство перезагружено");
                }
                self.boot_time = Some(candidate);
                candidate
            }
        }
    }
}
