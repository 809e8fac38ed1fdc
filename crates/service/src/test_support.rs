//! Fixtures shared by unit tests, router tests and benches.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::user::domain::UserDraft;

/// A clock that never moves.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self { Self { now } }

    /// 2024-03-01T12:00:00Z
    pub fn fixture() -> Self {
        Self::new(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().unwrap_or_default())
    }

    pub fn shared(self) -> Arc<dyn Clock + Send + Sync> { Arc::new(self) }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> { self.now.with_timezone(&Local) }

    fn utc(&self) -> DateTime<Utc> { self.now }
}

pub fn user_draft(login: &str, email: &str) -> UserDraft {
    UserDraft {
        login: login.into(),
        email: email.into(),
        first_name: "Ivan".into(),
        last_name: "Ivanov".into(),
        patronymic: "Ivanovich".into(),
        password: "Passw0rd".into(),
    }
}
