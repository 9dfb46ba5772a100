//! Attente de fin des mises à jour asynchrones
//!
//! Le service traite rafraîchissements et écritures en arrière-plan ; leur
//! avancement se lit avec `RequestRefreshStatus` / `RequestWriteStatus`.

use crate::error::{Result, VitotrolError};
use crate::session::Session;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};
use vitoconfig::PollConfig;

/// Statut signalant une mise à jour terminée
pub const STATUS_COMPLETED: i32 = 4;

/// Politique d'attente : intervalle entre deux essais et nombre maximal d'essais
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from(&PollConfig::default())
    }
}

impl From<&PollConfig> for PollPolicy {
    fn from(config: &PollConfig) -> Self {
        Self {
            interval: config.interval(),
            max_attempts: config.max_attempts,
        }
    }
}

impl Session {
    /// Attend la fin d'un rafraîchissement
    pub fn wait_for_refresh(&mut self, update_id: &str, policy: &PollPolicy) -> Result<()> {
        poll_until_completed(update_id, policy, || self.request_refresh_status(update_id))
    }

    /// Attend la fin d'une écriture
    pub fn wait_for_write(&mut self, update_id: &str, policy: &PollPolicy) -> Result<()> {
        poll_until_completed(update_id, policy, || self.request_write_status(update_id))
    }
}

/// Interroge `fetch` jusqu'à [`STATUS_COMPLETED`].
///
/// Toute erreur d'un appel de statut est renvoyée immédiatement. Le statut
/// est interrogé au moins une fois, même avec `max_attempts == 0`.
fn poll_until_completed<F>(update_id: &str, policy: &PollPolicy, mut fetch: F) -> Result<()>
where
    F: FnMut() -> Result<i32>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut last_status = 0;

    for attempt in 1..=max_attempts {
        last_status = fetch()?;
        debug!(update_id, attempt, status = last_status, "Polled update status");

        if last_status == STATUS_COMPLETED {
            info!(update_id, attempts = attempt, "Update completed");
            return Ok(());
        }

        if attempt < max_attempts {
            thread::sleep(policy.interval);
        }
    }

    Err(VitotrolError::PollExhausted {
        update_id: update_id.to_string(),
        attempts: max_attempts,
        last_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitosoap::ResultHeader;

    fn policy(max_attempts: u32) -> PollPolicy {
        PollPolicy {
            interval: Duration::ZERO,
            max_attempts,
        }
    }

    #[test]
    fn test_completes_when_status_reaches_terminal() {
        let mut statuses = vec![1, 2, STATUS_COMPLETED].into_iter();
        let mut calls = 0;

        poll_until_completed("42", &policy(5), || {
            calls += 1;
            Ok(statuses.next().unwrap())
        })
        .unwrap();

        assert_eq!(calls, 3);
    }

    #[test]
    fn test_exhausted_reports_last_status() {
        let err = poll_until_completed("42", &policy(3), || Ok(1)).unwrap_err();

        match err {
            VitotrolError::PollExhausted {
                update_id,
                attempts,
                last_status,
            } => {
                assert_eq!(update_id, "42");
                assert_eq!(attempts, 3);
                assert_eq!(last_status, 1);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_zero_attempts_still_polls_once() {
        let mut calls = 0;
        poll_until_completed("42", &policy(0), || {
            calls += 1;
            Ok(STATUS_COMPLETED)
        })
        .unwrap();
        assert_eq!(calls, 1);

        let err = poll_until_completed("42", &policy(0), || Ok(2)).unwrap_err();
        assert!(matches!(
            err,
            VitotrolError::PollExhausted {
                attempts: 1,
                last_status: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_errors_are_not_retried() {
        let mut calls = 0;
        let err = poll_until_completed("42", &policy(5), || {
            calls += 1;
            Err(ResultHeader::new(7, "Unbekannt").into())
        })
        .unwrap_err();

        assert_eq!(calls, 1);
        assert_eq!(err.application_error().map(|h| h.code), Some(7));
    }

    #[test]
    fn test_policy_from_config() {
        let policy = PollPolicy::default();
        assert_eq!(policy.interval, Duration::from_millis(1000));
        assert_eq!(policy.max_attempts, 30);
    }
}
