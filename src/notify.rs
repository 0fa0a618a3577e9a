//! Reporting of operation outcomes to the user.
//!
//! Services hand a [`Severity`] and a human readable message to a [`Notifier`]
//! once an operation has finished, whether it succeeded or not.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// Default notifier, writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => tracing::info!(notice = %message, "operation succeeded"),
            Severity::Error => tracing::warn!(notice = %message, "operation failed"),
        }
    }
}

/// Keeps every notice in memory, in order of arrival.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(Severity, String)> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<(Severity, String)> {
        self.notices().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push((severity, message.to_string()));
        }
    }
}

/// Reports the outcome of `result`. On success the message built by
/// `success` is returned alongside the value so the caller can echo it;
/// storage failures are reported as `operation_failed`.
pub fn report<T>(
    notifier: &dyn Notifier,
    result: AppResult<T>,
    success: impl FnOnce(&T) -> String,
    operation_failed: &str,
) -> AppResult<(T, String)> {
    match result {
        Ok(value) => {
            let message = success(&value);
            notifier.notify(Severity::Success, &message);
            Ok((value, message))
        }
        Err(err) => {
            notifier.notify(Severity::Error, &err.user_message(operation_failed));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn report_sends_success_and_error_notices() {
        let notifier = RecordingNotifier::new();

        let (value, message) = report(&notifier, Ok(3), |n| format!("{n} added"), "failed")
            .expect("success passes through");
        assert_eq!((value, message.as_str()), (3, "3 added"));

        let failed: AppResult<i32> = Err(AppError::Persistence(sea_orm::DbErr::Custom(
            "constraint".into(),
        )));
        let err = report(&notifier, failed, |n| format!("{n} added"), "Error while adding")
            .expect_err("failure passes through");
        assert!(matches!(err, AppError::Persistence(_)));

        assert_eq!(
            notifier.notices(),
            vec![
                (Severity::Success, "3 added".to_string()),
                (Severity::Error, "Error while adding".to_string()),
            ]
        );
    }
}
