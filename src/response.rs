use serde::Serialize;
use utoipa::ToSchema;

use crate::notify::Severity;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
        }
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            per_page: None,
            total: None,
        }
    }
}

/// Envelope for every JSON body. `severity` and `message` carry the notice
/// shown to the user after an operation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub severity: Severity,
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
            data: Some(data),
            meta,
        }
    }

    pub fn error(message: impl Into<String>, data: T) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            data: Some(data),
            meta: Some(Meta::empty()),
        }
    }
}
