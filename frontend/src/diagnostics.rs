//! Structured failure reports.
//!
//! Failed requests are written through the `log` facade as one JSON record
//! so that the browser console (via `console_log`) shows the request, the
//! file being sent and whatever the server answered.

use serde::Serialize;

use crate::types::{AppError, FileInfo};

/// Which client operation failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Upload,
    History,
}

impl Operation {
    pub fn method(&self) -> &'static str {
        match self {
            Operation::Upload => "POST",
            Operation::History => "GET",
        }
    }
}

/// One failed request, ready to log.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FailureReport<'a> {
    pub operation: Operation,
    pub method: &'static str,
    pub url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<&'a FileInfo>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<(&'a str, &'a str)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<&'a str>,
}

impl<'a> FailureReport<'a> {
    pub fn new(
        operation: Operation,
        url: &'a str,
        file: Option<&'a FileInfo>,
        error: &'a AppError,
    ) -> Self {
        let response = error.response();
        Self {
            operation,
            method: operation.method(),
            url,
            file,
            message: error.to_string(),
            status: response.map(|r| r.status),
            status_text: response.map(|r| r.status_text.as_str()),
            headers: response
                .map(|r| {
                    r.headers
                        .iter()
                        .map(|(k, v)| (k.as_str(), v.as_str()))
                        .collect()
                })
                .unwrap_or_default(),
            body: response
                .map(|r| r.body.as_str())
                .filter(|b| !b.is_empty()),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Write the report at `error` level.
    pub fn emit(&self) {
        log::error!("{:?} failed: {}", self.operation, self.message);
        log::error!("{:?} error details: {}", self.operation, self.to_json());
    }
}
