//! HTTP client for the résumé extraction API.
//!
//! [`ResumeApi`] is the seam the controller talks to; [`HttpResumeApi`] is
//! the browser implementation on top of `gloo-net`.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::{ApiConfig, UPLOAD_FIELD};
use crate::types::{AppError, AppResult, ExtractionResult, FileInfo, ResponseDetails};

/// Calls made by the upload client.
#[allow(async_fn_in_trait)]
pub trait ResumeApi {
    /// Platform file handle sent on upload.
    type File: Clone;

    fn upload_url(&self) -> String;

    fn history_url(&self) -> String;

    /// `POST {base}/upload` with the file as multipart field `file`.
    async fn upload(&self, file: &Self::File) -> AppResult<ExtractionResult>;

    /// `GET /history`
    async fn fetch_history(&self) -> AppResult<Vec<ExtractionResult>>;
}

/// `gloo-net` implementation used in the browser.
#[derive(Clone, Debug)]
pub struct HttpResumeApi {
    config: ApiConfig,
}

impl HttpResumeApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl ResumeApi for HttpResumeApi {
    type File = File;

    fn upload_url(&self) -> String {
        self.config.upload_url()
    }

    fn history_url(&self) -> String {
        self.config.history_url()
    }

    async fn upload(&self, file: &File) -> AppResult<ExtractionResult> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Request(format!("Failed to create FormData: {}", js_error(&e))))?;

        form_data
            .append_with_blob(UPLOAD_FIELD, file)
            .map_err(|e| AppError::Request(format!("Failed to append file: {}", js_error(&e))))?;

        // The browser sets the multipart boundary itself.
        let request = Request::post(&self.upload_url())
            .body(form_data)
            .map_err(|e| AppError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        read_json(ensure_ok(response).await?).await
    }

    async fn fetch_history(&self) -> AppResult<Vec<ExtractionResult>> {
        let response = Request::get(&self.history_url())
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        read_json(ensure_ok(response).await?).await
    }
}

/// Metadata of a browser file.
pub fn file_info(file: &File) -> FileInfo {
    FileInfo {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
    }
}

/// Turn a non-2xx response into [`AppError::Status`].
async fn ensure_ok(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let headers = response.headers().entries().collect();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    Err(AppError::Status(Box::new(ResponseDetails {
        status: response.status(),
        status_text: response.status_text(),
        headers,
        body,
    })))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;
    parse_json(&body)
}

/// Parse a response body.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> AppResult<T> {
    serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upload_body() {
        let body = r#"{"name":"Jane Doe","email":"jane@x.com","phone":"555-1234","skills":["Go","SQL"],"experience":["Built API"]}"#;

        let result: ExtractionResult = parse_json(body).unwrap();
        assert_eq!(result.name.as_deref(), Some("Jane Doe"));
        assert_eq!(result.skills.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_parse_history_body() {
        let body = r#"[{"name":"A","timestamp":"2024-05-01T09:30:00"},{"email":"b@x.com","timestamp":"2024-04-01T09:30:00"}]"#;

        let history: Vec<ExtractionResult> = parse_json(body).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].email.as_deref(), Some("b@x.com"));
    }

    #[test]
    fn test_parse_upload_body_with_numeric_phone() {
        let body = r#"{"name":"Jane","phone":5551234,"skills":["Go",null]}"#;

        let result: ExtractionResult = parse_json(body).unwrap();
        assert_eq!(result.phone.as_deref(), Some("5551234"));
        assert_eq!(result.skills, Some(vec!["Go".to_string()]));
    }

    #[test]
    fn test_parse_html_body_is_decode_error() {
        let result: AppResult<Vec<ExtractionResult>> = parse_json("<!doctype html><html></html>");
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn test_parse_wrong_shape_is_decode_error() {
        let result: AppResult<Vec<ExtractionResult>> = parse_json(r#"{"error":"nope"}"#);
        assert!(matches!(result, Err(AppError::Decode(_))));
    }
}
