use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::errors::{AppError, AppResult};
use crate::uploader::UploadRequest;

/// Header carrying the API key, per the intake API.
const API_KEY_HEADER: &str = "DD-API-KEY";

/// Thin wrapper around a blocking HTTP client. One instance, one POST.
pub struct IntakeClient {
    client: Client,
}

impl IntakeClient {
    /// No request timeout is configured; a hung connection blocks until
    /// the transport gives up.
    pub fn new() -> AppResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Sends the upload as a single multipart POST and checks the response.
    ///
    /// Exactly one request is issued per call, and none at all if the body
    /// cannot be built. Any status other than 200 is a failure carrying the
    /// status code and the full response body text.
    pub fn execute(&self, request: &UploadRequest) -> AppResult<()> {
        let form = request.build_form()?;

        log::info!(
            "uploading {} profile file(s) to {}",
            request.files.len(),
            request.url
        );

        let response = self
            .client
            .post(&request.url)
            .header(API_KEY_HEADER, &request.api_key)
            .multipart(form)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if status != StatusCode::OK {
            return Err(AppError::upload_failed(status.as_u16(), body));
        }

        log::info!("upload accepted");
        Ok(())
    }
}
