use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::blocking::multipart::{Form, Part};

use crate::errors::{AppError, AppResult};

/// Form version expected by the profiling intake.
const INTAKE_VERSION: &str = "3";

/// Form filename used for every profile attachment, regardless of the
/// local filename. The intake identifies profiles by field name instead.
const FORM_FILENAME: &str = "pprof-data";

/// Everything needed for one upload: built once from CLI input and
/// consumed exactly once by [`IntakeClient::execute`].
///
/// [`IntakeClient::execute`]: crate::uploader::IntakeClient::execute
pub struct UploadRequest {
    pub url: String,
    pub api_key: String,
    pub runtime: String,
    pub tags: Vec<String>,
    pub files: Vec<PathBuf>,
}

/// The API key is a secret and must never reach logs or error output.
impl fmt::Debug for UploadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadRequest")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("runtime", &self.runtime)
            .field("tags", &self.tags)
            .field("files", &self.files)
            .finish()
    }
}

impl UploadRequest {
    /// Encodes the multipart body: metadata fields, one `tags[]` entry per
    /// tag in input order, then one file part per path in input order.
    ///
    /// Files are read fully into memory before anything is sent, so a
    /// missing or unreadable file fails here and no request goes out.
    pub fn build_form(&self) -> AppResult<Form> {
        let (start, end) = profile_window(Utc::now());

        let mut form = Form::new()
            .text("version", INTAKE_VERSION)
            .text("family", self.runtime.clone())
            .text("start", start)
            .text("end", end);

        for tag in &self.tags {
            form = form.text("tags[]", tag.clone());
        }

        for path in &self.files {
            let data = fs::read(path).map_err(|e| AppError::file_read(path, e))?;
            let part = Part::bytes(data)
                .file_name(FORM_FILENAME)
                .mime_str("application/octet-stream")?;
            form = form.part(format!("data[{}]", base_name(path)), part);
        }

        Ok(form)
    }
}

/// Fixed one-minute profiling window starting at `now`. The intake only
/// needs a plausible interval; the real profiling duration is not known
/// to this tool.
fn profile_window(now: DateTime<Utc>) -> (String, String) {
    let end = now + chrono::Duration::seconds(60);
    (
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        end.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

/// Final path component, directories stripped.
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
