use std::path::PathBuf;

use clap::Parser;

use crate::uploader::UploadRequest;

/// Command-line surface. Environment defaults are resolved here by clap so
/// the upload core never reads the process environment itself.
#[derive(Parser)]
#[command(version, about = "Upload pprof profiling data to the Datadog profiling intake", long_about = None)]
pub struct Args {
    /// Datadog API key for your account
    #[arg(long, env = "DD_API_KEY", hide_env_values = true)]
    pub key: String,

    /// Service name to assign to the uploaded profiles
    #[arg(long, default_value = "dd-prof-upload")]
    pub service: String,

    /// Datadog site to upload to
    #[arg(long, env = "DD_SITE", default_value = "datadog.com")]
    pub site: String,

    /// Environment name to assign to the uploaded profiles
    #[arg(long, default_value = "dev")]
    pub env: String,

    /// Runtime to attribute the profiles to
    #[arg(long, default_value = "go")]
    pub runtime: String,

    /// Profile files to upload. With no files, only the metadata fields
    /// are sent.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Args {
    pub fn into_request(self) -> UploadRequest {
        UploadRequest {
            url: format!("https://intake.profile.{}/v1/input", self.site),
            api_key: self.key,
            tags: vec![
                format!("service:{}", self.service),
                format!("env:{}", self.env),
                format!("runtime:{}", self.runtime),
            ],
            runtime: self.runtime,
            files: self.files,
        }
    }
}
