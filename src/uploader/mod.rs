// Uploader module - builds the multipart payload and performs the
// single POST to the profiling intake.

pub mod intake;
pub mod payload;

pub use intake::IntakeClient;
pub use payload::UploadRequest;
