//! UI Components for the résumé extractor.
//!
//! # Layout Components
//! - [`Hero`] - Page title and description
//!
//! # Feature Components
//! - [`UploadSection`] - File picker and upload button
//! - [`LatestResult`] - Response of the last upload
//! - [`HistorySection`] - Past uploads, expandable one at a time
//! - [`RecordDetail`] - Fields of a single extraction result

mod hero;
mod upload;
mod record;
mod history;

pub use hero::*;
pub use upload::*;
pub use record::*;
pub use history::*;
