// Error types
pub mod error;

// Range diff engine
pub mod diff;

// Model identifier normalization
pub mod model;

// Transcript tail extraction
pub mod transcript;

// Trace record assembly
pub mod builder;

// Append-only ledger
pub mod store;

pub use builder::{RecordOptions, WorkspaceContext, build_record};
pub use diff::{TextEdit, compute_ranges};
pub use error::{Error, Result};
pub use model::normalize_model;
pub use store::TraceLog;
pub use transcript::extract_latest_model;
