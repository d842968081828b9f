//! Scribe engine: backend API client, effect execution, and report output.
mod client;
mod engine;
mod filename;
mod persist;
mod render;
mod report;
mod types;

pub use client::{ClientSettings, GenerateApi, ReqwestApiClient};
pub use engine::EngineHandle;
pub use filename::report_filename;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use render::{escape_html, render_result_block};
pub use report::{render_report, write_report, ReportSummary};
pub use types::{ApiError, EngineEvent, FailureKind, GenerateRequest, GenerationResult};
