//! Data-insight (Lens) tasks on vePFS file systems.

pub mod client;
pub mod model;

pub use client::{LensTaskClient, CREATE_LENS_TASKS, JSON_CONTENT_TYPE};
pub use model::{
    CreateLensTaskRequest, CreateLensTaskResponse, LensAnalysisInfo, LensExportInfo,
    LensTargetInfo, METADATA_ANALYZE, METADATA_EXPORT,
};
