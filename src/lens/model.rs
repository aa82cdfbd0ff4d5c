//! Request and response payloads for the `CreateLensTasks` operation.
//!
//! Field names on the wire are case-sensitive and follow the vePFS
//! control-plane API exactly.

use serde::{Deserialize, Serialize};

/// Task content tag for a metadata export task.
pub const METADATA_EXPORT: &str = "MetadataExport";
/// Task content tag for a metadata analysis task.
pub const METADATA_ANALYZE: &str = "MetadataAnalyze";

/// Input of the `CreateLensTasks` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateLensTaskRequest {
    /// Human-readable name of the data-insight task.
    #[serde(rename = "LensTaskName")]
    pub lens_task_name: String,
    /// Existing data-insight policy the task is bound to.
    #[serde(rename = "LensPolicyId")]
    pub lens_policy_id: String,
    /// Target file system.
    #[serde(rename = "FileSystemId")]
    pub file_system_id: String,
    /// Absolute path of the fileset subdirectory or directory the task runs in.
    #[serde(rename = "TargetPath")]
    pub target_path: String,
    /// Free-form description.
    #[serde(rename = "Description")]
    pub description: String,
    /// Task kinds, e.g. [`METADATA_EXPORT`] and [`METADATA_ANALYZE`].
    #[serde(rename = "LensTaskContent")]
    pub lens_task_content: Vec<String>,
    /// Export settings.
    #[serde(rename = "LensExportInfo")]
    pub lens_export_info: LensExportInfo,
    /// Analysis settings.
    #[serde(rename = "LensAnalysisInfo")]
    pub lens_analysis_info: LensAnalysisInfo,
    /// Directories the task is confined to.
    #[serde(rename = "TargetInfos")]
    pub target_infos: Vec<LensTargetInfo>,
}

/// Where and how export results are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensExportInfo {
    /// Absolute path of the directory export results are written to.
    #[serde(rename = "ExportPath")]
    pub export_path: String,
    /// File attributes to export.
    #[serde(rename = "ExportAttrs")]
    pub export_attrs: Vec<String>,
    /// Aggregate capacity per first-level subdirectory.
    #[serde(rename = "FirstLevelSubDir")]
    pub first_level_sub_dir: bool,
    /// Aggregate capacity per second-level subdirectory.
    #[serde(rename = "SecondLevelSubDir")]
    pub second_level_sub_dir: bool,
    /// TOS bucket receiving the export.
    #[serde(rename = "TosBucket")]
    pub tos_bucket: String,
    /// Key prefix inside [`tos_bucket`](Self::tos_bucket).
    #[serde(rename = "TosPrefix")]
    pub tos_prefix: String,
    /// Make results downloadable from the console.
    #[serde(rename = "EnableDownload")]
    pub enable_download: bool,
}

/// Analysis settings.
///
/// The service expects `enable_lens_analysis` to be set exactly when the
/// task content contains [`METADATA_ANALYZE`]; this is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensAnalysisInfo {
    /// Turn result analysis on.
    #[serde(rename = "EnableLensAnalysis")]
    pub enable_lens_analysis: bool,
    /// File attributes to analyze.
    #[serde(rename = "AnalysisAttrs")]
    pub analysis_attrs: Vec<String>,
}

/// A directory the task is confined to.
///
/// With an empty `fileset_id`, `relative_path` is an absolute path in the
/// file system; otherwise it is relative to the fileset root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensTargetInfo {
    /// Fileset the directory belongs to; empty when it is a plain directory.
    #[serde(rename = "FilesetId")]
    pub fileset_id: String,
    /// Directory path; see the type docs.
    #[serde(rename = "RelativePath")]
    pub relative_path: String,
}

/// Output of the `CreateLensTasks` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateLensTaskResponse {
    /// Identifier of the created task.
    #[serde(rename = "LensTaskId")]
    pub lens_task_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_request_serializes_zero_values() {
        let value = serde_json::to_value(CreateLensTaskRequest::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "LensTaskName": "",
                "LensPolicyId": "",
                "FileSystemId": "",
                "TargetPath": "",
                "Description": "",
                "LensTaskContent": [],
                "LensExportInfo": {
                    "ExportPath": "",
                    "ExportAttrs": [],
                    "FirstLevelSubDir": false,
                    "SecondLevelSubDir": false,
                    "TosBucket": "",
                    "TosPrefix": "",
                    "EnableDownload": false
                },
                "LensAnalysisInfo": {
                    "EnableLensAnalysis": false,
                    "AnalysisAttrs": []
                },
                "TargetInfos": []
            })
        );
    }

    #[test]
    fn target_info_always_sends_fileset() {
        let plain = LensTargetInfo { fileset_id: String::new(), relative_path: "/data/a".into() };
        let fileset =
            LensTargetInfo { fileset_id: "fs-set-1".into(), relative_path: "b/c".into() };

        assert_eq!(
            serde_json::to_value(plain).unwrap(),
            json!({"FilesetId": "", "RelativePath": "/data/a"})
        );
        assert_eq!(
            serde_json::to_value(fileset).unwrap(),
            json!({"FilesetId": "fs-set-1", "RelativePath": "b/c"})
        );
    }

    #[test]
    fn partial_input_fills_defaults() {
        let request: CreateLensTaskRequest = serde_json::from_value(json!({
            "LensTaskName": "nightly",
            "LensTaskContent": ["MetadataAnalyze"],
            "LensAnalysisInfo": {"EnableLensAnalysis": true}
        }))
        .unwrap();

        assert_eq!(request.lens_task_name, "nightly");
        assert_eq!(request.lens_task_content, vec![METADATA_ANALYZE.to_string()]);
        assert!(request.lens_analysis_info.enable_lens_analysis);
        assert!(request.lens_analysis_info.analysis_attrs.is_empty());
        assert!(request.description.is_empty());
        assert!(request.target_infos.is_empty());
    }

    #[test]
    fn response_reads_task_id() {
        let response: CreateLensTaskResponse =
            serde_json::from_str(r#"{"LensTaskId":"abc-123"}"#).unwrap();
        assert_eq!(response.lens_task_id, "abc-123");
    }
}
