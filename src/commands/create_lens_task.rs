//! `vepfs-ext create-lens-task` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::lens::CreateLensTaskRequest;

/// Execute the `create-lens-task` command and print its output.
///
/// # Errors
///
/// Returns an error string if the input cannot be read or the call fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    input: Option<&Path>,
    dry_run: bool,
) -> Result<(), String> {
    let output = execute(ctx, input, dry_run)?;
    println!("{output}");
    Ok(())
}

/// Build (and unless `dry_run`, send) the request; returns the text to print.
///
/// # Errors
///
/// Returns an error string if the input cannot be read or the call fails.
pub fn execute(ctx: &ServiceContext, input: Option<&Path>, dry_run: bool) -> Result<String, String> {
    let request = input.map(read_request).transpose()?;
    let client = ctx.lens_client();
    let pending = client.create_lens_task_inner(request);

    if dry_run {
        return serde_json::to_string_pretty(pending.call())
            .map_err(|e| format!("Failed to render request: {e}"));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    let response = runtime
        .block_on(pending.send())
        .map_err(|e| format!("CreateLensTasks failed: {e}"))?;

    serde_json::to_string_pretty(&response).map_err(|e| format!("Failed to render response: {e}"))
}

/// Read a request from a JSON file in the wire format.
fn read_request(path: &Path) -> Result<CreateLensTaskRequest, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read input file {}: {e}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse input file {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::{json, Value};

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn dry_run_renders_call_without_sending() {
        let dir = temp_dir("vepfs_ext_cmd_dry_run_test");
        let input = dir.join("request.json");
        std::fs::write(&input, r#"{"LensTaskName":"scan","FileSystemId":"vepfs-1"}"#).unwrap();

        let output = execute(&ServiceContext::offline(), Some(&input), true).unwrap();
        let rendered: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(rendered["operation"]["name"], "CreateLensTasks");
        assert_eq!(rendered["headers"]["Content-Type"], "application/json; charset=utf-8");
        assert_eq!(rendered["body"]["LensTaskName"], "scan");
        assert_eq!(rendered["body"]["LensPolicyId"], "");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn sends_through_replayed_transport() {
        let dir = temp_dir("vepfs_ext_cmd_replay_test");
        let cassette = dir.join("transport.cassette.yaml");
        let mut recorder = CassetteRecorder::new(&cassette, "cmd", "abc");
        recorder.record("transport", "execute", json!({}), json!({"Ok": {"LensTaskId": "abc-123"}}));
        recorder.finish().unwrap();

        let ctx = ServiceContext::replaying(&cassette).unwrap();
        let output = execute(&ctx, None, false).unwrap();
        let rendered: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(rendered, json!({"LensTaskId": "abc-123"}));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn offline_send_fails() {
        let err = execute(&ServiceContext::offline(), None, false).unwrap_err();
        assert!(err.starts_with("CreateLensTasks failed"));
    }

    #[test]
    fn unreadable_input_is_reported() {
        let err =
            execute(&ServiceContext::offline(), Some(Path::new("/nonexistent/req.json")), true)
                .unwrap_err();
        assert!(err.starts_with("Failed to read input file"));
    }
}
