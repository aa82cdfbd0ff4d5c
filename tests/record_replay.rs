//! Record-replay round-trip integration test.
//!
//! 1. Drive the client through a recording transport wrapping a scripted backend.
//! 2. Replay the resulting cassette with `ServiceContext::replaying()`.
//! 3. Assert identical outcomes, including the recorded failure.

use std::sync::{Arc, Mutex};

use serde_json::json;

use vepfs_ext::adapters::recording::RecordingTransport;
use vepfs_ext::cassette::session::RecordingSession;
use vepfs_ext::context::ServiceContext;
use vepfs_ext::lens::{CreateLensTaskRequest, LensTaskClient};
use vepfs_ext::ports::{OperationCall, Transport, TransportError, TransportFuture};

/// Answers the first call with a task ID and every later call with an error.
struct ScriptedBackend {
    sent: Mutex<Vec<OperationCall>>,
}

impl Transport for ScriptedBackend {
    fn execute(&self, call: &OperationCall) -> TransportFuture<'_> {
        let first = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(call.clone());
            sent.len() == 1
        };
        Box::pin(async move {
            if first {
                Ok(json!({"LensTaskId": "lt-20260105"}))
            } else {
                Err(TransportError::from("vePFS API error (409): LensTaskName already exists"))
            }
        })
    }
}

fn request() -> CreateLensTaskRequest {
    CreateLensTaskRequest {
        lens_task_name: "nightly-analyze".into(),
        lens_policy_id: "lp-7".into(),
        file_system_id: "vepfs-cnsh-02".into(),
        target_path: "/datasets".into(),
        ..CreateLensTaskRequest::default()
    }
}

#[tokio::test]
async fn record_then_replay_produces_identical_outcomes() {
    let base = std::env::temp_dir().join("vepfs_ext_record_replay_test");
    let _ = std::fs::remove_dir_all(&base);

    // --- Phase 1: Record ---
    let session = RecordingSession::new_in(&base).unwrap();
    let backend = Arc::new(ScriptedBackend { sent: Mutex::new(Vec::new()) });
    let recording = RecordingTransport::new(backend.clone(), Arc::clone(&session.transport));
    let client = LensTaskClient::new(Arc::new(recording));

    let recorded_ok = client.create_lens_task(Some(request())).await.unwrap();
    let recorded_err = client.create_lens_task(Some(request())).await.unwrap_err().to_string();
    assert_eq!(recorded_ok.lens_task_id, "lt-20260105");
    assert_eq!(backend.sent.lock().unwrap().len(), 2);

    drop(client);
    let output_dir = session.finish().unwrap();
    let cassette_path = output_dir.join("transport.cassette.yaml");

    // --- Phase 2: Replay ---
    let ctx = ServiceContext::replaying(&cassette_path).unwrap();
    let client = ctx.lens_client();
    let replayed_ok = client.create_lens_task(Some(request())).await.unwrap();
    let replayed_err = client.create_lens_task(Some(request())).await.unwrap_err().to_string();

    assert_eq!(replayed_ok, recorded_ok);
    assert_eq!(replayed_err, recorded_err);

    // The recorded input is the exact call that was sent.
    let content = std::fs::read_to_string(&cassette_path).unwrap();
    let cassette: vepfs_ext::cassette::format::Cassette = serde_yaml::from_str(&content).unwrap();
    let sent = serde_json::to_value(&backend.sent.lock().unwrap()[0]).unwrap();
    assert_eq!(cassette.interactions[0].input, sent);

    let _ = std::fs::remove_dir_all(&base);
}
