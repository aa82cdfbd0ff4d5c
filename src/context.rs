//! Service context selecting the transport a command runs against.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::HttpTransport;
use crate::adapters::recording::RecordingTransport;
use crate::adapters::replaying::ReplayingTransport;
use crate::adapters::OfflineTransport;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::lens::LensTaskClient;
use crate::ports::Transport;

/// Bundles the transport used by command handlers.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying, offline).
pub struct ServiceContext {
    /// Executes control-plane calls.
    pub transport: Arc<dyn Transport>,
}

impl ServiceContext {
    /// Creates a live context from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be resolved.
    pub fn live() -> Result<Self, String> {
        let transport = HttpTransport::from_env().map_err(|e| e.to_string())?;
        Ok(Self { transport: Arc::new(transport) })
    }

    /// Creates a live context whose exchanges are recorded under `base`.
    ///
    /// The returned session must be finished after the context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be resolved or the cassette
    /// directory cannot be created.
    pub fn recording_at(base: &Path) -> Result<(Self, RecordingSession), String> {
        let live = Self::live()?;
        let session = RecordingSession::new_in(base)?;
        let transport =
            RecordingTransport::new(live.transport, Arc::clone(&session.transport));
        Ok((Self { transport: Arc::new(transport) }, session))
    }

    /// Creates a context that serves results from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let replayer = CassetteReplayer::load(path)?;
        Ok(Self { transport: Arc::new(ReplayingTransport::new(replayer)) })
    }

    /// Creates a context that refuses to send anything.
    #[must_use]
    pub fn offline() -> Self {
        Self { transport: Arc::new(OfflineTransport) }
    }

    /// A Lens task client bound to this context's transport.
    #[must_use]
    pub fn lens_client(&self) -> LensTaskClient {
        LensTaskClient::new(Arc::clone(&self.transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::json;

    #[tokio::test]
    async fn replaying_context_serves_cassette() {
        let dir = std::env::temp_dir().join("vepfs_ext_context_replay_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("transport.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "ctx", "abc");
        recorder.record("transport", "execute", json!({}), json!({"Ok": {"LensTaskId": "lt-9"}}));
        recorder.finish().unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();
        let response = ctx.lens_client().create_lens_task(None).await.unwrap();
        assert_eq!(response.lens_task_id, "lt-9");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn offline_context_never_sends() {
        let err = ServiceContext::offline().lens_client().create_lens_task(None).await.unwrap_err();
        assert!(err.to_string().contains("refusing to send CreateLensTasks"));
    }
}
