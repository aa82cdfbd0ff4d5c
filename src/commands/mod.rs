//! Command dispatch and handlers.

pub mod create_lens_task;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::context::ServiceContext;

/// Environment variable naming a directory to record live exchanges into.
pub const RECORD_VAR: &str = "VEPFS_EXT_RECORD";

/// Dispatch a parsed command to its handler.
///
/// When `VEPFS_EXT_RECORD` is set to a directory path, live control-plane
/// exchanges are recorded to a cassette in a timestamped subdirectory.
///
/// # Errors
///
/// Returns an error string if the context cannot be built or the handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::CreateLensTask { input, dry_run, replay } => {
            let (ctx, session) = if *dry_run {
                (ServiceContext::offline(), None)
            } else if let Some(path) = replay {
                (ServiceContext::replaying(path)?, None)
            } else if let Ok(dir) = env::var(RECORD_VAR) {
                let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(dir))?;
                (ctx, Some(session))
            } else {
                (ServiceContext::live()?, None)
            };

            let result = create_lens_task::run_with_context(&ctx, input.as_deref(), *dry_run);

            // Finish recording after the command completes (even on error)
            if let Some(session) = session {
                // Drop context first to release Arc references
                drop(ctx);
                finish_recording(session)?;
            }

            result
        }
    }
}

/// Finish a recording session and report the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
