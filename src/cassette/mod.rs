//! Cassette format for recording and replaying control-plane exchanges.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
