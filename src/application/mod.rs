pub mod download_coordinator;
pub mod request_sequencer;

pub use download_coordinator::DownloadCoordinator;
pub use request_sequencer::RequestSequencer;
