//! Checker engine: remote inspection client, credentials and the run loop.
mod credentials;
mod inspector;
mod pacing;
mod runner;
mod types;

pub use credentials::{
    CredentialError, CredentialProvider, ServiceAccountKey, ServiceAccountProvider,
    StaticTokenProvider, INSPECTION_SCOPE,
};
pub use inspector::{Inspect, InspectorSettings, UrlInspectionClient, DEFAULT_ENDPOINT};
pub use pacing::{FixedDelayPacer, Pacer, MAX_DELAY_SECS, MIN_DELAY_SECS};
pub use runner::{run_checks, CheckEvent, NullProgressSink, ProgressSink};
pub use types::{IndexStatusResult, InspectRequest, InspectResponse, InspectionPayload};
