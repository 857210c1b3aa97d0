//! Run-time evaluation for mazebench tasks.
//!
//! Everything here is queried once per simulated step:
//!
//! - [`ProgressTracker`] projects the agent onto a [`WaypointPath`] and
//!   reports a completion fraction in `[0, 1]`
//! - [`SuccessDetector`] turns noisy geometric and contact observations
//!   into a debounced success signal, with the debounce counter held in a
//!   per-episode [`HoldState`]
//! - [`PushPolicy`] is the scripted lookahead controller used to record
//!   demonstrations

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod path;
pub mod progress;
pub mod push;
pub mod success;

pub use error::EvalError;
pub use path::WaypointPath;
pub use progress::{Projection, ProgressConfig, ProgressTracker};
pub use push::{PushPolicy, PushPolicyConfig};
pub use success::{FailReason, HoldState, StackMember, SuccessCriteria, SuccessDetector, Verdict};
