//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Event sink implementations (JSON)
//! - `process` - CommandRunner backed by `std::process`
//! - `remote/` - `ssh` and `scp` invocations and availability probes
//! - `source` - Local boot folder validation

pub mod events;
pub mod process;
pub mod remote;
pub mod source;

// Re-export for convenience
pub use events::JsonEventSink;
pub use process::SystemCommandRunner;
pub use remote::{check_tools, ScpUpload, SshSession};
pub use source::resolve_source;
