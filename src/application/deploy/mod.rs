//! Deploy Module
//!
//! Orchestrates the boot folder deployment.
//!
//! ## Structure
//!
//! - `options` - Run options (`DeployOptions`)
//! - `use_case` - The linear pipeline (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use tcboot::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(SystemCommandRunner, &config);
//! let outcome = use_case.execute(&request, &DeployOptions::default(), &sink)?;
//! ```

mod options;
mod use_case;

pub use options::{DeployOptions, DeployOutcome};
pub use use_case::DeployUseCase;
