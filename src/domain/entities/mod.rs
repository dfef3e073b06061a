//! Domain Entities
//!
//! - `DeployRequest` - What the user asked to deploy, and where
//! - `BootSource` - The validated local boot folder

mod boot_source;
mod deploy_request;

pub use boot_source::BootSource;
pub use deploy_request::DeployRequest;
