//! Domain Layer
//!
//! Pure deploy logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Invocation data (DeployRequest, BootSource)
//! - `services/` - Remote script composition
//! - `ports/` - Interface definitions for infrastructure
//!
//! Nothing in here spawns a process or touches the file system; all of
//! that goes through the `ports` traits.

pub mod entities;
pub mod ports;
pub mod services;
