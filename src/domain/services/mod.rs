//! Domain Services

pub mod remote_script;

pub use remote_script::{shell_quote, shell_word, RemoteScript, RemoteStep, ScriptParams, StepKind};
