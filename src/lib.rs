// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Provide the boot-time sequential command runner library.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Boot-time init helper: runs a fixed, ordered list of commands (driver
//! loads, then the final workload) and always reaches the end of the list.

/// Run observers (log sink and in-memory transcript).
pub mod audit;
/// Command line tokenizer and invocation spec.
pub mod command;
/// Built-in command list and TOML override loading.
pub mod config;
/// Per-command and configuration errors.
pub mod error;
/// Sequential command executor.
pub mod executor;

pub use audit::{LogObserver, RunEvent, RunObserver, Transcript};
pub use command::CommandSpec;
pub use config::BootConfig;
pub use error::{CommandError, ConfigError};
pub use executor::SequentialExecutor;

/// Run every command in `config` with the logging observer.
pub fn run(config: &BootConfig) {
    SequentialExecutor::new(config.commands()).run(LogObserver);
}
