// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define per-command and configuration error types for uinit.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single boot command. The executor logs these and moves on.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The executable could not be started (missing, not executable, ...).
    #[error("failed to start {program}: {source}")]
    Launch {
        /// Program path as written in the command line.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },
    /// The child was started but could not be waited on.
    #[error("failed to wait for {program}: {source}")]
    Wait {
        /// Program path as written in the command line.
        program: String,
        /// Underlying wait error.
        #[source]
        source: io::Error,
    },
    /// The child exited with a non-zero status.
    #[error("{program} exited with status {code}")]
    ExitStatus {
        /// Program path as written in the command line.
        program: String,
        /// Exit code reported by the child.
        code: i32,
    },
    /// The child terminated without an exit code.
    #[error("{program} terminated by signal")]
    Signal {
        /// Program path as written in the command line.
        program: String,
    },
}

/// Errors raised while loading a boot command list override.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read uinit config {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The config file is not valid TOML or has the wrong shape.
    #[error("invalid uinit config TOML in {origin}: {source}")]
    Parse {
        /// Human-readable origin of the text (usually a path).
        origin: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// The config file parsed but lists no commands at all.
    #[error("uinit config {origin} lists no commands")]
    Empty {
        /// Human-readable origin of the text (usually a path).
        origin: String,
    },
}
