// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Run the boot command list strictly in order, absorbing failures.
// Author: Lukas Bower
#![forbid(unsafe_code)]

//! Sequential boot command executor.
//!
//! Each entry is tokenized, announced, spawned with the caller's stdio and
//! waited on before the next entry is considered. A failing entry is
//! reported to the observer and the run carries on; the run as a whole never
//! fails.

use std::process::{Command, Stdio};

use log::debug;

use crate::audit::RunObserver;
use crate::command::CommandSpec;
use crate::error::CommandError;

/// Runs an immutable, ordered list of command lines one at a time.
#[derive(Debug, Clone, Copy)]
pub struct SequentialExecutor<'a, S> {
    lines: &'a [S],
}

impl<'a, S: AsRef<str>> SequentialExecutor<'a, S> {
    /// Borrow the command lines to execute.
    #[must_use]
    pub fn new(lines: &'a [S]) -> Self {
        Self { lines }
    }

    /// Execute every entry in order, then report completion.
    pub fn run<O: RunObserver>(&self, mut observer: O) {
        let total = self.lines.len();
        for (index, line) in self.lines.iter().enumerate() {
            let Some(spec) = CommandSpec::parse(line.as_ref()) else {
                debug!("[{}/{total}] skipping blank entry", index + 1);
                continue;
            };
            observer.executing(&spec);
            match run_command(&spec) {
                Ok(()) => debug!("[{}/{total}] {} ok", index + 1, spec.program()),
                Err(err) => observer.failed(&spec, &err),
            }
        }
        observer.done();
    }
}

/// Run a single invocation to completion with inherited stdio.
pub fn run_command(spec: &CommandSpec) -> Result<(), CommandError> {
    let mut child = Command::new(spec.program())
        .args(spec.args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| CommandError::Launch {
            program: spec.program().to_owned(),
            source,
        })?;

    let status = child.wait().map_err(|source| CommandError::Wait {
        program: spec.program().to_owned(),
        source,
    })?;

    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(CommandError::ExitStatus {
            program: spec.program().to_owned(),
            code,
        }),
        None => Err(CommandError::Signal {
            program: spec.program().to_owned(),
        }),
    }
}
