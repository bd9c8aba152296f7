// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Provide observers for the ordered boot run event stream.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use log::{error, info};

use crate::command::CommandSpec;
use crate::error::CommandError;

/// Line emitted once the whole command list has been processed.
pub const DONE_MESSAGE: &str = "Uinit Done!";

/// Receives the executor's events in the order they happen.
pub trait RunObserver {
    /// A command is about to be started.
    fn executing(&mut self, spec: &CommandSpec);
    /// A command failed to start or exited unsuccessfully.
    fn failed(&mut self, spec: &CommandSpec, err: &CommandError);
    /// Every entry has been processed.
    fn done(&mut self);
}

impl<O: RunObserver + ?Sized> RunObserver for &mut O {
    fn executing(&mut self, spec: &CommandSpec) {
        (**self).executing(spec);
    }

    fn failed(&mut self, spec: &CommandSpec, err: &CommandError) {
        (**self).failed(spec, err);
    }

    fn done(&mut self) {
        (**self).done();
    }
}

/// Observer that writes each event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl RunObserver for LogObserver {
    fn executing(&mut self, spec: &CommandSpec) {
        info!("Executing Command: {}", spec.line());
    }

    fn failed(&mut self, spec: &CommandSpec, err: &CommandError) {
        error!("{}: {err}", spec.line());
    }

    fn done(&mut self) {
        info!("{DONE_MESSAGE}");
    }
}

/// Single event recorded by a [`Transcript`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// Command line about to run, verbatim.
    Executing(String),
    /// Command line that failed and the rendered error.
    Failed {
        /// Command line verbatim.
        line: String,
        /// Rendered [`CommandError`].
        reason: String,
    },
    /// Terminal completion record.
    Done,
}

/// Buffered run transcript. Forwards every event to the log as well.
#[derive(Debug, Default)]
pub struct Transcript {
    events: Vec<RunEvent>,
    log: LogObserver,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RunEvent] {
        &self.events
    }

    /// Consume the transcript and return the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RunEvent> {
        self.events
    }

    /// Command lines announced as executing, in order.
    pub fn executed_lines(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            RunEvent::Executing(line) => Some(line.as_str()),
            _ => None,
        })
    }

    /// Command lines that failed, in order.
    pub fn failed_lines(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            RunEvent::Failed { line, .. } => Some(line.as_str()),
            _ => None,
        })
    }
}

impl RunObserver for Transcript {
    fn executing(&mut self, spec: &CommandSpec) {
        self.log.executing(spec);
        self.events.push(RunEvent::Executing(spec.line().to_owned()));
    }

    fn failed(&mut self, spec: &CommandSpec, err: &CommandError) {
        self.log.failed(spec, err);
        self.events.push(RunEvent::Failed {
            line: spec.line().to_owned(),
            reason: err.to_string(),
        });
    }

    fn done(&mut self) {
        self.log.done();
        self.events.push(RunEvent::Done);
    }
}
