// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Parse boot command lines into shell-less invocations.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use std::fmt;

const TOKEN_SEPARATOR: char = ' ';

/// One shell-less invocation built from a boot command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    line: String,
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    /// Parse a command line. Returns `None` when the line is blank (empty or
    /// whitespace only).
    ///
    /// Tokens are separated by one or more ASCII spaces and passed through
    /// verbatim: no quoting, no expansion.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }
        let mut tokens = tokenize(line).into_iter();
        let program = tokens.next()?.to_owned();
        Some(Self {
            line: line.to_owned(),
            program,
            args: tokens.map(str::to_owned).collect(),
        })
    }

    /// Original, untokenized command line.
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Executable path (first token).
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Positional arguments (remaining tokens).
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Split a command line on ASCII spaces, dropping empty tokens.
#[must_use]
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(TOKEN_SEPARATOR)
        .filter(|token| !token.is_empty())
        .collect()
}
