// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Resolve the boot command list from built-ins or a TOML override.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::ConfigError;

/// Driver loads for the board storage stack, then the final workload.
pub const BUILTIN_COMMANDS: &[&str] = &[
    "/bbin/insmod /lib/modules/nvme-core.ko",
    "/bbin/insmod /lib/modules/nvme.ko",
    "/bbin/insmod /lib/modules/libata.ko",
    "/bbin/insmod /lib/modules/libahci.ko",
    "/bbin/insmod /lib/modules/ahci.ko",
    "/bbin/rsdp",
];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    commands: Vec<String>,
}

/// Ordered boot command lines. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootConfig {
    commands: Vec<String>,
}

impl BootConfig {
    /// Compiled-in command list.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            commands: BUILTIN_COMMANDS.iter().map(|line| (*line).to_owned()).collect(),
        }
    }

    /// Parse a `commands = [...]` TOML document.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let parsed: ConfigToml = toml::from_str(text).map_err(|source| ConfigError::Parse {
            origin: origin.to_owned(),
            source,
        })?;
        if parsed.commands.is_empty() {
            return Err(ConfigError::Empty {
                origin: origin.to_owned(),
            });
        }
        Ok(Self {
            commands: parsed.commands,
        })
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Load `path` when given, falling back to the built-ins on any error.
    #[must_use]
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            debug!("no uinit config override; using built-in commands");
            return Self::builtin();
        };
        match Self::load(path) {
            Ok(config) => {
                warn!(
                    "boot commands overridden by {}: {} entries replace the built-in list",
                    path.display(),
                    config.commands.len()
                );
                config
            }
            Err(err) => {
                warn!("{err}; using built-in commands");
                Self::builtin()
            }
        }
    }

    /// Command lines in execution order.
    #[must_use]
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
