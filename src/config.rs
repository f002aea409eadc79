//! Process-wide switch for contract checking.
//!
//! The mode is read from the `RUNTIME_CONTRACTS` environment variable the
//! first time it is needed and stays fixed for the life of the process.
//! Without the variable, debug builds check and release builds do not.

use std::{env, str::FromStr};

use lazy_static::lazy_static;
use tracing::{debug, warn};

use crate::errors::errors::ParseModeError;

pub const MODE_VARIABLE: &str = "RUNTIME_CONTRACTS";

lazy_static! {
    static ref MODE: Mode = {
        let mode = Mode::from_env();
        debug!(?mode, "resolved contract checking mode");
        mode
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Enabled,
    Disabled,
}

impl Mode {
    pub fn for_build() -> Mode {
        if cfg!(debug_assertions) {
            Mode::Enabled
        } else {
            Mode::Disabled
        }
    }

    /// Reads the mode from the environment, falling back to the build
    /// default when the variable is unset or unrecognised.
    pub fn from_env() -> Mode {
        match env::var(MODE_VARIABLE) {
            Ok(raw) => Mode::from_setting(&raw),
            Err(_) => Mode::for_build(),
        }
    }

    fn from_setting(raw: &str) -> Mode {
        raw.parse().unwrap_or_else(|error: ParseModeError| {
            warn!(variable = MODE_VARIABLE, %error, "using the build default");
            Mode::for_build()
        })
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" | "enabled" | "true" | "1" => Ok(Mode::Enabled),
            "off" | "disabled" | "false" | "0" => Ok(Mode::Disabled),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// The mode in force for this process.
pub fn mode() -> Mode {
    *MODE
}
