// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Log file set-up.
//!
//! The terminal is owned by the TUI, so log output goes to `movieapp.log` in
//! the configuration directory instead of stdout or stderr. `RUST_LOG`
//! overrides the configured level.

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config, error::SetupError};

const LOG_FILE_NAME: &str = "movieapp.log";

/// Installs the global log subscriber and returns the path of the log file.
pub(crate) fn init_logger(level: &str) -> Result<PathBuf, SetupError> {
    let dir = config::config_dir()?;
    let path = dir.join(LOG_FILE_NAME);

    fs::create_dir_all(&dir).map_err(|source| SetupError::LogFile {
        path: path.clone(),
        source,
    })?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| SetupError::LogFile {
            path: path.clone(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("movieapp={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .compact(),
        )
        .try_init()?;

    Ok(path)
}
