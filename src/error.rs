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

//! Start-up errors.
//!
//! Everything after start-up reports through `anyhow`, these are the failures
//! that happen before the terminal is taken over and that the caller may
//! choose to survive.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to locate configuration file")]
    Config(#[from] confy::ConfyError),

    #[error("configuration path {0} has no parent directory")]
    NoConfigDir(PathBuf),

    #[error("failed to open log file {path}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install log subscriber")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}
