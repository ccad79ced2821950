// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup and stays fixed for the lifetime of the process.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Root directory for content and submission files | `/data` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `CONTENT_SECRET` | Passphrase for sealing content and tokens | Built-in fallback |
//! | `ADMIN_USERNAME` | Admin login identity | `admin@techrover.com` |
//! | `ADMIN_PASSWORD` | Admin login password | `TechRover@2025!` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the data directory path.
///
/// All content resources and form submissions are stored as JSON files
/// under this directory.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Default data directory when `DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "/data";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable name for the sealing passphrase.
///
/// One passphrase serves both concerns of the gate: sealing admin tokens
/// and sealing content resources at rest.
pub const CONTENT_SECRET_ENV: &str = "CONTENT_SECRET";

/// Fallback passphrase used when `CONTENT_SECRET` is unset.
///
/// Deployments MUST set `CONTENT_SECRET`; the fallback exists so local
/// development works out of the box, and its use is logged at startup.
pub const DEFAULT_CONTENT_SECRET: &str = "techrover-secret-key-2025";

/// Environment variable name for the admin login identity.
pub const ADMIN_USERNAME_ENV: &str = "ADMIN_USERNAME";

/// Default admin identity when `ADMIN_USERNAME` is unset.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin@techrover.com";

/// Environment variable name for the admin password.
pub const ADMIN_PASSWORD_ENV: &str = "ADMIN_PASSWORD";

/// Default admin password when `ADMIN_PASSWORD` is unset.
pub const DEFAULT_ADMIN_PASSWORD: &str = "TechRover@2025!";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";
