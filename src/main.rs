// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> cmd::run --> ExitCode
//!   init | validate | show
//! ```

use std::process::ExitCode;

use env_manage::cli;
use env_manage::cmd;
use env_manage::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = cli.global.log_config();
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let code = cmd::run(&cli, &mut stdout.lock());
    ExitCode::from(code)
}
