// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> ConfigLoader --> Logging --> Command Dispatch
//!   Sync | Remotes | Add | List | Options | Configs
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use vendor_sync::cli::{self, Cli, Command};
use vendor_sync::cmd::add::run_add_command;
use vendor_sync::cmd::config::{run_configs_command, run_options_command};
use vendor_sync::cmd::list::run_list_command;
use vendor_sync::cmd::sync::{run_remotes_command, run_sync_command};
use vendor_sync::config::loader::ConfigLoader;
use vendor_sync::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use vendor_sync::git::cmd::ensure_git_available;
use vendor_sync::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let root = match std::env::current_dir() {
        Ok(cwd) => cli.global.root_or(&cwd),
        Err(e) => {
            eprintln!("Failed to determine current directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    let loader = match build_config_loader(&cli, &root) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Invalid option: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let loaded_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &root, &loaded_files).await
}

fn build_log_config(config: &Config) -> LogConfig {
    let log_file = config.global.log_file.as_os_str();
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            (!log_file.is_empty()).then(|| config.global.log_file.display().to_string()),
        )
        .build()
}

async fn dispatch_command(
    cli: &Cli,
    config: &Config,
    root: &Path,
    loaded_files: &[String],
) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Configs) => {
            run_configs_command(loaded_files);
            Ok(())
        }
        Some(Command::List) => run_list_command(root),
        Some(Command::Sync(args)) => ensure_git_available()
            .map_err(anyhow::Error::from)
            .and_then(|()| run_sync_command(args, config, root)),
        Some(Command::Remotes(args)) => ensure_git_available()
            .map_err(anyhow::Error::from)
            .and_then(|()| run_remotes_command(args, config, root)),
        Some(Command::Add(args)) => match ensure_git_available() {
            Ok(()) => run_add_command(args, config, root).await,
            Err(e) => Err(e.into()),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(cli: &Cli, root: &Path) -> vendor_sync::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(root.join(CONFIG_FILE_NAME));
    for path in &cli.global.configs {
        loader = loader.add_toml_file(resolve(root, path));
    }
    loader = loader.with_env_prefix(ENV_PREFIX);

    let command_overrides = cli
        .command
        .as_ref()
        .map(Command::to_config_overrides)
        .unwrap_or_default();
    for option in cli.global.to_config_overrides().iter().chain(&command_overrides) {
        loader = loader.set_option(option)?;
    }
    Ok(loader)
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || path.exists() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
