//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler, validates
//! the roots and runs the selected mode.

use anyhow::{anyhow, Context, Result};
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

use jellylink::cli::Args;
use jellylink::output as out;
use jellylink::{
    create_template_config, default_config_path, load_config, run_mode, shutdown, Config,
    TracingReporter,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config / --init-config before logging init
    if args.print_config {
        return print_config_location();
    }
    if args.init_config {
        let path = default_config_path()
            .ok_or_else(|| anyhow!("Could not determine a config path; set JELLYLINK_CONFIG"))?;
        create_template_config(&path)?;
        out::print_success(&format!("A template config was written to: {}", path.display()));
        out::print_info("Edit it to set `source`, `destination` and `mode`, then run jellylink again.");
        return Ok(());
    }

    // Config file values first, CLI flags win.
    let mut cfg = match load_config() {
        Ok(Some(cfg)) => cfg,
        Ok(None) => Config::default(),
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            return Err(e);
        }
    };
    args.apply_overrides(&mut cfg);

    // Initialize logging and keep the guard so it can be dropped on interrupt.
    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; finishing the current entry and stopping...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })
        .context("install Ctrl-C handler")?;
    }

    debug!("Starting jellylink: {:?}", args);

    let result = (|| -> Result<()> {
        let mode = cfg.mode.ok_or_else(|| {
            anyhow!("No mode selected; pass --type movies|series|pictures or set <mode> in the config")
        })?;
        cfg.validate_and_normalize()?;

        let stats = run_mode(&cfg, mode, &TracingReporter);
        out::print_summary(mode, &stats, cfg.dry_run);
        if shutdown::is_requested() {
            out::print_warn("Run was interrupted; re-run to finish linking.");
        }
        Ok(())
    })();

    if let Err(e) = &result {
        error!(error = %format!("{e:#}"), "jellylink failed");
        out::print_error(&format!("{e:#}"));
    }

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn print_config_location() -> Result<()> {
    if let Ok(cfg_env) = std::env::var(jellylink::config::CONFIG_ENV) {
        out::print_info(&format!("Using JELLYLINK_CONFIG (explicit):\n  {}\n", cfg_env));
        return Ok(());
    }
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default jellylink config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there yet. Run with --init-config to create a template.");
            }
        }
        None => out::print_error("Could not determine a default config path"),
    }
    Ok(())
}
