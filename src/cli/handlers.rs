//! Command handlers. Each returns the process exit code.

use super::commands::{ApplyArgs, CliArgs, PlanArgs};
use super::output::OutputFormatter;
use crate::config::PluginConfig;
use crate::plugin::MapstructPlugin;
use crate::project::Project;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Environment configuration with command-line overrides applied.
///
/// Overrides replace environment values before validation, so a bad
/// environment value does not fail a run that overrides it.
pub fn resolve_config(args: &CliArgs) -> Result<PluginConfig> {
    let default_config = PluginConfig::default();
    let log_level = if let Some(level) = &args.log_level {
        level.to_lowercase()
    } else if args.verbose {
        "debug".to_string()
    } else if args.quiet {
        "error".to_string()
    } else {
        default_config.log_level
    };

    let config = PluginConfig {
        log_level,
        compile_task: args
            .compile_task
            .clone()
            .unwrap_or(default_config.compile_task),
        arg_prefix: args.prefix.clone().unwrap_or(default_config.arg_prefix),
    };

    config.validate().context("Invalid plugin configuration")?;
    debug!(?config, "Resolved plugin configuration");
    Ok(config)
}

pub fn handle_plan(args: &PlanArgs, config: &PluginConfig) -> i32 {
    match run_plan(args, config) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

pub fn handle_apply(args: &ApplyArgs, config: &PluginConfig, quiet: bool) -> i32 {
    match run_apply(args, config) {
        Ok(output) => {
            if !quiet {
                println!("{}", output);
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn run_plan(args: &PlanArgs, config: &PluginConfig) -> Result<String> {
    let project = Project::load(&args.manifest)
        .with_context(|| format!("Failed to load {}", args.manifest.display()))?;

    let plugin = MapstructPlugin::from_config(config);
    let plan = plugin
        .plan(&project, project.options())
        .with_context(|| format!("Failed to plan MapStruct for '{}'", project.name()))?;

    OutputFormatter::new(args.format.into()).format_plan(project.name(), &plan)
}

fn run_apply(args: &ApplyArgs, config: &PluginConfig) -> Result<String> {
    let mut project = Project::load(&args.manifest)
        .with_context(|| format!("Failed to load {}", args.manifest.display()))?;

    let options = project.options().clone();
    let plugin = MapstructPlugin::from_config(config);
    let plan = plugin
        .apply(&mut project, &options)
        .with_context(|| format!("Failed to apply MapStruct to '{}'", project.name()))?;

    let destination = args.output.as_ref().unwrap_or(&args.manifest);
    project
        .save(destination)
        .with_context(|| format!("Failed to write {}", destination.display()))?;
    info!(path = %destination.display(), "Updated project manifest");

    let report = MapstructPlugin::report(project.name(), &plan);
    OutputFormatter::new(args.format.into()).format_report(&report)
}
