use mapstruct_plugin::cli::commands::{CliArgs, Commands};
use mapstruct_plugin::cli::handlers::{handle_apply, handle_plan, resolve_config};
use mapstruct_plugin::util::logging::{init_logging, parse_level, LoggingConfig};
use mapstruct_plugin::VERSION;

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("mapstruct-plugin v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let exit_code = match &args.command {
        Commands::Plan(plan_args) => handle_plan(plan_args, &config),
        Commands::Apply(apply_args) => handle_apply(apply_args, &config, args.quiet),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let env_config = LoggingConfig::from_env();

    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        env_config.level
    };

    init_logging(LoggingConfig {
        level,
        include_target: args.verbose,
        ..env_config
    });
}
