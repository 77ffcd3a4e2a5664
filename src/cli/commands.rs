use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Adds MapStruct dependencies and compiler arguments to a build
#[derive(Parser, Debug)]
#[command(
    name = "mapstruct-plugin",
    about = "Adds MapStruct dependencies and compiler arguments to a build",
    version,
    long_about = "mapstruct-plugin reads a project manifest, detects Lombok, Spring, Camel \
                  and Quarkus usage, and adds the MapStruct artifacts and annotation \
                  processor arguments the build needs."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,

    #[arg(
        long,
        global = true,
        value_name = "TASK",
        help = "Compile task receiving the arguments (default: compileJava)"
    )]
    pub compile_task: Option<String>,

    #[arg(
        long,
        global = true,
        value_name = "PREFIX",
        allow_hyphen_values = true,
        help = "Prefix of every compiler argument (default: -Amapstruct)"
    )]
    pub prefix: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Show what would be added to a project",
        long_about = "Resolves dependencies and compiler arguments for a project manifest \
                      without modifying it.\n\n\
                      Examples:\n  \
                      mapstruct-plugin plan project.yaml\n  \
                      mapstruct-plugin plan project.json --format json"
    )]
    Plan(PlanArgs),

    #[command(
        about = "Add dependencies and compiler arguments to a project",
        long_about = "Resolves and applies dependencies and compiler arguments, then writes \
                      the updated manifest back.\n\n\
                      Examples:\n  \
                      mapstruct-plugin apply project.yaml\n  \
                      mapstruct-plugin apply project.yaml -o updated.yaml"
    )]
    Apply(ApplyArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct PlanArgs {
    #[arg(value_name = "MANIFEST", help = "Project manifest (.yaml, .yml or .json)")]
    pub manifest: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ApplyArgs {
    #[arg(value_name = "MANIFEST", help = "Project manifest (.yaml, .yml or .json)")]
    pub manifest: PathBuf,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the updated manifest here instead of overwriting MANIFEST"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Report format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
