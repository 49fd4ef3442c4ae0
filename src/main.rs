use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser, Subcommand};
use iconwrap::{
    Config, DEFAULT_INDIR, DEFAULT_PREFIX, DEFAULT_SIZE, IconError, Logger, OutputFormat, build,
};

#[derive(Parser)]
#[command(name = "iconwrap")]
#[command(about = "Wrap SVG icons as template-literal functions or EJS partials", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write one ES module per icon, exporting a function that returns the SVG
    Build(BuildArgs),

    /// Write one EJS partial per icon
    #[command(name = "build-ejs")]
    BuildEjs(BuildArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Directory containing the source SVG files
    #[arg(long, default_value = DEFAULT_INDIR)]
    indir: PathBuf,

    /// Output directory [default: ./build/bs-icons, or ./build/bs-icons-ejs for build-ejs]
    #[arg(long)]
    outdir: Option<PathBuf>,

    /// Prefix of generated names (empty string disables it)
    #[arg(long, default_value = DEFAULT_PREFIX)]
    out_name_prefix: String,

    /// Size used when the icon doesn't define one
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    default_size: u32,

    /// Input path marker of an icon set sized by its square viewBox [default: heroicons]
    #[arg(long = "sized-icon-set", value_name = "MARKER")]
    sized_icon_sets: Vec<String>,

    /// Only print errors and warnings
    #[arg(long)]
    silent: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(lowercase_command(env::args_os())) {
        Ok(cli) => cli,
        Err(err) => {
            // --help and the help subcommand come through here too
            let failed = err.use_stderr();
            let _ = err.print();
            return if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    let (format, args) = match command {
        Command::Build(args) => (OutputFormat::Function, args),
        Command::BuildEjs(args) => (OutputFormat::Ejs, args),
    };

    let config = match resolve_config(format, args) {
        Ok(config) => config,
        Err(err) => {
            Logger::default().error(&err);
            return ExitCode::FAILURE;
        }
    };

    let logger = Logger::new(config.silent);
    match build(&config, &logger) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            logger.error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Lowercase the command word so `BUILD` and `Build` work like `build`.
/// Only the first argument after the program name that isn't a flag is touched.
fn lowercase_command(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args: Vec<OsString> = args.into_iter().collect();
    let command = args
        .iter_mut()
        .skip(1)
        .find(|arg| !arg.to_string_lossy().starts_with('-'));
    if let Some(command) = command {
        if let Some(word) = command.to_str() {
            *command = OsString::from(word.to_lowercase());
        }
    }
    args
}

/// Resolve the parsed arguments into a build configuration.
fn resolve_config(format: OutputFormat, args: BuildArgs) -> Result<Config, IconError> {
    let outdir = args
        .outdir
        .unwrap_or_else(|| PathBuf::from(format.default_outdir()));
    let outdir = env::current_dir()
        .map(|cwd| cwd.join(&outdir))
        .map_err(IconError::CurrentDir)?;

    let defaults = Config::default();
    Ok(Config {
        indir: args.indir,
        outdir,
        prefix: args.out_name_prefix,
        format,
        default_size: args.default_size,
        sized_icon_sets: if args.sized_icon_sets.is_empty() {
            defaults.sized_icon_sets
        } else {
            args.sized_icon_sets
        },
        silent: args.silent,
    })
}
