use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use semcfg::{AppError, CheckOptions, Descriptor, RenderOptions, ShowFormat, TemplateTarget};

#[derive(Parser)]
#[command(name = "semcfg")]
#[command(version)]
#[command(
    about = "Scaffold, validate, and render gateway deployment descriptors",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create deploy/ with the default process and stylesheet descriptors
    #[clap(visible_alias = "i")]
    Init {
        /// Overwrite an existing deploy/ directory
        #[arg(long)]
        force: bool,
    },
    /// Validate both descriptors and report diagnostics
    #[clap(visible_alias = "c")]
    Check {
        /// Treat warnings as failures (exit code 2)
        #[arg(long)]
        strict: bool,
    },
    /// Render ecosystem.config.js and tailwind.config.js
    #[clap(visible_alias = "r")]
    Render {
        /// Output directory (defaults to the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Add a descriptor entry from a built-in starter template
    #[clap(visible_alias = "tp")]
    Template {
        #[command(subcommand)]
        target: TemplateCommand,
    },
    /// Print a resolved descriptor
    #[clap(visible_alias = "s")]
    Show {
        /// Which descriptor to print
        #[arg(value_enum)]
        descriptor: DescriptorArg,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: FormatArg,
    },
}

#[derive(Subcommand)]
enum TemplateCommand {
    /// Append a managed app to deploy/process.toml
    App {
        /// Name for the new app
        #[arg(short, long)]
        name: String,
        /// Command line the supervisor executes
        #[arg(short, long)]
        script: String,
    },
    /// Append a named palette to deploy/stylesheet.toml
    Theme {
        /// Name for the new theme
        #[arg(short, long)]
        name: String,
    },
}

impl From<TemplateCommand> for TemplateTarget {
    fn from(command: TemplateCommand) -> Self {
        match command {
            TemplateCommand::App { name, script } => TemplateTarget::App { name, script },
            TemplateCommand::Theme { name } => TemplateTarget::Theme { name },
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DescriptorArg {
    Process,
    Stylesheet,
}

impl From<DescriptorArg> for Descriptor {
    fn from(arg: DescriptorArg) -> Self {
        match arg {
            DescriptorArg::Process => Descriptor::Process,
            DescriptorArg::Stylesheet => Descriptor::Stylesheet,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Toml,
}

impl From<FormatArg> for ShowFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ShowFormat::Json,
            FormatArg::Toml => ShowFormat::Toml,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Init { force } => semcfg::init(force).map(|_| 0),
        Commands::Check { strict } => {
            semcfg::check(CheckOptions { strict }).map(|outcome| outcome.exit_code)
        }
        Commands::Render { out } => semcfg::render(RenderOptions { out }).map(|_| 0),
        Commands::Template { target } => semcfg::template(target.into()).map(|_| 0),
        Commands::Show { descriptor, format } => {
            semcfg::show(descriptor.into(), format.into()).map(|_| 0)
        }
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
