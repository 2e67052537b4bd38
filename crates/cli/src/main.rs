mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{cmd_defaults, cmd_info, cmd_modules, cmd_show};

/// slsproj - Unified deployment descriptors for serverless projects
#[derive(Parser)]
#[command(name = "sls")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Load a project and print its merged descriptor
  Show {
    /// Project root (default: $SLS_PROJECT_ROOT, then the current directory)
    path: Option<String>,

    /// Stage to populate placeholders for
    #[arg(long, requires = "region")]
    stage: Option<String>,

    /// Region to populate placeholders for
    #[arg(long, requires = "stage")]
    region: Option<String>,

    /// Print the full descriptor as JSON
    #[arg(long)]
    json: bool,
  },

  /// List the modules discovered in a project
  Modules {
    /// Project root (default: $SLS_PROJECT_ROOT, then the current directory)
    path: Option<String>,

    /// Print modules as JSON
    #[arg(long)]
    json: bool,
  },

  /// Print the default project scaffold
  Defaults {
    /// Print the full descriptor as JSON
    #[arg(long)]
    json: bool,
  },

  /// Show tool version and profile
  Info,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match cli.command {
    Commands::Show {
      path,
      stage,
      region,
      json,
    } => {
      let target = match (stage.as_deref(), region.as_deref()) {
        (Some(stage), Some(region)) => Some(cmd::Target { stage, region }),
        _ => None,
      };
      cmd_show(path.as_deref(), target, json, cli.verbose)
    }
    Commands::Modules { path, json } => cmd_modules(path.as_deref(), json),
    Commands::Defaults { json } => cmd_defaults(json),
    Commands::Info => {
      cmd_info();
      Ok(())
    }
  };

  if let Err(ref e) = result {
    output::print_error(&format!("{:#}", e));
    std::process::exit(1);
  }

  Ok(())
}
