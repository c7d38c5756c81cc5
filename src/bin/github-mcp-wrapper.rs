//! github-mcp-wrapper CLI
//!
//! Finds a GitHub token and a GitHub MCP server, then runs the server with
//! the token in its environment.

use anyhow::{Result, anyhow};
use clap::Parser;
use clap::error::ErrorKind;
use github_mcp_wrapper::{
    CliOptions, ConfigLayer, ConfigLoader, HostEnvironment, McpWrapper, RunOutcome,
    SafeCommandExecutor, SystemHost, WrapperConfig, WrapperError,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Launch the GitHub MCP server with automatic token discovery
#[derive(Parser)]
#[command(name = "github-mcp-wrapper")]
#[command(version)]
#[command(about = "Launch the GitHub MCP server with automatic token discovery", long_about = None)]
#[command(after_help = "Arguments after `--` are passed to the server unchanged.")]
struct Cli {
    /// Port exported to the server as PORT [env: GITHUB_MCP_PORT, default: 3000]
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to the server executable or entry script [env: GITHUB_MCP_SERVER_PATH]
    #[arg(long, value_name = "PATH")]
    server_path: Option<PathBuf>,

    /// GitHub token to use instead of searching for one
    #[arg(short, long, value_name = "TOKEN")]
    token: Option<String>,

    /// Only check that the token works, then exit
    #[arg(long)]
    validate: bool,

    /// Log level for the wrapper and the server [env: LOG_LEVEL, default: info]
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Arguments passed to the server
    #[arg(last = true, value_name = "SERVER_ARGS")]
    server_args: Vec<String>,
}

impl Cli {
    fn into_options(self) -> CliOptions {
        CliOptions {
            settings: ConfigLayer {
                token: self.token,
                server_path: self.server_path,
                port: self.port,
                log_level: self.log_level,
            },
            validate_only: self.validate,
            extra_args: self.server_args,
        }
    }
}

#[tokio::main]
async fn main() {
    let result = run().await;

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("\n❌ Error");
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

async fn run() -> Result<i32> {
    // clap exits with 2 on usage errors; every failure here is 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(0);
        }
        Err(e) => {
            e.print()?;
            return Ok(1);
        }
    };

    let probe_host = SystemHost::default();
    let config = match ConfigLoader::load(cli.into_options(), &probe_host.env_vars()) {
        Ok(config) => config,
        Err(e) => return Ok(report_error(&e)),
    };

    init_tracing(&config)?;

    let host = SystemHost::new(SafeCommandExecutor::new(config.helper_timeout));
    match McpWrapper::new(&host, &config).run().await {
        Ok(outcome) => Ok(report_outcome(&outcome)),
        Err(e) => Ok(report_error(&e)),
    }
}

/// Logs go to stderr; stdout belongs to the server's stdio transport
fn init_tracing(config: &WrapperConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("github_mcp_wrapper={}", config.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

fn report_outcome(outcome: &RunOutcome) -> i32 {
    match outcome {
        RunOutcome::Validated { login, source } => {
            eprintln!("✅ Token is valid (authenticated as {login}, from {source})");
        }
        RunOutcome::ServerExited { code } if *code != 0 => {
            eprintln!("⚠️  Server exited with code {code}");
        }
        RunOutcome::ServerExited { .. } => {}
    }
    outcome.exit_code()
}

fn report_error(error: &WrapperError) -> i32 {
    eprintln!("\n❌ {}", error);
    eprintln!("[{}]", error.code());

    let actions = error.suggested_actions();
    if !actions.is_empty() {
        eprintln!("\nTo fix this:");
        for action in actions {
            eprintln!("  - {}", action);
        }
    }

    error.exit_code()
}
