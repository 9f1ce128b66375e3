use super::args::{Cli, Commands};
use super::print::{print_config, print_messages, print_records};
use super::terminal::TerminalInteraction;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use psalmz::api::{self, ConfigAction, PsalmzApi};
use psalmz::commands::Labels;
use psalmz::config::PsalmzConfig;
use psalmz::error::{PsalmzError, Result};
use psalmz::model::OrderPolicy;
use psalmz::session::SessionOptions;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "PSALMZ_HOME";

struct AppContext {
    config_dir: PathBuf,
    config: PsalmzConfig,
    file: PathBuf,
    policy: OrderPolicy,
}

impl AppContext {
    fn open_api(&self) -> Result<PsalmzApi> {
        debug!(file = %self.file.display(), policy = ?self.policy, "opening book");
        PsalmzApi::open(&self.file, self.policy, Labels::from_config(&self.config))
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        None => handle_interactive(&ctx, false),
        Some(Commands::Interactive { once }) => handle_interactive(&ctx, once),
        Some(Commands::Lookup { id }) => handle_lookup(&ctx, id),
        Some(Commands::List { from, to, full }) => handle_list(&ctx, from, to, full),
        Some(Commands::Check) => handle_check(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match std::env::var_os(HOME_ENV) {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "psalmz", "psalmz")
            .ok_or_else(|| PsalmzError::Config("Could not determine config dir".to_string()))?
            .config_dir()
            .to_path_buf(),
    };

    let config = PsalmzConfig::load(&config_dir)?;
    let file = cli.file.clone().unwrap_or_else(|| config.file.clone());
    let policy = if cli.sort {
        OrderPolicy::Sort
    } else {
        config.order_policy()
    };

    Ok(AppContext {
        config_dir,
        config,
        file,
        policy,
    })
}

fn handle_interactive(ctx: &AppContext, once: bool) -> Result<ExitCode> {
    let api = ctx.open_api()?;
    println!("{}", api.labels().title.bold());

    let stdin = io::stdin();
    let terminal = TerminalInteraction::new(stdin.lock(), io::stdout(), &api.labels().noun);
    let summary = api.interact(terminal, SessionOptions { repeat: !once })?;

    debug!(
        lookups = summary.lookups,
        found = summary.found,
        missing = summary.missing,
        "session finished"
    );
    Ok(ExitCode::SUCCESS)
}

fn handle_lookup(ctx: &AppContext, id: i64) -> Result<ExitCode> {
    let api = ctx.open_api()?;
    let result = api.lookup(id);
    print_messages(&result.messages);

    if result.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn handle_list(
    ctx: &AppContext,
    from: Option<i64>,
    to: Option<i64>,
    full: bool,
) -> Result<ExitCode> {
    let api = ctx.open_api()?;
    let result = api.list(from, to);
    print_records(&result.records, full);
    print_messages(&result.messages);
    Ok(ExitCode::SUCCESS)
}

fn handle_check(ctx: &AppContext) -> Result<ExitCode> {
    let api = ctx.open_api()?;
    let result = api.check();
    println!("{}", ctx.file.display());
    print_messages(&result.messages);
    Ok(ExitCode::SUCCESS)
}

fn handle_config(
    ctx: &AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<ExitCode> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api::config(&ctx.config_dir, action)?;
    match &result.config {
        // a successful set also carries the config, but only ShowAll prints it
        Some(config) if result.messages.is_empty() => print_config(config),
        _ => print_messages(&result.messages),
    }

    if result.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
