use super::render::{print_document, print_documents, print_edit_preview, print_messages};
use super::setup::{Cli, Commands, EditArgs};
use chrono::{Local, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;
use docwatch::api::DocwatchApi;
use docwatch::commands::config::{self as config_cmd, ConfigAction};
use docwatch::config::DocwatchConfig;
use docwatch::error::{DocwatchError, Result};
use docwatch::index::DisplayIndex;
use docwatch::store::fs::FileStore;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: DocwatchApi<FileStore>,
    config: DocwatchConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    // Config must work even when the store itself is unreadable
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&data_dir, key.clone(), value.clone());
    }

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let mut ctx = init_context(&data_dir, today)?;

    match cli.command {
        Some(Commands::Add {
            name,
            expiry,
            lead_days,
        }) => handle_add(&mut ctx, name, expiry, lead_days),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Alerts) => handle_alerts(&ctx),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Edit { index, change, yes }) => handle_edit(&mut ctx, index, change, yes),
        Some(Commands::Remove { index, yes }) => handle_remove(&mut ctx, index, yes),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Config { .. }) => unreachable!("config is handled before the store opens"),
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "docwatch=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Logs go to stderr so listings stay pipeable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    ProjectDirs::from("com", "docwatch", "docwatch")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            DocwatchError::Config(
                "could not determine a data directory, pass --data-dir".to_string(),
            )
        })
}

fn init_context(data_dir: &Path, today: NaiveDate) -> Result<AppContext> {
    let config = DocwatchConfig::load(data_dir)?;
    let store = FileStore::new(config.store_path(data_dir));
    tracing::debug!(store = %store.path().display(), "opening store");

    let api = DocwatchApi::open(store)?.with_today(today);
    Ok(AppContext { api, config })
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    expiry: NaiveDate,
    lead_days: Option<i64>,
) -> Result<()> {
    let lead_days = lead_days.unwrap_or_else(|| i64::from(ctx.config.default_lead_days));
    let result = ctx.api.add_document(&name, expiry, lead_days)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_documents()?;
    print_documents(&result.listed_documents, "No documents registered.");
    print_messages(&result.messages);
    Ok(())
}

fn handle_alerts(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_alerts()?;
    print_documents(
        &result.listed_documents,
        "No documents expired or in warning.",
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_documents(&term)?;
    print_documents(
        &result.listed_documents,
        &format!("No documents match \"{}\".", term),
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: DisplayIndex,
    change: EditArgs,
    yes: bool,
) -> Result<()> {
    let staged = ctx.api.stage_edit(index, change.into_field_edit())?;
    print_edit_preview(&staged, &staged.preview(ctx.api.today()));

    let confirmed = if yes {
        true
    } else {
        match confirm("Save these changes?") {
            Ok(answer) => answer,
            Err(e) => {
                ctx.api.rollback_edit(staged)?;
                return Err(e);
            }
        }
    };

    let result = if confirmed {
        ctx.api.commit_edit(staged)?
    } else {
        ctx.api.rollback_edit(staged)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, index: DisplayIndex, yes: bool) -> Result<()> {
    let target = ctx.api.view_document(index)?;
    print_document(&target);

    if !yes && !confirm("Remove this document?")? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let result = ctx.api.remove_document(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let count = ctx.api.documents().len();
    if count > 0 && !yes && !confirm(&format!("Remove all {} document(s)?", count))? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let result = ctx.api.clear_documents()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = config_cmd::run(data_dir, action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        for (key, value) in config.entries() {
            println!("{} = {}", key, value);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Asks a yes/no question on stdout. Anything but "y"/"yes" is a no,
/// including end of input.
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N]: ", question);
    io::stdout().flush().map_err(DocwatchError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(DocwatchError::Io)?;

    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
