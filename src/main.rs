// portfolio-terminal - the backend behind a terminal-style portfolio site
//
// Entry point. Pulls out the global --config flag, then dispatches on the
// first remaining argument.

use anyhow::{bail, Context};
use portfolio_terminal_lib::{
    api::{ApiServer, ApiServerConfig, AppState},
    core::{CommandInterpreter, RecordStore, Seeder},
    logging::init_logging,
    AppConfig, Database,
};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let raw_args: Vec<String> = env::args().skip(1).collect();
    let (config_path, args) = split_config_flag(raw_args)?;

    let config = AppConfig::resolve(config_path.as_deref())
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Failed to load configuration")?;

    init_logging(&config.logging);

    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "serve" => handle_serve(&config).await,
        "exec" => handle_exec(&config, &args[1..]).await,
        "seed" => handle_seed(&config, &args[1..]).await,
        "messages" => handle_messages(&config, &args[1..]).await,
        "status" => handle_status(&config).await,
        "version" | "-v" | "--version" => {
            println!("portfolio-terminal v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

/// Remove `--config <file>` from anywhere in the argument list.
fn split_config_flag(args: Vec<String>) -> anyhow::Result<(Option<PathBuf>, Vec<String>)> {
    let mut config_path = None;
    let mut rest = Vec::with_capacity(args.len());

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            match iter.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => bail!("--config needs a file path"),
            }
        } else {
            rest.push(arg);
        }
    }

    Ok((config_path, rest))
}

async fn handle_serve(config: &AppConfig) -> anyhow::Result<()> {
    let db = Arc::new(open_database(config).await?);

    if config.seed.auto_seed {
        match &config.seed.fixture {
            Some(fixture) => {
                let records = Seeder::load_file(fixture)
                    .with_context(|| format!("Failed to read seed fixture {}", fixture.display()))?;
                Seeder::new(Arc::clone(&db))
                    .seed_if_empty(&records)
                    .await
                    .context("Failed to seed the record store")?;
            }
            None => warn!("auto_seed is on but no seed fixture is configured"),
        }
    }

    let server_config = ApiServerConfig::try_from(&config.server)
        .context("Invalid [server] settings")?;
    let state = AppState::new(Arc::clone(&db), config.terminal.clone());

    info!(address = %config.bind_address(), "Serving portfolio terminal");
    ApiServer::new(state, server_config)
        .run()
        .await
        .context("API server failed")?;

    db.close().await;
    Ok(())
}

async fn handle_exec(config: &AppConfig, args: &[String]) -> anyhow::Result<()> {
    let line = args.join(" ");

    let db = Arc::new(open_database(config).await?);
    let interpreter = CommandInterpreter::new(RecordStore::new(db), config.terminal.clone());

    let response = interpreter
        .process(&line)
        .await
        .context("Failed to run command")?;

    println!("{}@portfolio:{}$ {}", response.user, response.path, line.trim());
    println!("{}", response.output);

    Ok(())
}

async fn handle_seed(config: &AppConfig, args: &[String]) -> anyhow::Result<()> {
    let replace = args.iter().any(|arg| arg == "--replace");
    let Some(fixture) = args.iter().find(|arg| !arg.starts_with("--")) else {
        eprintln!("Error: No seed file provided");
        eprintln!("Usage: portfolio-terminal seed <file> [--replace]");
        return Ok(());
    };

    let records = Seeder::load_file(fixture)
        .with_context(|| format!("Failed to read seed fixture {}", fixture))?;

    let db = Arc::new(open_database(config).await?);
    let report = Seeder::new(Arc::clone(&db))
        .seed(&records, replace)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Seeding failed")?;

    println!(
        "✓ Seeded {} record(s): {} projects, {} skills, {} contacts, {} experience",
        report.total(),
        report.projects,
        report.skills,
        report.contacts,
        report.experience
    );
    if replace {
        println!("  (existing records were replaced)");
    }

    db.close().await;
    Ok(())
}

async fn handle_messages(config: &AppConfig, args: &[String]) -> anyhow::Result<()> {
    let limit = args
        .first()
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(20);

    let db = open_database(config).await?;
    let messages = db.get_messages(limit).await.context("Failed to read messages")?;

    if messages.is_empty() {
        println!("No messages yet.");
    } else {
        println!("\nMessages (newest first):");
        println!("{}", "=".repeat(60));
        for message in &messages {
            println!(
                "#{} {} <{}> at {}",
                message.id, message.name, message.email, message.created_at
            );
            println!("   {}", message.content.replace('\n', "\n   "));
        }
        println!("{}", "=".repeat(60));
    }

    Ok(())
}

async fn handle_status(config: &AppConfig) -> anyhow::Result<()> {
    let db = open_database(config).await?;
    let stats = db.stats().await.context("Failed to read database statistics")?;

    println!("\nportfolio-terminal Status");
    println!("{}", "=".repeat(60));

    println!("\nDatabase:");
    println!("  Path:        {}", db.path().display());
    println!("  Projects:    {}", stats.total_projects);
    println!("  Skills:      {}", stats.total_skills);
    println!("  Contacts:    {}", stats.total_contacts);
    println!("  Experience:  {}", stats.total_experience);
    println!("  Messages:    {}", stats.total_messages);

    println!("\nServer:");
    println!("  Address:     {}", config.bind_address());
    println!("  Auto-seed:   {}", if config.seed.auto_seed { "on" } else { "off" });
    if let Some(fixture) = &config.seed.fixture {
        println!("  Fixture:     {}", fixture.display());
    }

    println!("{}", "=".repeat(60));

    Ok(())
}

async fn open_database(config: &AppConfig) -> anyhow::Result<Database> {
    Database::with_max_connections(&config.database.url, config.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database.url))
}

fn print_usage() {
    println!(
        r#"portfolio-terminal v{} - Terminal-style portfolio backend

USAGE:
    portfolio-terminal [--config <file>] <COMMAND> [OPTIONS]

COMMANDS:
    serve                    Start the HTTP API
    exec <command...>        Run one terminal command and print the output
    seed <file> [--replace]  Load records from a TOML fixture
    messages [limit]         Show received contact messages (default: 20)
    status                   Show database and server settings
    version                  Show version
    help                     Show this help

ENVIRONMENT:
    PORTFOLIO_CONFIG         Config file used when --config is not given
    PORTFOLIO_DATABASE_URL   Overrides [database] url
    PORTFOLIO_PORT           Overrides [server] port
    RUST_LOG                 Overrides [logging] level

EXAMPLES:
    portfolio-terminal seed database/seed.toml --replace
    portfolio-terminal exec sudo hire
    portfolio-terminal --config portfolio.toml serve
"#,
        env!("CARGO_PKG_VERSION")
    );
}
