use anyhow::Result;
use clap::{Parser, Subcommand};
use facilitation::{graphql, server};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true, env = "FACILITATION_LOG_LEVEL")]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the GraphQL API over HTTP
    Serve {
        #[clap(short, long, default_value = "4000", env = "FACILITATION_PORT")]
        port: u16,
        #[clap(
            short,
            long,
            default_value = "facilitation.db",
            env = "FACILITATION_DATABASE"
        )]
        database: String,
        #[clap(long, env = "FACILITATION_CORS_ORIGIN")]
        cors_origin: Option<String>,
    },
    Db {
        #[clap(subcommand)]
        command: DbCommands,
    },
    /// Print the GraphQL schema definition
    Schema,
}

#[derive(Subcommand, Debug)]
enum DbCommands {
    Init {
        #[clap(
            short,
            long,
            default_value = "facilitation.db",
            env = "FACILITATION_DATABASE"
        )]
        database: String,
    },
    Migrate {
        #[clap(subcommand)]
        direction: server::MigrateDirection,
        #[clap(
            short,
            long,
            default_value = "facilitation.db",
            env = "FACILITATION_DATABASE"
        )]
        database: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Serve {
            port,
            database,
            cors_origin,
        } => {
            info!("Starting server on port {}", port);
            server::start_server(port, &database, cors_origin.as_deref()).await?;
        }
        Commands::Db { command } => match command {
            DbCommands::Init { database } => {
                info!("Initializing database: {}", database);
                server::migrate_database(&database, server::MigrateDirection::Up).await?;
            }
            DbCommands::Migrate {
                direction,
                database,
            } => {
                info!("Running database migration: {:?}", direction);
                server::migrate_database(&database, direction).await?;
            }
        },
        Commands::Schema => {
            println!("{}", graphql::schema_sdl());
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "sqlx=warn,sea_orm_migration=warn,{}",
            log_level
        )))
        .without_time()
        .init();
}
