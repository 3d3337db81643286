use clap::Parser;
use mechanic_shop::console::Console;
use mechanic_shop::database::{self, Migrator};
use mechanic_shop::ids::IdGenerator;
use mechanic_shop::menu;
use mechanic_shop::settings::{DEFAULT_CONFIG_FILE, Settings};
use mechanic_shop::workflows::Session;
use mechanic_shop::ShopError;
use sea_orm_migration::MigratorTrait;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Interactive console for the mechanic shop database.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Database name
    dbname: String,
    /// Database port
    port: u16,
    /// Database user (connects with an empty password unless configured)
    user: String,
    /// Database host
    #[arg(long)]
    host: Option<String>,
    /// Settings file; ignored if missing
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Create the shop tables before showing the menu
    #[arg(long)]
    migrate: bool,
    /// Log level (error, warn, info, debug, trace); logs go to stderr
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = vec![
            ("database.name", self.dbname.clone()),
            ("database.port", self.port.to_string()),
            ("database.user", self.user.clone()),
        ];
        if let Some(host) = &self.host {
            overrides.push(("database.host", host.clone()));
        }
        if let Some(level) = &self.log {
            overrides.push(("log.level", level.clone()));
        }
        overrides
    }
}

fn init_logging(level: &str) {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = Settings::load(&args.config, &args.overrides()).map_err(ShopError::from);
    let settings = match loaded {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error - {err}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&settings.log.level);

    let db = match database::connect(&settings.database).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(error = %err, "Connection failed");
            eprintln!("Error - Unable to connect to database: {err}");
            eprintln!("Make sure PostgreSQL is running and accepting connections");
            return ExitCode::FAILURE;
        }
    };

    if args.migrate {
        if let Err(err) = Migrator::up(&db, None).await {
            tracing::error!(error = %err, "Migration failed");
            eprintln!("Error - Unable to create tables: {err}");
            return ExitCode::FAILURE;
        }
        tracing::info!("Shop tables ready");
    }

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(
        console,
        IdGenerator::from_settings(settings.ids),
        settings.cars,
    );

    let outcome = menu::run(&mut session, &db, || chrono::Local::now().date_naive()).await;

    if let Err(err) = db.close().await {
        tracing::warn!(error = %err, "Closing the connection failed");
    }

    match outcome {
        Ok(()) => {
            println!("Bye !");
            ExitCode::SUCCESS
        }
        Err(err) => {
            err.log_internal();
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
