//! StudyPlan — study schedule, quiz and notes summary server.

use std::sync::Arc;

use studyplan_core::StudyPlanConfig;
use studyplan_server::{build_router, AppState};
use studyplan_text::LanguageResources;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--bootstrap" | "bootstrap" => {
                let config = StudyPlanConfig::from_env()?;
                let resources =
                    LanguageResources::bootstrap(&config.resource_dir, &config.language)?;
                println!(
                    "{} stop words ready at {}",
                    resources.stopwords.len(),
                    resources.stopwords_path.display()
                );
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("StudyPlan — study schedule, quiz and notes summary server");
                println!();
                println!("Usage: studyplan [command]");
                println!();
                println!("Commands:");
                println!("  (none)       Start the server");
                println!("  bootstrap    Provision language resources and exit");
                println!("  help         Show this help message");
                println!();
                println!("Environment: PORT, STUDYPLAN_HOST, STUDYPLAN_RESOURCE_DIR,");
                println!("             STUDYPLAN_LANGUAGE, STUDYPLAN_QUESTION_BANK, STUDYPLAN_QUIZ_COUNT");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'studyplan help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let config = StudyPlanConfig::from_env()?;
    info!("Resource directory: {}", config.resource_dir.display());
    let addr = config.bind_addr();

    // Stop words and question bank are loaded once; failure aborts startup.
    let state = Arc::new(
        AppState::initialize(config)
            .map_err(|e| anyhow::anyhow!("Failed to initialize resources: {}", e))?,
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("StudyPlan server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
