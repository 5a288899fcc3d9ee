use anyhow::{Context, Result};
use clap::Parser;
use gradepoint::app::GradepointApp;
use gradepoint::cli::CliArgs;
use gradepoint::config::Config;
use gradepoint_core::app::Gradebook;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    init_tracing(cli_args.log_file.as_deref())?;

    info!("Starting gradepoint");

    let gradebook = Gradebook::from_drafts(cli_args.courses.clone());

    if cli_args.print {
        let totals = gradebook.totals();
        info!(
            "Computed CGPA {} from {} of {} courses",
            gradebook.cgpa(),
            totals.counted,
            gradebook.len()
        );
        println!("{}", gradebook.cgpa());
        return Ok(());
    }

    let config = Config::from_cli(&cli_args)?;
    info!("Loaded config: {:?}", config.ui);

    let app = GradepointApp::new(gradebook, &config);
    match app.run() {
        Ok(gradebook) => {
            info!("Final CGPA {} over {} courses", gradebook.cgpa(), gradebook.len());
        }
        Err(e) => {
            error!("Application error: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }

    info!("gradepoint shut down cleanly");
    Ok(())
}
