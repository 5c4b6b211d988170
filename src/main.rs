#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use task_planner::app::TaskPlannerApp;
use task_planner::config::{AppConfig, CliArgs};
use task_planner::io::{BackendClient, Submitter};

fn main() -> eframe::Result<()> {
    let cli = CliArgs::parse();

    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("task-planner-net")
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "failed to start network runtime");
            std::process::exit(1);
        }
    };

    let client = match config.backend_url.clone() {
        Some(url) => match BackendClient::new(url) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!(error = %e, "failed to build backend client");
                std::process::exit(1);
            }
        },
        None => {
            tracing::warn!("no backend endpoint configured; set TASK_BACKEND_URL or [backend] url");
            None
        }
    };
    if let Some(client) = &client {
        tracing::info!(endpoint = %client.endpoint(), "using backend");
    }
    let submitter = Submitter::new(runtime.handle().clone(), client);
    let config_dir = config.config_dir.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 820.0])
            .with_min_inner_size([480.0, 400.0])
            .with_title("Task Planner"),
        ..Default::default()
    };

    eframe::run_native(
        "Task Planner",
        options,
        Box::new(|cc| Ok(Box::new(TaskPlannerApp::new(cc, submitter, config_dir)))),
    )
}
