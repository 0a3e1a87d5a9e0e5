use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use quill::completion::GeminiClient;
use quill::core::config::{self, EnvOverrides};
use quill::tui;

#[derive(Parser)]
#[command(name = "quill", about = "Terminal chat client for Google Gemini")]
struct Args {
    /// Model override (e.g. gemini-2.5-flash)
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to quill.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("quill.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Quill starting up");

    // Everything that can fail at startup runs before any terminal mode
    // change, so a failure leaves one readable line on stderr.
    let resolved = config::load_config()
        .and_then(|cfg| config::resolve(&cfg, args.model.as_deref(), &EnvOverrides::from_process_env()));
    let resolved = match resolved {
        Ok(r) => r,
        Err(e) => {
            eprintln!("quill: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match GeminiClient::try_new(
        resolved.api_key.clone(),
        Some(resolved.base_url.clone()),
        resolved.model_name.clone(),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("quill: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Using model {}", resolved.model_name);

    match tui::run(Arc::new(client), resolved.model_name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("quill: terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}
