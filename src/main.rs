use alphastream::app::commands::run_command;
use alphastream::utils::error::ErrorSeverity;
use alphastream::utils::{logger, validation::Validate};
use alphastream::{AlphaStreamClient, AlphaStreamError, CliConfig};
use clap::Parser;

fn report_and_exit(e: AlphaStreamError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,      // service declined the request
        ErrorSeverity::Medium => 2,   // transient, worth retrying
        ErrorSeverity::High => 1,     // bad request or unexpected response
        ErrorSeverity::Critical => 3, // configuration or system
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    let file = match config.load_file() {
        Ok(file) => file,
        Err(e) => {
            logger::init_cli_logger(config.verbose);
            report_and_exit(e);
        }
    };

    let log = config.log_settings(file.as_ref());
    if log.json {
        logger::init_json_logger(log.verbose);
    } else {
        logger::init_cli_logger(log.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        report_and_exit(e);
    }

    let settings = match config.resolve_with(file.as_ref()) {
        Ok(settings) => settings,
        Err(e) => report_and_exit(e),
    };

    if settings.credentials.is_none() {
        tracing::warn!("🔑 No credentials configured, requests are sent unauthenticated");
    }

    let client = match AlphaStreamClient::new(&settings) {
        Ok(client) => client,
        Err(e) => report_and_exit(e),
    };

    match run_command(&client, config.command).await {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => report_and_exit(e.into()),
        },
        Err(e) => report_and_exit(e),
    }
}
