use std::process::ExitCode;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use voicectl::aws::client::{error_hint, AwsClients};
use voicectl::cli::{self, CliError};
use voicectl::operation::{dispatch, Outcome};
use voicectl::Error;

const EXIT_FAILURE: u8 = 1;
const EXIT_CANCELLED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    let invocation = match cli::parse_invocation(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(CliError::Usage(e)) => e.exit(),
        Err(CliError::Invocation(e)) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    init_logging(invocation.global.log_level.as_deref());

    let descriptor = invocation.descriptor();
    if descriptor.mutating && !invocation.force {
        match cli::confirm(descriptor) {
            Ok(true) => {}
            Ok(false) => {
                eprintln!("Aborted, nothing was sent");
                return ExitCode::from(EXIT_FAILURE);
            }
            Err(e) => {
                eprintln!("Error: unable to read confirmation: {}", e);
                return ExitCode::from(EXIT_FAILURE);
            }
        }
    }

    let global = &invocation.global;
    let clients = match AwsClients::new(
        &global.profile,
        global.region.as_deref(),
        global.endpoint_url.clone(),
    )
    .await
    {
        Ok(clients) => clients,
        Err(e) => {
            error!("Failed to initialize AWS client: {:#}", e);
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    debug!(
        "Profile '{}', region {}, endpoint {}",
        clients.profile,
        clients.region,
        clients.http.get_endpoint()
    );

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let select = invocation.select.as_deref();
    match dispatch(&clients.http, invocation.context, select, &cancel).await {
        Ok(Outcome::Completed(value)) => {
            if let Some(text) = cli::render(&value) {
                println!("{}", text);
            }
            ExitCode::SUCCESS
        }
        Ok(Outcome::Cancelled) => {
            eprintln!("cancelled");
            ExitCode::from(EXIT_CANCELLED)
        }
        Err(e) => {
            report(&e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Logs go to stderr so stdout stays clean
fn init_logging(level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(cli::log_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report(err: &Error) {
    eprintln!("Error: {}", err);
    if let Some(hint) = error_hint(err) {
        eprintln!("  {}", hint);
    }
}
