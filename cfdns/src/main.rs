//! cfdns 命令行入口

use std::process::ExitCode;

use cfdns::{AppError, Invocation, parse_args};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let invocation = match parse_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(AppError::Usage(text)) => {
            eprint!("{text}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&invocation);

    let mut stdout = std::io::stdout().lock();
    match cfdns::run(invocation, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// 日志输出到 stderr；`RUST_LOG` 优先，否则 `-v` 为 debug，默认 warn
fn init_logging(invocation: &Invocation) {
    let default_level = if invocation.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}
