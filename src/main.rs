//! Service entry point: line-delimited JSON requests on stdin, one
//! response per line on stdout. Logs go to stderr via `env_logger`, so
//! the protocol stream stays clean.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use barcode_snip::protocol::{Request, Response};
use barcode_snip::Scanner;

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[tokio::main]
async fn main() {
    // .env is optional; real environment variables win.
    let _ = dotenvy::dotenv();
    env_logger::init();

    let copy_to_clipboard = env_flag("BARCODE_SNIP_COPY_RESULT");
    let mut scanner = match Scanner::with_defaults(copy_to_clipboard) {
        Ok(scanner) => scanner,
        Err(e) => {
            log::error!("Failed to initialize scanner: {e}");
            std::process::exit(1);
        }
    };

    log::info!("barcode-snip ready (copy_to_clipboard={copy_to_clipboard})");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match Request::parse(line) {
            Ok(request) => scanner.handle(request).await,
            Err(e) => Response::error(e.to_string()),
        };

        let mut payload = match serde_json::to_string(&response) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize response: {e}");
                continue;
            }
        };
        payload.push('\n');

        if stdout.write_all(payload.as_bytes()).await.is_err() {
            break;
        }
        let _ = stdout.flush().await;
    }

    log::info!("stdin closed, shutting down");
}
