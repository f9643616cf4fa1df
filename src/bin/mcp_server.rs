use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use phone_input::config::FormatterConfig;
use phone_input::mcp_server::McpServer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> io::Result<()> {
    // stdout carries the protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = FormatterConfig::from_env();
    if let Err(err) = config.validate() {
        error!("{}", err);
    }

    let server = McpServer::new(&config);
    info!("phone-input MCP server ready on stdio (default country {})", config.default_iso_code);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(request) => {
                let id = request["id"].clone();

                match server.handle_request(request).await {
                    Ok(mut resp) => {
                        if !id.is_null() {
                            if let Some(obj) = resp.as_object_mut() {
                                obj.insert("id".to_string(), id);
                            }
                        }
                        resp
                    }
                    Err(err) => {
                        error!("Request failed: {}", err);
                        json!({
                            "id": id,
                            "error": {
                                "code": err.code(),
                                "message": err.to_string()
                            }
                        })
                    }
                }
            }
            Err(_) => json!({
                "error": {
                    "code": -32700,
                    "message": "Parse error"
                }
            }),
        };

        writeln!(stdout, "{}", response)?;
        stdout.flush()?;
    }

    Ok(())
}
