//! Copo MCP Server
//!
//! Line-delimited JSON-RPC over stdin/stdout. Logs go to stderr.
//!
//! Tools:
//! - find_drink: Best drink for a list of ingredients
//! - find_recipe: Recipe lookup by approximate drink name
//! - list_ingredients: Distinct catalog ingredients
//! - popular_ingredients: Most frequent catalog ingredients
//! - list_drinks: Catalog drink names
//!
//! Resources:
//! - copo://drinks/{name} - Recipe of one catalog drink

mod config;
mod tools;

use std::io::{self, BufRead, Write};

use copo_bar::Bar;
use copo_core::{codes, Catalog, CopoError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use config::ServerConfig;

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "copo";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const RESOURCE_PREFIX: &str = "copo://drinks/";

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    const PARSE_ERROR: i32 = -32700;
    const METHOD_NOT_FOUND: i32 = -32601;
    const INVALID_PARAMS: i32 = -32602;
    const INTERNAL_ERROR: i32 = -32603;

    fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), data: None }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_PARAMS, message)
    }
}

impl From<CopoError> for McpError {
    fn from(err: CopoError) -> Self {
        let code = match err.code.as_str() {
            codes::INVALID_ARGUMENT | codes::NOT_FOUND => Self::INVALID_PARAMS,
            _ => Self::INTERNAL_ERROR,
        };
        Self {
            code,
            message: err.message.clone(),
            data: serde_json::to_value(&err).ok(),
        }
    }
}

struct Server {
    bar: Bar,
    config: ServerConfig,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    init_logging();

    let config = ServerConfig::from_env();
    let catalog = match Catalog::from_path(&config.catalog_path) {
        Ok(c) => c,
        Err(e) => {
            let err = CopoError::from(e);
            error!(error = %err, "cannot start without a catalog");
            std::process::exit(1);
        }
    };

    let server = Server { bar: Bar::new(catalog), config };

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Copo MCP Server started");
    info!(path = %server.config.catalog_path.display(), "catalog path");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    info!("Server ready, waiting for requests...");

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("Client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(bytes = line.len(), "received");

                let response = match serde_json::from_str::<McpRequest>(line) {
                    Ok(request) => {
                        debug!(method = %request.method, "processing");
                        let response = handle_request(&server, &request);
                        // Notifications (no id) get no response
                        if request.id.is_none() {
                            debug!(method = %request.method, "notification processed");
                            continue;
                        }
                        response
                    }
                    Err(e) => {
                        warn!(error = %e, "error parsing request");
                        McpResponse {
                            jsonrpc: "2.0".to_string(),
                            id: None,
                            result: None,
                            error: Some(McpError::new(McpError::PARSE_ERROR, format!("Parse error: {}", e))),
                        }
                    }
                };

                if let Err(e) = write_response(&response) {
                    error!(error = %e, "error writing response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        }
    }

    info!("Server shutting down");
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let json = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}

fn handle_request(server: &Server, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => Ok(tools::tools_list()),
        "tools/call" => handle_tool_call(server, &request.params),

        // Resources
        "resources/list" => handle_resources_list(&server.bar),
        "resources/read" => handle_resources_read(&server.bar, &request.params),

        _ => Err(McpError::new(
            McpError::METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        )),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Drink discovery by ingredients and recipe lookup by name"
        },
        "capabilities": {
            "tools": { "listChanged": false },
            "resources": { "subscribe": false, "listChanged": false }
        },
        "instructions": "Use find_drink with the ingredients the user has, or find_recipe with a drink name. list_ingredients and popular_ingredients help the user pick ingredients."
    }))
}

fn handle_tool_call(server: &Server, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref()
        .ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    tools::call_tool(&server.bar, server.config.popular_count, name, &args)
}

fn handle_resources_list(bar: &Bar) -> Result<JsonValue, McpError> {
    let resources: Vec<JsonValue> = bar.all_drink_names().iter().map(|name| {
        json!({
            "uri": format!("{}{}", RESOURCE_PREFIX, name),
            "name": name,
            "description": format!("Receita de {}", name),
            "mimeType": "application/json"
        })
    }).collect();

    Ok(json!({ "resources": resources }))
}

fn handle_resources_read(bar: &Bar, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let uri = params.as_ref()
        .and_then(|p| p.get("uri"))
        .and_then(|u| u.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing uri parameter"))?;

    let name = uri.strip_prefix(RESOURCE_PREFIX).ok_or_else(|| {
        McpError::invalid_params(format!("Invalid URI: {}. Expected {}{{name}}", uri, RESOURCE_PREFIX))
    })?;

    let recipe = bar.recipe_by_name(name)
        .ok_or_else(|| McpError::from(CopoError::not_found(format!("drink '{}'", name))))?;

    let text = serde_json::to_string_pretty(&recipe)
        .map_err(|e| McpError::from(CopoError::internal(e.to_string())))?;

    Ok(json!({
        "contents": [{
            "uri": uri,
            "mimeType": "application/json",
            "text": text
        }]
    }))
}
