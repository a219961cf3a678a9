// MCP server: newline-delimited JSON-RPC 2.0 over stdio
//
// Requests are handled one at a time, each to completion before the next
// line is read.

use crate::context::RequestContext;
use crate::dispatcher::Dispatcher;
use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ServerCapabilities, ServerInfo, ToolsCapability, JSONRPC_VERSION, PROTOCOL_VERSION,
};
use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec, LinesCodecError};

const DEFAULT_MAX_LINE_LENGTH: usize = 1024 * 1024;

pub struct McpServer {
    dispatcher: Dispatcher,
    info: ServerInfo,
    max_line_length: usize,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher, info: ServerInfo) -> Self {
        Self {
            dispatcher,
            info,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }

    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Serve on the process's stdin/stdout until stdin closes
    pub async fn start(&self) -> Result<()> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve one session over arbitrary streams
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut requests =
            FramedRead::new(reader, LinesCodec::new_with_max_length(self.max_line_length));
        let mut responses = FramedWrite::new(writer, LinesCodec::new());

        tracing::info!("MCP server {} {} ready", self.info.name, self.info.version);

        // FramedRead yields one `None` after a decode error, then resumes reading.
        let mut recovering = false;

        loop {
            let frame = match requests.next().await {
                Some(frame) => frame,
                None if recovering => {
                    recovering = false;
                    continue;
                }
                None => break,
            };
            recovering = false;

            let response = match frame {
                Ok(line) => self.handle_line(&line),
                Err(LinesCodecError::MaxLineLengthExceeded) => {
                    tracing::warn!("Dropped request longer than {} bytes", self.max_line_length);
                    recovering = true;
                    Some(JsonRpcResponse::error(
                        Value::Null,
                        JsonRpcError::invalid_request(format!(
                            "Request exceeds {} bytes",
                            self.max_line_length
                        )),
                    ))
                }
                Err(LinesCodecError::Io(e)) => {
                    return Err(e).context("Failed to read request");
                }
            };

            if let Some(response) = response {
                let encoded =
                    serde_json::to_string(&response).context("Failed to encode response")?;
                if let Err(e) = responses.send(encoded).await {
                    tracing::error!("Failed to write response: {}", e);
                    return Err(e).context("Failed to write response");
                }
            }
        }

        tracing::info!("Input closed, MCP server stopping");
        Ok(())
    }

    /// Handle one raw line. Returns `None` for blank lines and notifications.
    pub fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Unparseable request: {}", e);
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error(e)));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_request(format!("Invalid Request: {}", e)),
                ));
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request(format!(
                    "Unsupported jsonrpc version: {}",
                    request.jsonrpc
                )),
            ));
        }

        self.handle_request(request)
    }

    pub fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            tracing::debug!("Received notification {}", request.method);
            return None;
        };

        tracing::debug!("Handling {} (id {})", request.method, id);

        let outcome = match request.method.as_str() {
            "initialize" => encode(self.initialize_result()),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => encode(self.dispatcher.list_tools()),
            "tools/call" => self.call_tool(request.params),
            other => Err(JsonRpcError::method_not_found(format!(
                "Method not found: {}",
                other
            ))),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: self.info.clone(),
        }
    }

    fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|e| {
                JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e))
            })?;

        let ctx = RequestContext::anonymous();
        let result = self.dispatcher.call_tool(&ctx, &params)?;
        encode(result)
    }
}

fn encode(value: impl Serialize) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
