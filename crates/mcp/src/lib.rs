// MCP (Model Context Protocol) server exposing todo and time tools over stdio

pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::McpConfig;
pub use context::RequestContext;
pub use dispatcher::Dispatcher;
pub use error::{ToolError, ToolResult};
pub use server::McpServer;
