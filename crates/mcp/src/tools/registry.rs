// Tool trait, registry and schema helpers

use crate::context::RequestContext;
use crate::error::ToolResult;
use crate::protocol::ToolSchema;
use std::collections::HashMap;
use std::sync::Arc;

/// Rendered result of a successful tool call
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// JSON text, pretty-printed with two-space indentation
    Json(String),
    /// Plain text, passed through unchanged
    Text(String),
}

impl ToolOutput {
    /// Serialize in field declaration order
    pub fn json(value: impl serde::Serialize) -> ToolResult<Self> {
        serde_json::to_string_pretty(&value)
            .map(Self::Json)
            .map_err(|e| crate::error::ToolError::Encode(e.to_string()))
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Json(text) | Self::Text(text) => text,
        }
    }
}

/// Validation and execution logic bound to one tool name
///
/// Implementations must validate every argument before touching shared
/// state, so a rejected call never leaves a partial mutation behind.
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments
    fn execute(
        &self,
        ctx: &RequestContext,
        arguments: &serde_json::Value,
    ) -> ToolResult<ToolOutput>;
}

/// Tool registry for managing available tools
///
/// Lookup is by name; listing follows registration order.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.schema().name;
        match self.by_name.get(&name) {
            Some(&index) => self.tools[index] = tool,
            None => {
                self.by_name.insert(name, self.tools.len());
                self.tools.push(tool);
            }
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.by_name.get(name).map(|&i| Arc::clone(&self.tools[i]))
    }

    /// List all tool schemas
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|t| t.schema()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_number(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "number",
        "description": description
    })
}

pub fn json_schema_boolean(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "boolean",
        "description": description
    })
}
