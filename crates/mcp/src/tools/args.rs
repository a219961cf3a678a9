// Strict argument extraction for tool calls

use crate::error::{ToolError, ToolResult};
use serde_json::{Map, Value};
use todoapp_core::TodoId;

/// Read-only view over a tool's argument bag
///
/// Type checks are strict: `"1"` is not a number and `1` is not a boolean.
/// A `null` or absent bag behaves like `{}`.
pub struct Arguments<'a> {
    tool: &'static str,
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Arguments<'a> {
    pub fn new(tool: &'static str, value: &'a Value) -> ToolResult<Self> {
        let fields = match value {
            Value::Null => None,
            Value::Object(map) => Some(map),
            _ => {
                return Err(ToolError::ArgumentsNotObject {
                    tool: tool.to_string(),
                })
            }
        };
        Ok(Self { tool, fields })
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields.and_then(|m| m.get(field))
    }

    fn invalid(&self, field: &str, expected: &str) -> ToolError {
        ToolError::invalid_argument(self.tool, field, expected)
    }

    pub fn required_str(&self, field: &str) -> ToolResult<&'a str> {
        self.get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| self.invalid(field, "string"))
    }

    pub fn required_non_empty_str(&self, field: &str) -> ToolResult<&'a str> {
        match self.required_str(field) {
            Ok(s) if !s.is_empty() => Ok(s),
            _ => Err(self.invalid(field, "non-empty string")),
        }
    }

    pub fn required_bool(&self, field: &str) -> ToolResult<bool> {
        self.get(field)
            .and_then(Value::as_bool)
            .ok_or_else(|| self.invalid(field, "boolean"))
    }

    /// A JSON number holding a non-negative integer, e.g. `3` or `3.0`
    pub fn required_id(&self, field: &str) -> ToolResult<TodoId> {
        let number = match self.get(field) {
            Some(Value::Number(n)) => n,
            _ => return Err(self.invalid(field, "number")),
        };

        if let Some(id) = number.as_u64() {
            return Ok(TodoId(id));
        }
        match number.as_f64() {
            Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(TodoId(f as u64)),
            _ => Err(self.invalid(field, "non-negative integer")),
        }
    }
}

/// Arguments for `create_todo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoArgs {
    pub text: String,
}

impl CreateTodoArgs {
    pub fn parse(tool: &'static str, value: &Value) -> ToolResult<Self> {
        let args = Arguments::new(tool, value)?;
        Ok(Self {
            text: args.required_non_empty_str("text")?.to_string(),
        })
    }
}

/// Arguments for `update_todo`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateTodoArgs {
    pub id: TodoId,
    pub completed: bool,
}

impl UpdateTodoArgs {
    pub fn parse(tool: &'static str, value: &Value) -> ToolResult<Self> {
        let args = Arguments::new(tool, value)?;
        Ok(Self {
            id: args.required_id("id")?,
            completed: args.required_bool("completed")?,
        })
    }
}

/// Arguments for `delete_todo`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTodoArgs {
    pub id: TodoId,
}

impl DeleteTodoArgs {
    pub fn parse(tool: &'static str, value: &Value) -> ToolResult<Self> {
        let args = Arguments::new(tool, value)?;
        Ok(Self {
            id: args.required_id("id")?,
        })
    }
}
