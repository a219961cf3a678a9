// Failures raised while dispatching a tool call

use crate::protocol::JsonRpcError;
use todoapp_core::{StoreError, TodoId};

pub type ToolResult<T> = Result<T, ToolError>;

/// Every way a tool invocation can fail.
///
/// All variants are recoverable: the dispatcher turns each one into a
/// JSON-RPC error response and the session keeps running.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    /// A required argument is missing or has the wrong JSON type
    #[error("Invalid arguments for {tool}: `{field}` must be a {expected}")]
    InvalidArguments {
        tool: String,
        field: String,
        expected: String,
    },

    /// The arguments value itself is not an object
    #[error("Invalid arguments for {tool}: expected an object")]
    ArgumentsNotObject { tool: String },

    /// Update or delete referenced an id the store does not hold
    #[error("Todo with id {0} not found")]
    NotFound(TodoId),

    /// No tool registered under this name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Result could not be rendered as JSON text
    #[error("Failed to encode result: {0}")]
    Encode(String),
}

impl ToolError {
    pub fn invalid_argument(
        tool: impl Into<String>,
        field: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            field: field.into(),
            expected: expected.into(),
        }
    }
}

impl From<StoreError> for ToolError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
        }
    }
}

impl From<ToolError> for JsonRpcError {
    fn from(err: ToolError) -> Self {
        let message = err.to_string();
        match err {
            ToolError::InvalidArguments { .. } | ToolError::ArgumentsNotObject { .. } => {
                JsonRpcError::invalid_params(message)
            }
            ToolError::UnknownTool(_) => JsonRpcError::method_not_found(message),
            ToolError::NotFound(_) | ToolError::Encode(_) => JsonRpcError::internal_error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND};

    #[test]
    fn test_invalid_arguments_maps_to_invalid_params() {
        let err: JsonRpcError = ToolError::invalid_argument("delete_todo", "id", "number").into();

        assert_eq!(err.code, INVALID_PARAMS);
        assert_eq!(
            err.message,
            "Invalid arguments for delete_todo: `id` must be a number"
        );
    }

    #[test]
    fn test_unknown_tool_maps_to_method_not_found() {
        let err: JsonRpcError = ToolError::UnknownTool("foo".to_string()).into();

        assert_eq!(err.code, METHOD_NOT_FOUND);
        assert_eq!(err.message, "Unknown tool: foo");
    }

    #[test]
    fn test_not_found_echoes_id() {
        let err: JsonRpcError = ToolError::from(StoreError::NotFound(TodoId(99))).into();

        assert_eq!(err.code, INTERNAL_ERROR);
        assert_eq!(err.message, "Todo with id 99 not found");
    }
}
