// Routes tool calls to registered tools and builds MCP results

use crate::context::RequestContext;
use crate::error::{ToolError, ToolResult};
use crate::protocol::{CallToolParams, CallToolResult, ListToolsResult};
use crate::tools::ToolRegistry;

/// Tool-level entry points of the server: discovery and invocation
pub struct Dispatcher {
    registry: ToolRegistry,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Discovery: every registered tool with its input schema
    pub fn list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: self.registry.list_schemas(),
        }
    }

    /// Invocation: run the named tool and wrap its output as text content
    pub fn call_tool(
        &self,
        ctx: &RequestContext,
        params: &CallToolParams,
    ) -> ToolResult<CallToolResult> {
        let tool = self
            .registry
            .get(&params.name)
            .ok_or_else(|| ToolError::UnknownTool(params.name.clone()))?;

        tracing::debug!("Calling tool {}", params.name);

        match tool.execute(ctx, &params.arguments) {
            Ok(output) => Ok(CallToolResult::text(output.into_text())),
            Err(e) => {
                tracing::warn!("Tool {} failed: {}", params.name, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ToolContent;
    use crate::tools::builtin_registry;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::sync::Arc;
    use todoapp_core::{FixedClock, TimeZoneConfig, TodoId, TodoStore};

    fn setup() -> (Dispatcher, Arc<TodoStore>) {
        let store = Arc::new(TodoStore::new());
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 1, 5, 0, 3, 7).unwrap()));
        let registry = builtin_registry(store.clone(), clock, &TimeZoneConfig::default()).unwrap();
        (Dispatcher::new(registry), store)
    }

    fn call(
        dispatcher: &Dispatcher,
        name: &str,
        arguments: serde_json::Value,
    ) -> ToolResult<String> {
        let params = CallToolParams {
            name: name.to_string(),
            arguments,
        };
        let result = dispatcher.call_tool(&RequestContext::anonymous(), &params)?;
        assert_eq!(result.is_error, None);
        match result.content.as_slice() {
            [ToolContent::Text { text }] => Ok(text.clone()),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_list_tools_in_order() {
        let (dispatcher, _) = setup();

        let names: Vec<_> = dispatcher
            .list_tools()
            .tools
            .into_iter()
            .map(|t| t.name)
            .collect();

        assert_eq!(
            names,
            vec![
                "create_todo",
                "list_todos",
                "update_todo",
                "delete_todo",
                "get_current_time"
            ]
        );
    }

    #[test]
    fn test_results_are_indented_json() {
        let (dispatcher, _) = setup();

        let text = call(&dispatcher, "create_todo", json!({"text": "buy milk"})).unwrap();

        assert_eq!(
            text,
            "{\n  \"id\": 1,\n  \"text\": \"buy milk\",\n  \"completed\": false\n}"
        );
    }

    #[test]
    fn test_example_session() {
        let (dispatcher, store) = setup();

        call(&dispatcher, "create_todo", json!({"text": "buy milk"})).unwrap();
        call(&dispatcher, "create_todo", json!({"text": "walk dog"})).unwrap();

        let listed: serde_json::Value =
            serde_json::from_str(&call(&dispatcher, "list_todos", json!({})).unwrap()).unwrap();
        assert_eq!(listed[0]["id"], 1);
        assert_eq!(listed[1]["id"], 2);

        let updated: serde_json::Value = serde_json::from_str(
            &call(&dispatcher, "update_todo", json!({"id": 1, "completed": true})).unwrap(),
        )
        .unwrap();
        assert_eq!(updated, json!({"id": 1, "text": "buy milk", "completed": true}));

        let deleted = call(&dispatcher, "delete_todo", json!({"id": 1})).unwrap();
        assert_eq!(deleted, "{\n  \"success\": true\n}");
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].id, TodoId(2));

        let err =
            call(&dispatcher, "update_todo", json!({"id": 99, "completed": true})).unwrap_err();
        assert_eq!(err.to_string(), "Todo with id 99 not found");
    }

    #[test]
    fn test_unknown_tool_leaves_store_alone() {
        let (dispatcher, store) = setup();
        store.create("buy milk");

        let err = call(&dispatcher, "foo", json!({})).unwrap_err();

        assert_eq!(err, ToolError::UnknownTool("foo".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id(), TodoId(2));
    }

    #[test]
    fn test_non_object_arguments_rejected_for_every_tool() {
        let (dispatcher, store) = setup();

        let names = [
            "create_todo",
            "list_todos",
            "update_todo",
            "delete_todo",
            "get_current_time",
        ];
        for name in names {
            let err = call(&dispatcher, name, json!("not an object")).unwrap_err();
            assert_eq!(
                err,
                ToolError::ArgumentsNotObject {
                    tool: name.to_string()
                }
            );
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_time_is_plain_text() {
        let (dispatcher, _) = setup();

        let text = call(&dispatcher, "get_current_time", json!({})).unwrap();

        assert_eq!(text, "2024/1/5 9:03:07");
    }
}
