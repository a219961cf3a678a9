// Todo tools backed by the in-memory store

use crate::context::RequestContext;
use crate::error::ToolResult;
use crate::protocol::ToolSchema;
use crate::tools::args::{Arguments, CreateTodoArgs, DeleteTodoArgs, UpdateTodoArgs};
use crate::tools::{
    json_schema_boolean, json_schema_number, json_schema_object, json_schema_string, Tool,
    ToolOutput,
};
use std::sync::Arc;
use todoapp_core::{Ack, TodoStore};

pub const CREATE_TODO: &str = "create_todo";
pub const LIST_TODOS: &str = "list_todos";
pub const UPDATE_TODO: &str = "update_todo";
pub const DELETE_TODO: &str = "delete_todo";

/// Tool to create a todo item
pub struct CreateTodoTool {
    store: Arc<TodoStore>,
}

impl CreateTodoTool {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }
}

impl Tool for CreateTodoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: CREATE_TODO.to_string(),
            description: "Create a new todo item".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "text": json_schema_string("Todo item text")
                }),
                vec!["text"],
            ),
        }
    }

    fn execute(
        &self,
        _ctx: &RequestContext,
        arguments: &serde_json::Value,
    ) -> ToolResult<ToolOutput> {
        let args = CreateTodoArgs::parse(CREATE_TODO, arguments)?;
        let todo = self.store.create(args.text);
        ToolOutput::json(todo)
    }
}

/// Tool to list every todo item in creation order
pub struct ListTodosTool {
    store: Arc<TodoStore>,
}

impl ListTodosTool {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }
}

impl Tool for ListTodosTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: LIST_TODOS.to_string(),
            description: "List all todo items".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    fn execute(
        &self,
        _ctx: &RequestContext,
        arguments: &serde_json::Value,
    ) -> ToolResult<ToolOutput> {
        Arguments::new(LIST_TODOS, arguments)?;
        ToolOutput::json(self.store.list())
    }
}

/// Tool to set a todo item's completion flag
pub struct UpdateTodoTool {
    store: Arc<TodoStore>,
}

impl UpdateTodoTool {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }
}

impl Tool for UpdateTodoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: UPDATE_TODO.to_string(),
            description: "Update a todo item (e.g., mark as complete)".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "id": json_schema_number("Todo item ID"),
                    "completed": json_schema_boolean("Completion status")
                }),
                vec!["id", "completed"],
            ),
        }
    }

    fn execute(
        &self,
        _ctx: &RequestContext,
        arguments: &serde_json::Value,
    ) -> ToolResult<ToolOutput> {
        let args = UpdateTodoArgs::parse(UPDATE_TODO, arguments)?;
        let todo = self.store.update(args.id, args.completed)?;
        ToolOutput::json(todo)
    }
}

/// Tool to delete a todo item
pub struct DeleteTodoTool {
    store: Arc<TodoStore>,
}

impl DeleteTodoTool {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }
}

impl Tool for DeleteTodoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: DELETE_TODO.to_string(),
            description: "Delete a todo item".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "id": json_schema_number("Todo item ID")
                }),
                vec!["id"],
            ),
        }
    }

    fn execute(
        &self,
        _ctx: &RequestContext,
        arguments: &serde_json::Value,
    ) -> ToolResult<ToolOutput> {
        let args = DeleteTodoArgs::parse(DELETE_TODO, arguments)?;
        self.store.delete(args.id)?;
        ToolOutput::json(Ack::ok())
    }
}
