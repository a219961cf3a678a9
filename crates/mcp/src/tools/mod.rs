pub mod args;
pub mod time;
pub mod todo;
mod registry;

pub use registry::{
    json_schema_boolean, json_schema_number, json_schema_object, json_schema_string, Tool,
    ToolOutput, ToolRegistry,
};
pub use time::CurrentTimeTool;
pub use todo::{CreateTodoTool, DeleteTodoTool, ListTodosTool, UpdateTodoTool};

use std::sync::Arc;
use todoapp_core::{Clock, InvalidOffset, TimeZoneConfig, TodoStore};

/// Registry holding the four todo tools followed by the time tool
pub fn builtin_registry(
    store: Arc<TodoStore>,
    clock: Arc<dyn Clock>,
    zone: &TimeZoneConfig,
) -> Result<ToolRegistry, InvalidOffset> {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(CreateTodoTool::new(store.clone())));
    registry.register(Arc::new(ListTodosTool::new(store.clone())));
    registry.register(Arc::new(UpdateTodoTool::new(store.clone())));
    registry.register(Arc::new(DeleteTodoTool::new(store)));
    registry.register(Arc::new(CurrentTimeTool::new(clock, zone)?));

    Ok(registry)
}
