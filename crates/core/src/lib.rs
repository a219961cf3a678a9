// Core types for the TodoApp MCP server

pub mod clock;
pub mod store;
pub mod types;

pub use clock::{
    format_local_time, Clock, FixedClock, InvalidOffset, SystemClock, TimeZoneConfig,
};
pub use store::{StoreError, StoreResult, TodoStore};
pub use types::*;
