// Current time tool

use crate::context::RequestContext;
use crate::error::ToolResult;
use crate::protocol::ToolSchema;
use crate::tools::args::Arguments;
use crate::tools::{json_schema_object, Tool, ToolOutput};
use chrono::FixedOffset;
use std::sync::Arc;
use todoapp_core::{format_local_time, Clock, InvalidOffset, TimeZoneConfig};

pub const GET_CURRENT_TIME: &str = "get_current_time";

/// Tool to read the clock in a fixed time zone
pub struct CurrentTimeTool {
    clock: Arc<dyn Clock>,
    zone_name: String,
    offset: FixedOffset,
}

impl CurrentTimeTool {
    pub fn new(clock: Arc<dyn Clock>, zone: &TimeZoneConfig) -> Result<Self, InvalidOffset> {
        Ok(Self {
            clock,
            zone_name: zone.name.clone(),
            offset: zone.offset()?,
        })
    }
}

impl Tool for CurrentTimeTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: GET_CURRENT_TIME.to_string(),
            description: format!("Get the current time in {}", self.zone_name),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    fn execute(
        &self,
        _ctx: &RequestContext,
        arguments: &serde_json::Value,
    ) -> ToolResult<ToolOutput> {
        Arguments::new(GET_CURRENT_TIME, arguments)?;
        Ok(ToolOutput::Text(format_local_time(self.clock.now(), self.offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use todoapp_core::FixedClock;

    #[test]
    fn test_reports_tokyo_time() {
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 1, 5, 0, 3, 7).unwrap()));
        let tool = CurrentTimeTool::new(clock, &TimeZoneConfig::default()).unwrap();

        let output = tool
            .execute(&RequestContext::anonymous(), &serde_json::json!({}))
            .unwrap();

        assert_eq!(output, ToolOutput::Text("2024/1/5 9:03:07".to_string()));
    }

    #[test]
    fn test_rejects_non_object_arguments() {
        let clock = Arc::new(FixedClock(Utc::now()));
        let tool = CurrentTimeTool::new(clock, &TimeZoneConfig::default()).unwrap();

        let err = tool
            .execute(&RequestContext::anonymous(), &serde_json::json!("now"))
            .unwrap_err();

        assert_eq!(
            err,
            crate::error::ToolError::ArgumentsNotObject {
                tool: "get_current_time".to_string()
            }
        );
    }

    #[test]
    fn test_schema_names_zone() {
        let clock = Arc::new(FixedClock(Utc::now()));
        let tool = CurrentTimeTool::new(clock, &TimeZoneConfig::default()).unwrap();

        let schema = tool.schema();
        assert_eq!(schema.name, "get_current_time");
        assert_eq!(schema.description, "Get the current time in Asia/Tokyo");
    }

    #[test]
    fn test_rejects_bad_offset() {
        let zone = TimeZoneConfig {
            name: "nowhere".to_string(),
            utc_offset_minutes: 20 * 60,
        };

        assert!(CurrentTimeTool::new(Arc::new(FixedClock(Utc::now())), &zone).is_err());
    }
}
