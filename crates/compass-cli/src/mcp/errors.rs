//! Error handling utilities for MCP server

use compass_core::PlannerError;
use rmcp::ErrorData;

/// Helper to convert planner errors to MCP errors
///
/// Input validation failures become `invalid_params` so the caller can fix
/// its arguments; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    match error {
        PlannerError::InvalidInput { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}
