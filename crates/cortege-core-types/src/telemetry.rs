//! Canonical telemetry constants for structured logging
//!
//! These constants keep field keys and event names consistent across all
//! logging and error reporting at the wire boundary.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Domain context
pub const FIELD_ENTITY: &str = "entity";
pub const FIELD_FIELD: &str = "field";
pub const FIELD_COUNT: &str = "count";

// Error fields
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
