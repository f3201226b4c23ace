//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log boundary
//! operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use cortege_core::log_op_start;
/// log_op_start!("read_entry");
/// log_op_start!("read_entry", entity = "customer");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = cortege_core_types::telemetry::EVENT_START,
        )
    };
    ($op:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = cortege_core_types::telemetry::EVENT_START,
            $($field)*
        )
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use cortege_core::log_op_end;
/// log_op_end!("read_entry", entity = "customer");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = cortege_core_types::telemetry::EVENT_END,
        )
    };
    ($op:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = cortege_core_types::telemetry::EVENT_END,
            $($field)*
        )
    };
}

/// Log an operation error with its stable code
///
/// # Example
///
/// ```
/// # use cortege_core::log_op_error;
/// # use cortege_core::errors::{HydrationError, SchemaError};
/// let err: HydrationError = SchemaError::NotAnObject { entity: "visit" }.into();
/// log_op_error!("read_entry", err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = cortege_core_types::telemetry::EVENT_END_ERROR,
            err_code = $err.code(),
        )
    };
    ($op:expr, $err:expr, $($field:tt)*) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = cortege_core_types::telemetry::EVENT_END_ERROR,
            err_code = $err.code(),
            $($field)*
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::errors::{HydrationError, SchemaError};

    #[test]
    fn test_macros_expand_without_subscriber() {
        crate::log_op_start!("op_under_test");
        crate::log_op_start!("op_under_test", entity = "customer");
        crate::log_op_end!("op_under_test");
        crate::log_op_end!("op_under_test", count = 3);

        let err: HydrationError = SchemaError::NotAnObject { entity: "visit" }.into();
        crate::log_op_error!("op_under_test", err);
        crate::log_op_error!("op_under_test", err, entity = "visit");
    }
}
