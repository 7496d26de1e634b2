//! Contains message validation run before any route handler executes.

/// Shallow field checks for execute messages.
pub mod validate_execute_msg;
/// Deep validation for instantiation payloads and definition/verifier inputs.
pub mod validate_init_msg;
