//! Contains the migration gatekeeping functionality.

/// The migration entrypoint implementation.
pub mod migrate_contract;
/// Storage and comparison of the contract's name + version record.
pub mod version_info;
