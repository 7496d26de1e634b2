//! Contains the contract instantiation functionality.

pub mod init_contract;
