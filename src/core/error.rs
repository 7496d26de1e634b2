use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

use super::types::asset_onboarding_status::AssetOnboardingStatus;

/// The singular error type emitted by all contract pathways.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Bech32Error(#[from] bech32::Error),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Semver parsing error: {0}")]
    SemVer(#[from] semver::Error),

    #[error("{0}")]
    UuidError(#[from] uuid::Error),

    #[error("duplicate/existing verifier address provided as input")]
    DuplicateVerifierProvided,

    #[error("Invalid address provided [{address}]: {explanation}")]
    InvalidAddress {
        address: String,
        explanation: String,
    },

    #[error("Current contract name [{current_contract}] does not match provided migration name [{migration_contract}]")]
    InvalidContractName {
        current_contract: String,
        migration_contract: String,
    },

    #[error("Current contract version [{current_version}] is higher than or equal to provided migration version [{migration_version}]")]
    InvalidContractVersion {
        current_version: String,
        migration_version: String,
    },

    #[error("{0}")]
    InvalidFunds(String),

    #[error("Invalid onboarding fee for verifier [{verifier_address}]: expected [{expected_fee}], provided [{provided_funds}]")]
    FeeMismatch {
        verifier_address: String,
        expected_fee: String,
        provided_funds: String,
    },

    #[error("Message of type [{message_type}] was invalid. Invalid fields: {invalid_fields:?}")]
    InvalidMessageFields {
        message_type: String,
        invalid_fields: Vec<String>,
    },

    #[error("Invalid message type provided. Expected message type {expected_message_type}")]
    InvalidMessageType { expected_message_type: String },

    #[error("Resource not found: {explanation}")]
    NotFound { explanation: String },

    #[error("Existing record found: {explanation}")]
    RecordAlreadyExists { explanation: String },

    #[error("Record not found: {explanation}")]
    RecordNotFound { explanation: String },

    #[error("Unsupported verifier [{verifier_address}] for asset type [{asset_type}]")]
    UnsupportedVerifier {
        verifier_address: String,
        asset_type: String,
    },

    #[error("Asset {scope_address} has already been fully onboarded as asset type [{asset_type}]")]
    AssetAlreadyOnboarded {
        scope_address: String,
        asset_type: String,
    },

    #[error(
        "Asset {scope_address} is currently awaiting verification from address {verifier_address}"
    )]
    AssetPendingVerification {
        scope_address: String,
        verifier_address: String,
    },

    #[error("Asset [{scope_address}] was already verified and has status [{status}]")]
    AssetAlreadyVerified {
        scope_address: String,
        status: AssetOnboardingStatus,
    },

    #[error("Provided scope [address: {scope_address}, spec_address: {scope_spec_address}] does not conform to the spec configured for the provided asset_type [{asset_type}]. Expected a scope of spec [{expected_scope_spec_address}]")]
    AssetSpecMismatch {
        asset_type: String,
        scope_address: String,
        scope_spec_address: String,
        expected_scope_spec_address: String,
    },

    #[error("Unauthorized verifier [{verifier_address}] for scope [{scope_address}], expected verifier [{expected_verifier_address}]")]
    UnauthorizedAssetVerifier {
        scope_address: String,
        verifier_address: String,
        expected_verifier_address: String,
    },

    #[error("Verifier [{verifier_address}] is still referenced by verified scope attributes of asset type [{asset_type}] and cannot be removed without specifying force_verifier_removal")]
    VerifierStillReferenced {
        asset_type: String,
        verifier_address: String,
    },

    #[error("Asset definition [{asset_type}] has scope attributes awaiting verification and cannot be deleted")]
    PendingVerificationsExist { asset_type: String },

    #[error("Unauthorized: {explanation}")]
    Unauthorized { explanation: String },

    #[error("Unexpected state: {explanation}")]
    UnexpectedState { explanation: String },

    #[error("{msg}")]
    GenericError { msg: String },
}
impl ContractError {
    /// Constructs the freeform GenericError variant from any stringable message.
    pub fn generic<S: Into<String>>(msg: S) -> ContractError {
        ContractError::GenericError { msg: msg.into() }
    }

    /// Shorthand for wrapping a generic cosmwasm StdError in the contract's error type.
    pub fn std_err<S: Into<String>>(msg: S) -> ContractError {
        ContractError::Std(StdError::generic_err(msg))
    }
}
