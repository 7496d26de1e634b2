use crate::core::error::ContractError;
use cosmwasm_std::{Deps, DepsMut, Response};
use provwasm_std::{ProvenanceMsg, ProvenanceQuery};

/// Shortens the lengthy response type required by all entrypoint functions.
pub type EntryPointResponse = Result<Response<ProvenanceMsg>, ContractError>;

/// All contract pathways with exceptional code should return a result that has a contract error
/// as its resulting error type.
pub type AssetResult<T> = Result<T, ContractError>;

/// A Deps alias to stop having to re-type the custom query param.
pub type DepsC<'a> = Deps<'a, ProvenanceQuery>;

/// A DepsMut alias to stop having to re-type the custom query param.
pub type DepsMutC<'a> = DepsMut<'a, ProvenanceQuery>;
