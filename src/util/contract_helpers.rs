use crate::core::error::ContractError;
use crate::core::state::config_read;
use crate::util::aliases::{AssetResult, DepsC};
use crate::util::traits::ResultExtensions;

use cosmwasm_std::MessageInfo;

/// Ensures that only the admin of the contract can call into a route.
pub fn check_admin_only(deps: &DepsC, info: &MessageInfo) -> AssetResult<()> {
    let state = config_read(deps.storage).load()?;
    if info.sender != state.admin {
        ContractError::Unauthorized {
            explanation: "admin required".to_string(),
        }
        .to_err()
    } else {
        Ok(())
    }
}

/// Ensures that the info provided to the route does not include any funds.  Routes that move
/// funds out of the contract should never simultaneously accept them.
pub fn check_funds_are_empty(info: &MessageInfo) -> AssetResult<()> {
    if !info.funds.is_empty() {
        ContractError::InvalidFunds("route requires no funds be present".to_string()).to_err()
    } else {
        Ok(())
    }
}
