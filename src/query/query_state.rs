use cosmwasm_std::{to_binary, Binary};

use crate::{
    core::state::config_read,
    util::{
        aliases::{AssetResult, DepsC},
        traits::ResultExtensions,
    },
};

/// Fetches the contract's base configuration record.
pub fn query_state(deps: &DepsC) -> AssetResult<Binary> {
    let state = config_read(deps.storage).load()?;
    to_binary(&state)?.to_ok()
}
