use cosmwasm_std::{to_binary, Binary};

use crate::{
    core::{msg::QueryAssetDefinitionsResponse, state::list_asset_definitions},
    util::{
        aliases::{AssetResult, DepsC},
        traits::ResultExtensions,
    },
};

/// Fetches every asset definition held in the registry.
pub fn query_asset_definitions(deps: &DepsC) -> AssetResult<Binary> {
    let response = QueryAssetDefinitionsResponse {
        asset_definitions: list_asset_definitions(deps.storage)?,
    };
    to_binary(&response)?.to_ok()
}
