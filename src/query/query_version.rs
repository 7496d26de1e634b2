use cosmwasm_std::{to_binary, Binary};

use crate::{
    migrate::version_info::get_version_info,
    util::{
        aliases::{AssetResult, DepsC},
        traits::ResultExtensions,
    },
};

/// Fetches the contract's stored name + version record.
pub fn query_version(deps: &DepsC) -> AssetResult<Binary> {
    let version_info = get_version_info(deps.storage)?;
    to_binary(&version_info)?.to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::from_binary;
    use provwasm_mocks::mock_dependencies;

    use crate::migrate::version_info::{VersionInfoV1, CONTRACT_NAME, CONTRACT_VERSION};
    use crate::testutil::test_utilities::{test_instantiate_success, InstArgs};

    use super::query_version;

    #[test]
    fn test_query_version_returns_the_seeded_record() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let binary = query_version(&deps.as_ref()).expect("the version query should succeed");
        let version_info = from_binary::<VersionInfoV1>(&binary)
            .expect("the binary should deserialize to version info");
        assert_eq!(
            CONTRACT_NAME, version_info.contract,
            "the compiled contract name should be returned",
        );
        assert_eq!(
            CONTRACT_VERSION, version_info.version,
            "the compiled contract version should be returned",
        );
    }
}
