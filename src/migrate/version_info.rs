use cosmwasm_std::Storage;
use cw_storage_plus::Item;
use schemars::JsonSchema;
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::{core::error::ContractError, util::aliases::AssetResult, util::traits::ResultExtensions};

/// The compiled name of this contract, recorded in storage and compared against during every
/// migration to prevent an unrelated wasm from overwriting this one.
pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
/// The compiled version of this contract.  Migrations only proceed toward strictly greater
/// versions.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const VERSION_INFO: Item<VersionInfoV1> = Item::new("version_info");

/// The name + version pair that gatekeeps schema upgrades.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct VersionInfoV1 {
    pub contract: String,
    pub version: String,
}
impl VersionInfoV1 {
    pub fn parse_sem_ver(&self) -> AssetResult<Version> {
        self.version.parse::<Version>().map_err(ContractError::SemVer)
    }
}

pub fn set_version_info(storage: &mut dyn Storage, info: &VersionInfoV1) -> AssetResult<()> {
    VERSION_INFO.save(storage, info).map_err(ContractError::Std)
}

pub fn get_version_info(storage: &dyn Storage) -> AssetResult<VersionInfoV1> {
    VERSION_INFO.load(storage).map_err(ContractError::Std)
}

/// Writes the compiled contract name and version into storage, returning the stored record.
/// Called at instantiation to seed the baseline and at migration to commit the upgrade.
pub fn migrate_version_info(storage: &mut dyn Storage) -> AssetResult<VersionInfoV1> {
    let info = VersionInfoV1 {
        contract: CONTRACT_NAME.to_string(),
        version: CONTRACT_VERSION.to_string(),
    };
    set_version_info(storage, &info)?;
    info.to_ok()
}

#[cfg(test)]
mod tests {
    use provwasm_mocks::mock_dependencies;
    use semver::Version;

    use super::{
        get_version_info, migrate_version_info, set_version_info, VersionInfoV1, CONTRACT_NAME,
        CONTRACT_VERSION,
    };

    #[test]
    fn test_set_and_get_round_trip() {
        let mut deps = mock_dependencies(&[]);
        set_version_info(
            deps.as_mut().storage,
            &VersionInfoV1 {
                contract: "some-contract".to_string(),
                version: "1.2.3".to_string(),
            },
        )
        .expect("setting version info should succeed");
        let info = get_version_info(deps.as_ref().storage)
            .expect("getting version info should succeed");
        assert_eq!(
            "some-contract", info.contract,
            "the stored contract name should be returned",
        );
        assert_eq!(
            "1.2.3", info.version,
            "the stored version should be returned",
        );
    }

    #[test]
    fn test_migrate_writes_compiled_values() {
        let mut deps = mock_dependencies(&[]);
        let info = migrate_version_info(deps.as_mut().storage)
            .expect("migrating version info should succeed");
        assert_eq!(
            CONTRACT_NAME, info.contract,
            "the compiled contract name should be stored",
        );
        assert_eq!(
            CONTRACT_VERSION, info.version,
            "the compiled contract version should be stored",
        );
    }

    #[test]
    fn test_parse_sem_ver() {
        let info = VersionInfoV1 {
            contract: "some-contract".to_string(),
            version: "4.20.3".to_string(),
        };
        assert_eq!(
            Version::new(4, 20, 3),
            info.parse_sem_ver().expect("the version should parse"),
            "the parsed semver should reflect the stored string",
        );
        assert!(
            VersionInfoV1 {
                contract: "some-contract".to_string(),
                version: "not a version".to_string(),
            }
            .parse_sem_ver()
            .is_err(),
            "an invalid version string should fail to parse",
        );
    }
}
