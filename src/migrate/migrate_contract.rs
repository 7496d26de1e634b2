use cosmwasm_std::{Response, Storage};
use semver::Version;

use crate::{
    core::{
        error::ContractError,
        msg::MigrationOptions,
        state::{config, config_read},
    },
    util::{
        aliases::{AssetResult, DepsMutC, EntryPointResponse},
        event_attributes::{EventAdditionalMetadata, EventAttributes, EventType},
        traits::ResultExtensions,
    },
};

use super::version_info::{
    get_version_info, migrate_version_info, CONTRACT_NAME, CONTRACT_VERSION,
};

/// Executed on every code upgrade.  Refuses to run unless the stored version record names this
/// contract and the compiled version is strictly greater than the stored one, then commits the
/// new version and applies any requested migration options.
pub fn migrate_contract(deps: DepsMutC, options: Option<MigrationOptions>) -> EntryPointResponse {
    // Ensure the migration is not attempting to revert to an old version or overwrite an
    // unrelated contract
    check_valid_migration_versioning(deps.storage)?;
    // Store the new version info
    let new_version_info = migrate_version_info(deps.storage)?;
    let mut metadata = EventAdditionalMetadata::new();
    if let Some(options) = options {
        if let Some(new_admin_address) = options.new_admin_address {
            let new_admin = deps.api.addr_validate(&new_admin_address)?;
            let mut state = config_read(deps.storage).load()?;
            state.admin = new_admin;
            config(deps.storage).save(&state)?;
            metadata.add_metadata("new_admin_address", new_admin_address);
        }
    }
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::MigrateContract)
                .set_new_value(&new_version_info.version)
                .set_additional_metadata(&metadata),
        )
        .to_ok()
}

/// Verifies that the stored contract name matches this wasm and that the migration moves the
/// version strictly forward.
fn check_valid_migration_versioning(storage: &mut dyn Storage) -> AssetResult<()> {
    let stored_version_info = get_version_info(storage)?;
    if CONTRACT_NAME != stored_version_info.contract {
        return ContractError::InvalidContractName {
            current_contract: stored_version_info.contract,
            migration_contract: CONTRACT_NAME.to_string(),
        }
        .to_err();
    }
    let contract_version = CONTRACT_VERSION.parse::<Version>()?;
    // Any version at or above the compiled version indicates a replay or a downgrade, neither of
    // which may touch stored state
    if stored_version_info.parse_sem_ver()? >= contract_version {
        return ContractError::InvalidContractVersion {
            current_version: stored_version_info.version,
            migration_version: CONTRACT_VERSION.to_string(),
        }
        .to_err();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use provwasm_mocks::mock_dependencies;

    use crate::core::error::ContractError;
    use crate::core::msg::MigrationOptions;
    use crate::core::state::config_read;
    use crate::migrate::version_info::{
        get_version_info, set_version_info, VersionInfoV1, CONTRACT_NAME, CONTRACT_VERSION,
    };
    use crate::testutil::test_utilities::{test_instantiate_success, InstArgs};
    use crate::util::constants::{ASSET_EVENT_TYPE_KEY, NEW_VALUE_KEY};
    use crate::util::event_attributes::EventType;

    use super::migrate_contract;

    fn store_version(
        deps: &mut crate::testutil::test_utilities::MockOwnedDeps,
        contract: &str,
        version: &str,
    ) {
        set_version_info(
            deps.as_mut().storage,
            &VersionInfoV1 {
                contract: contract.to_string(),
                version: version.to_string(),
            },
        )
        .expect("storing version info should succeed");
    }

    #[test]
    fn test_successful_migration_from_a_lower_version() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        store_version(&mut deps, CONTRACT_NAME, "0.0.1");
        let response = migrate_contract(deps.as_mut(), None)
            .expect("a migration to a strictly greater version should succeed");
        assert!(
            response.messages.is_empty(),
            "a migration should not produce messages",
        );
        assert_eq!(
            2,
            response.attributes.len(),
            "the migration should produce the event type and new value attributes",
        );
        assert!(
            response
                .attributes
                .iter()
                .any(|attr| attr.key == ASSET_EVENT_TYPE_KEY
                    && attr.value == EventType::MigrateContract.event_name()),
            "the migrate event type should be emitted",
        );
        assert!(
            response
                .attributes
                .iter()
                .any(|attr| attr.key == NEW_VALUE_KEY && attr.value == CONTRACT_VERSION),
            "the new version should be emitted",
        );
        assert_eq!(
            CONTRACT_VERSION,
            get_version_info(deps.as_ref().storage).unwrap().version,
            "the stored version should be advanced to the compiled version",
        );
    }

    #[test]
    fn test_failed_migration_for_incorrect_name() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        store_version(&mut deps, "some-other-contract", "0.0.1");
        let error = migrate_contract(deps.as_mut(), None).unwrap_err();
        match error {
            ContractError::InvalidContractName {
                current_contract,
                migration_contract,
            } => {
                assert_eq!(
                    "some-other-contract", current_contract,
                    "the error should contain the stored contract name",
                );
                assert_eq!(
                    CONTRACT_NAME, migration_contract,
                    "the error should contain the compiled contract name",
                );
            }
            _ => panic!("unexpected error for a mismatched contract name: {:?}", error),
        };
    }

    #[test]
    fn test_failed_migration_for_equal_version() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        // Instantiation stores the compiled version, so an immediate migration is a replay
        let error = migrate_contract(deps.as_mut(), None).unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidContractVersion { .. }),
            "migrating to the same version should fail, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_failed_migration_for_higher_stored_version() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        store_version(&mut deps, CONTRACT_NAME, "99.9.9");
        let error = migrate_contract(deps.as_mut(), None).unwrap_err();
        match error {
            ContractError::InvalidContractVersion {
                current_version,
                migration_version,
            } => {
                assert_eq!(
                    "99.9.9", current_version,
                    "the error should contain the stored version",
                );
                assert_eq!(
                    CONTRACT_VERSION, migration_version,
                    "the error should contain the compiled version",
                );
            }
            _ => panic!("unexpected error for a downgrade attempt: {:?}", error),
        };
    }

    #[test]
    fn test_migration_applies_admin_handoff() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        store_version(&mut deps, CONTRACT_NAME, "0.0.1");
        migrate_contract(
            deps.as_mut(),
            Some(MigrationOptions {
                new_admin_address: Some("tp129z88fpzthllrdzktw98cck3ypd34wv77nqfyl".to_string()),
            }),
        )
        .expect("a migration with an admin handoff should succeed");
        assert_eq!(
            "tp129z88fpzthllrdzktw98cck3ypd34wv77nqfyl",
            config_read(deps.as_ref().storage)
                .load()
                .unwrap()
                .admin
                .as_str(),
            "the admin should be replaced by the migration option",
        );
    }
}
