use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use asset_onboarding_smart_contract::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use asset_onboarding_smart_contract::core::types::asset_definition::{
    AssetDefinition, AssetDefinitionInput,
};
use asset_onboarding_smart_contract::core::types::asset_identifier::AssetIdentifier;
use asset_onboarding_smart_contract::core::types::asset_qualifier::AssetQualifier;
use asset_onboarding_smart_contract::core::types::asset_scope_attribute::AssetScopeAttribute;
use asset_onboarding_smart_contract::core::types::fee_destination::FeeDestination;
use asset_onboarding_smart_contract::core::types::scope_spec_identifier::ScopeSpecIdentifier;
use asset_onboarding_smart_contract::core::types::verifier_detail::VerifierDetail;
use asset_onboarding_smart_contract::migrate::version_info::VersionInfoV1;

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(InitMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(AssetScopeAttribute), &out_dir);
    export_schema(&schema_for!(AssetDefinition), &out_dir);
    export_schema(&schema_for!(AssetDefinitionInput), &out_dir);
    export_schema(&schema_for!(VerifierDetail), &out_dir);
    export_schema(&schema_for!(FeeDestination), &out_dir);
    export_schema(&schema_for!(AssetIdentifier), &out_dir);
    export_schema(&schema_for!(AssetQualifier), &out_dir);
    export_schema(&schema_for!(ScopeSpecIdentifier), &out_dir);
    export_schema(&schema_for!(VersionInfoV1), &out_dir);
}
