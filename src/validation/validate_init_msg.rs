use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::types::asset_definition::AssetDefinitionInput;
use crate::core::types::fee_destination::FeeDestination;
use crate::core::types::verifier_detail::VerifierDetail;
use crate::util::aliases::{AssetResult, DepsC};
use crate::util::functions::distinct_count_by_property;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::Decimal;

pub fn validate_init_msg(msg: &InitMsg, deps: &DepsC) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if msg.base_contract_name.trim().is_empty() {
        invalid_fields.push("base_contract_name: must not be blank".to_string());
    }
    if distinct_count_by_property(&msg.asset_definitions, |def| &def.asset_type)
        != msg.asset_definitions.len()
    {
        invalid_fields.push(
            "asset_definitions: each definition must specify a unique asset type".to_string(),
        );
    }
    let mut definition_messages = msg
        .asset_definitions
        .iter()
        .flat_map(|input| validate_asset_definition_input_internal(input, deps))
        .collect::<Vec<String>>();
    invalid_fields.append(&mut definition_messages);
    gen_validation_response("Instantiate", invalid_fields)
}

/// Validates a single asset definition input, producing an InvalidMessageFields error when any
/// contained value is malformed.  Used by the add/update definition routes.
pub fn validate_asset_definition_input(
    input: &AssetDefinitionInput,
    deps: &DepsC,
) -> AssetResult<()> {
    gen_validation_response(
        "AssetDefinitionInput",
        validate_asset_definition_input_internal(input, deps),
    )
}

/// Validates a single verifier detail, producing an InvalidMessageFields error when any
/// contained value is malformed.  Used by the add/update verifier routes.
pub fn validate_verifier(verifier: &VerifierDetail, deps: &DepsC) -> AssetResult<()> {
    gen_validation_response("VerifierDetail", validate_verifier_internal(verifier, deps))
}

fn gen_validation_response<S: Into<String>>(
    message_type: S,
    invalid_fields: Vec<String>,
) -> AssetResult<()> {
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: message_type.into(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}

fn validate_asset_definition_input_internal(
    input: &AssetDefinitionInput,
    deps: &DepsC,
) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    if input.asset_type.trim().is_empty() {
        invalid_fields.push("asset_definition:asset_type: must not be blank".to_string());
    }
    if input.scope_spec_identifier.get_scope_spec_address().is_err() {
        invalid_fields.push(
            "asset_definition:scope_spec_identifier: must resolve to a valid scope spec address"
                .to_string(),
        );
    }
    if input.verifiers.is_empty() {
        invalid_fields.push(
            "asset_definition:verifiers: at least one verifier must be supplied per asset type"
                .to_string(),
        );
    }
    if distinct_count_by_property(&input.verifiers, |verifier| &verifier.address)
        != input.verifiers.len()
    {
        invalid_fields
            .push("asset_definition:verifiers: all verifier addresses must be unique".to_string());
    }
    let mut verifier_messages = input
        .verifiers
        .iter()
        .flat_map(|verifier| validate_verifier_internal(verifier, deps))
        .collect::<Vec<String>>();
    invalid_fields.append(&mut verifier_messages);
    invalid_fields
}

fn validate_verifier_internal(verifier: &VerifierDetail, deps: &DepsC) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    if deps.api.addr_validate(&verifier.address).is_err() {
        invalid_fields.push("verifier:address: must be a valid address".to_string());
    }
    if verifier.onboarding_denom.trim().is_empty() {
        invalid_fields.push("verifier:onboarding_denom: must not be blank".to_string());
    }
    if verifier.fee_percent > Decimal::percent(100) {
        invalid_fields
            .push("verifier:fee_percent: must be less than or equal to 100%".to_string());
    }
    if !verifier.fee_destinations.is_empty() && verifier.fee_percent == Decimal::zero() {
        invalid_fields.push(
            "verifier:fee_destinations: fee destinations cannot be provided when the fee percent is zero"
                .to_string(),
        );
    }
    if verifier.get_destination_percent_total() > Decimal::percent(100) {
        invalid_fields.push(
            "verifier:fee_destinations: fee destinations' percents must sum to no more than 100%"
                .to_string(),
        );
    }
    if distinct_count_by_property(&verifier.fee_destinations, |destination| {
        &destination.address
    }) != verifier.fee_destinations.len()
    {
        invalid_fields.push(
            "verifier:fee_destinations: all fee destination addresses must be unique".to_string(),
        );
    }
    let mut destination_messages = verifier
        .fee_destinations
        .iter()
        .flat_map(|destination| validate_destination_internal(destination, deps))
        .collect::<Vec<String>>();
    invalid_fields.append(&mut destination_messages);
    invalid_fields
}

fn validate_destination_internal(destination: &FeeDestination, deps: &DepsC) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    if deps.api.addr_validate(&destination.address).is_err() {
        invalid_fields.push("fee_destination:address: must be a valid address".to_string());
    }
    if destination.fee_percent > Decimal::percent(100) {
        invalid_fields
            .push("fee_destination:fee_percent: must be less than or equal to 100%".to_string());
    }
    if destination.fee_percent == Decimal::zero() {
        invalid_fields.push("fee_destination:fee_percent: must not be zero".to_string());
    }
    invalid_fields
}
