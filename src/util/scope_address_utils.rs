use std::{convert::TryInto, str::FromStr};

use crate::{core::error::ContractError, util::aliases::AssetResult};
use bech32::{FromBase32, ToBase32, Variant};
use cosmwasm_std::Addr;
use uuid::Uuid;

use super::traits::ResultExtensions;

/// Standard scope key prefix from the Provenance metadata module
const KEY_SCOPE: u8 = 0x00;
/// Standard scope spec key prefix from the Provenance metadata module
const KEY_SCOPE_SPEC: u8 = 0x04;
/// Standard bech32 encoding for mainnet addresses simply begins with the string "pb"
const MAINNET_HRP: &str = "pb";
/// Standard bech32 encoding for testnet addresses simply begins with the string "tp"
const TESTNET_HRP: &str = "tp";
/// Standard bech32 encoding for scope addresses simply begins with the string "scope"
const SCOPE_HRP: &str = "scope";
/// Standard bech32 encoding for scope spec addresses simply begins with the string "scopespec"
const SCOPE_SPEC_HRP: &str = "scopespec";
const VALID_HRPS: [&str; 4] = [MAINNET_HRP, TESTNET_HRP, SCOPE_HRP, SCOPE_SPEC_HRP];

/// Converts a string containing an asset uuid into its scope address representation.
pub fn asset_uuid_to_scope_address<S: Into<String>>(asset_uuid: S) -> AssetResult<String> {
    uuid_to_metadata_address(KEY_SCOPE, SCOPE_HRP, asset_uuid)
}

/// Converts a string containing a scope spec uuid into its scope spec address representation.
pub fn scope_spec_uuid_to_scope_spec_address<S: Into<String>>(
    scope_spec_uuid: S,
) -> AssetResult<String> {
    uuid_to_metadata_address(KEY_SCOPE_SPEC, SCOPE_SPEC_HRP, scope_spec_uuid)
}

/// Takes a string representation of a scope address and converts it into an asset uuid string.
/// Note: asset uuid always matches the scope uuid, as a convention.
pub fn scope_address_to_asset_uuid<S: Into<String>>(scope_address: S) -> AssetResult<String> {
    metadata_address_to_uuid(scope_address, SCOPE_HRP)
}

/// Takes a string representation of a scope spec address and converts it to the scope spec's uuid.
pub fn scope_spec_address_to_scope_spec_uuid<S: Into<String>>(
    scope_spec_address: S,
) -> AssetResult<String> {
    metadata_address_to_uuid(scope_spec_address, SCOPE_SPEC_HRP)
}

/// Validates that the given string is valid bech32 with a known prefix and converts it to an Addr.
pub fn bech32_string_to_addr<S: Into<String>>(address: S) -> AssetResult<Addr> {
    let address_string = address.into();
    let (hrp, _, _) = bech32::decode(&address_string)?;
    if !VALID_HRPS.contains(&hrp.as_str()) {
        ContractError::InvalidAddress {
            address: address_string,
            explanation: format!("invalid address prefix [{}]", hrp),
        }
        .to_err()
    } else {
        // The decode above proves the input is well-formed, so the unchecked call is safe here
        Addr::unchecked(&address_string).to_ok()
    }
}

/// Builds a Provenance metadata address by prepending the module key prefix byte to the
/// uuid's big-endian bytes and encoding the result as bech32 under the given hrp.
fn uuid_to_metadata_address<S: Into<String>>(
    key_byte: u8,
    hrp: &str,
    uuid: S,
) -> AssetResult<String> {
    let mut buffer = vec![key_byte];
    buffer.append(&mut Uuid::from_str(&uuid.into())?.as_bytes().to_vec());
    bech32::encode(hrp, buffer.to_base32(), Variant::Bech32)?.to_ok()
}

/// Reverses uuid_to_metadata_address, verifying that the decoded hrp matches the expected
/// address flavor before stripping the key prefix byte and re-rendering the uuid.
fn metadata_address_to_uuid<S1: Into<String>, S2: Into<String>>(
    address: S1,
    expected_hrp: S2,
) -> AssetResult<String> {
    let target_address = address.into();
    let (hrp, base_32, _) = bech32::decode(&target_address)?;
    let expected_hrp_string = expected_hrp.into();
    if hrp != expected_hrp_string {
        return ContractError::InvalidAddress {
            address: target_address,
            explanation: format!(
                "expected the prefix [{}] to be included in the specified address, but the prefix was [{}]",
                expected_hrp_string, hrp,
            ),
        }
        .to_err();
    }
    let uuid_bytes: [u8; 16] = Vec::from_base32(&base_32)?
        .into_iter()
        // The first byte is the metadata module key prefix, not a portion of the uuid
        .skip(1)
        .collect::<Vec<u8>>()
        .try_into()
        .map_err(|_| {
            ContractError::std_err(format!(
                "failed deserializing base32 data for address {}",
                &target_address,
            ))
        })?;
    // from_slice validates the byte content, unlike from_bytes, keeping panics out of to_string
    Uuid::from_slice(&uuid_bytes)?.to_string().to_ok()
}
