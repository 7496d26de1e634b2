use crate::core::error::ContractError;
use crate::core::types::access_route::AccessRoute;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{coin, BankMsg, CosmosMsg};
use provwasm_std::ProvenanceMsg;
use std::collections::HashSet;
use std::hash::Hash;

/// Determines how many elements within the provided reference slice are unique by the given
/// property.
///
/// # Examples
/// ```
/// use asset_onboarding_smart_contract::util::functions::distinct_count_by_property;
///
/// let values = vec!["a", "b", "c", "a"];
/// let distinct_count = distinct_count_by_property(&values, |s| s);
/// assert_eq!(3, distinct_count);
/// ```
pub fn distinct_count_by_property<F, T, U>(slice: &[T], selector: F) -> usize
where
    U: Sized + Eq + Hash,
    F: FnMut(&T) -> &U,
{
    slice.iter().map(selector).collect::<HashSet<_>>().len()
}

/// Converts an asset type and a contract base name into the fully-qualified attribute name
/// reserved to the contract for a given asset type.
///
/// # Examples
/// ```
/// use asset_onboarding_smart_contract::util::functions::generate_asset_attribute_name;
///
/// let attribute_name = generate_asset_attribute_name("mortgage", "asset");
/// assert_eq!("mortgage.asset", attribute_name.as_str());
/// ```
pub fn generate_asset_attribute_name<T: Into<String>, U: Into<String>>(
    asset_type: T,
    base_contract_name: U,
) -> String {
    format!("{}.{}", asset_type.into(), base_contract_name.into())
}

/// Takes an existing vector, moves it into this function, and swaps out a single existing item
/// for the specified replacement item.  If less or more than one existing item matches the given
/// predicate closure, an error is returned.
pub fn replace_single_matching_vec_element<T, F>(
    v: Vec<T>,
    new: T,
    predicate: F,
) -> AssetResult<Vec<T>>
where
    F: Fn(&T) -> bool,
{
    let initial_size = v.len();
    let mut resulting_values = v
        .into_iter()
        .filter(|elem| !predicate(elem))
        .collect::<Vec<T>>();
    let total_values_replaced = initial_size - resulting_values.len();
    if total_values_replaced == 1 {
        resulting_values.push(new);
        Ok(resulting_values)
    } else {
        ContractError::generic(format!(
            "expected a single value to be replaced, but found {}",
            total_values_replaced
        ))
        .to_err()
    }
}

/// Creates a message that sends funds of the specified denomination from the contract to the
/// recipient address.  The response type is CosmosMsg<ProvenanceMsg>, which allows the bank send
/// to be combined with the message types used by the contract's execution routes.
pub fn bank_send<R: Into<String>, D: Into<String>>(
    recipient: R,
    amount: u128,
    denom: D,
) -> CosmosMsg<ProvenanceMsg> {
    CosmosMsg::Bank(BankMsg::Send {
        to_address: recipient.into(),
        amount: vec![coin(amount, denom)],
    })
}

/// Trims down a vector of AccessRoute to ensure that the contained values are valid and unique.
/// Routes with blank route values, or with a set-but-blank name, are dropped, and duplicates
/// (after trimming whitespace) are collapsed.
pub fn filter_valid_access_routes(routes: Vec<AccessRoute>) -> Vec<AccessRoute> {
    routes
        .into_iter()
        .map(|r| r.trim_values())
        .filter(|r| {
            !r.route.is_empty()
                && match &r.name {
                    Some(name) => !name.is_empty(),
                    None => true,
                }
        })
        .collect::<HashSet<_>>()
        .into_iter()
        .collect::<Vec<AccessRoute>>()
}
