use cosmwasm_std::{Addr, Coin, CosmosMsg, Decimal, Uint128};
use provwasm_std::ProvenanceMsg;

use crate::core::{error::ContractError, types::verifier_detail::VerifierDetail};

use super::{aliases::AssetResult, functions::bank_send, traits::ResultExtensions};

/// Computes the settlement messages that release an escrowed onboarding fee after a successful
/// verification.  Each fee destination receives the floor of
/// `paid_amount * verifier fee percent * destination fee percent`, computed in a single rounding
/// step, and whatever remains of the paid amount after all destination floors (including the
/// verifier's own retained share) is sent to the verifier itself.  The sum of all emitted
/// amounts always equals the paid amount exactly.
pub fn calculate_fee_distribution_messages(
    escrowed_fee: &Coin,
    verifier: &VerifierDetail,
) -> AssetResult<Vec<CosmosMsg<ProvenanceMsg>>> {
    let paid_amount = escrowed_fee.amount;
    let denom = &escrowed_fee.denom;
    let mut messages = vec![];
    let mut distributed = Uint128::zero();
    for destination in verifier.fee_destinations.iter() {
        let share = floor_product_share(paid_amount, verifier.fee_percent, destination.fee_percent)?;
        // A destination share can legitimately floor to zero on small fees. Zero-amount bank
        // sends are rejected by the chain, so they are skipped rather than emitted
        if !share.is_zero() {
            messages.push(bank_send(&destination.address, share.u128(), denom));
        }
        distributed = distributed.checked_add(share)?;
    }
    // Flooring guarantees the distributed total never exceeds the paid amount, so a subtraction
    // failure here indicates a stored verifier that escaped validation
    let verifier_residual = paid_amount.checked_sub(distributed)?;
    if !verifier_residual.is_zero() {
        messages.push(bank_send(&verifier.address, verifier_residual.u128(), denom));
    }
    messages.to_ok()
}

/// Computes the single message that returns an escrowed onboarding fee to the requestor in full
/// after a failed verification.  No destination or verifier payments are ever emitted alongside
/// a refund.
pub fn calculate_refund_messages(
    requestor: &Addr,
    escrowed_fee: &Coin,
) -> Vec<CosmosMsg<ProvenanceMsg>> {
    if escrowed_fee.amount.is_zero() {
        vec![]
    } else {
        vec![bank_send(
            requestor,
            escrowed_fee.amount.u128(),
            &escrowed_fee.denom,
        )]
    }
}

/// Produces `floor(amount * first_percent * second_percent)` with one rounding step by expanding
/// both fixed-point percentages into a single ratio.  Both percent values are validated to be at
/// most 100% before they are ever stored, which keeps the expanded numerator within range.
fn floor_product_share(
    amount: Uint128,
    first_percent: Decimal,
    second_percent: Decimal,
) -> AssetResult<Uint128> {
    let numerator = first_percent
        .atomics()
        .checked_mul(second_percent.atomics())
        .map_err(ContractError::Overflow)?;
    let denominator = Decimal::one()
        .atomics()
        .checked_mul(Decimal::one().atomics())
        .map_err(ContractError::Overflow)?;
    amount.multiply_ratio(numerator, denominator).to_ok()
}
