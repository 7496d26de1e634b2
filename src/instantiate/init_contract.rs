use cosmwasm_std::{CosmosMsg, Env, MessageInfo, Response};
use provwasm_std::{bind_name, NameBinding, ProvenanceMsg};

use crate::core::msg::InitMsg;
use crate::core::state::{config, insert_asset_definition, State};
use crate::migrate::version_info::migrate_version_info;
use crate::util::aliases::{DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::functions::generate_asset_attribute_name;
use crate::util::traits::ResultExtensions;

/// The main functionality executed when the smart contract is first instantiated.  Creates the
/// internal [State](crate::core::state::State) value, stores any provided asset definitions,
/// binds the contract's names, and seeds the version record consulted by future migrations.
pub fn init_contract(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let mut messages: Vec<CosmosMsg<ProvenanceMsg>> = vec![];
    // The contract needs to own its root name to prevent external callers from reserving
    // classification names that were never intended to exist
    if msg.bind_base_name {
        messages.push(bind_name(
            &msg.base_contract_name,
            env.contract.address.clone(),
            NameBinding::Restricted,
        )?);
    }
    // This vector can be empty on instantiation.  Future executions by the admin can append new
    // definitions, but the contract takes no onboarding input until at least one exists
    for input in msg.asset_definitions.iter() {
        let asset_definition = input.as_asset_definition()?;
        insert_asset_definition(deps.storage, &asset_definition)?;
        if input.bind_name.unwrap_or(true) {
            messages.push(bind_name(
                generate_asset_attribute_name(
                    &asset_definition.asset_type,
                    &msg.base_contract_name,
                ),
                env.contract.address.clone(),
                NameBinding::Restricted,
            )?);
        }
    }
    let state = State::new(msg.base_contract_name, info.sender);
    config(deps.storage).save(&state)?;
    // Seed the version record so the first real migration has a baseline to compare against
    migrate_version_info(deps.storage)?;
    Response::new()
        .add_messages(messages)
        .add_attributes(EventAttributes::new(EventType::InstantiateContract))
        .to_ok()
}
