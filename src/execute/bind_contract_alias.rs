use cosmwasm_std::{Env, MessageInfo, Response};
use provwasm_std::{bind_name, NameBinding};

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

/// A transformation of [ExecuteMsg::BindContractAlias](crate::core::msg::ExecuteMsg::BindContractAlias)
/// for ease of use in the underlying [bind_contract_alias](self::bind_contract_alias) function.
#[derive(Clone, PartialEq)]
pub struct BindContractAliasV1 {
    pub alias_name: String,
}
impl BindContractAliasV1 {
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<BindContractAliasV1> {
        match msg {
            ExecuteMsg::BindContractAlias { alias_name } => {
                BindContractAliasV1 { alias_name }.to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::BindContractAlias".to_string(),
            }
            .to_err(),
        }
    }
}

/// Route implementation for [ExecuteMsg::BindContractAlias](crate::core::msg::ExecuteMsg::BindContractAlias).
/// Binds an additional restricted Provenance name to the contract's address, giving external
/// consumers a stable, human-readable alias for locating the contract.
pub fn bind_contract_alias(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: BindContractAliasV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    Response::new()
        .add_message(bind_name(
            &msg.alias_name,
            env.contract.address,
            NameBinding::Restricted,
        )?)
        .add_attributes(
            EventAttributes::new(EventType::BindContractAlias).set_new_value(&msg.alias_name),
        )
        .to_ok()
}
