use cosmwasm_std::CosmosMsg;
use provwasm_std::ProvenanceMsg;

/// Accumulates the [CosmosMsg](cosmwasm_std::CosmosMsg) values produced while a request is
/// processed, allowing the route handler to append them all to its response at once.
pub trait MessageGatheringService {
    /// Retrieves all messages that have been appended to the service.
    fn get_messages(&self) -> Vec<CosmosMsg<ProvenanceMsg>>;

    /// Moves an existing message into the service's collection of messages.
    fn add_message(&mut self, message: CosmosMsg<ProvenanceMsg>);

    /// Appends any number of existing messages by reference to the service.
    fn append_messages(&mut self, messages: &[CosmosMsg<ProvenanceMsg>]);
}
