use soroban_sdk::{Address, Env, String};

use crate::campaign;
use crate::events;
use crate::storage_types::{
    CampaignId, CampaignState, CrowdfundError, PersistentKey, RequestId, WithdrawRequest,
};
use crate::utils::{extend_persistent, now};

pub fn request_count(e: &Env, campaign_id: CampaignId) -> RequestId {
    e.storage()
        .persistent()
        .get(&PersistentKey::RequestCount(campaign_id))
        .unwrap_or(0)
}

pub fn get_request(
    e: &Env,
    campaign_id: CampaignId,
    request_id: RequestId,
) -> Result<WithdrawRequest, CrowdfundError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Request(campaign_id, request_id))
        .ok_or(CrowdfundError::RequestNotFound)
}

pub fn set_request(e: &Env, campaign_id: CampaignId, request: &WithdrawRequest) {
    let key = PersistentKey::Request(campaign_id, request.id);
    e.storage().persistent().set(&key, request);
    extend_persistent(e, &key);
}

/// Append a new withdraw request. Only the campaign creator may propose, and
/// an expired campaign takes no new requests.
pub fn create_request(
    e: &Env,
    campaign_id: CampaignId,
    caller: &Address,
    description: String,
    amount: i128,
    recipient: Address,
    vote_duration_seconds: u64,
) -> Result<RequestId, CrowdfundError> {
    let config = campaign::get_config(e, campaign_id)?;
    if *caller != config.creator {
        return Err(CrowdfundError::NotCreator);
    }
    if amount <= 0 {
        return Err(CrowdfundError::InvalidAmount);
    }

    let totals = campaign::get_totals(e, campaign_id);
    if campaign::current_state(e, &config, &totals) == CampaignState::Expired {
        return Err(CrowdfundError::CampaignExpired);
    }
    if amount > campaign::escrow_balance(&totals) {
        return Err(CrowdfundError::RequestExceedsEscrow);
    }

    let request_id = request_count(e, campaign_id);
    let vote_deadline = now(e).saturating_add(vote_duration_seconds);

    let request = WithdrawRequest {
        id: request_id,
        description,
        requested_amount: amount,
        recipient: recipient.clone(),
        vote_deadline,
        votes_for: 0,
        voter_count: 0,
        finalized: false,
        approved: false,
    };
    set_request(e, campaign_id, &request);

    let count_key = PersistentKey::RequestCount(campaign_id);
    e.storage().persistent().set(&count_key, &(request_id + 1));
    extend_persistent(e, &count_key);

    events::emit_withdraw_request_created(
        e,
        events::WithdrawRequestCreatedEvent {
            campaign_id,
            request_id,
            amount,
            recipient,
            vote_deadline,
        },
    );

    Ok(request_id)
}
