use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::{CampaignId, RequestId};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignStartedEvent {
    pub creator: Address,
    pub campaign_id: CampaignId,
    pub title: String,
    pub description: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionRecordedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub raised_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawRequestCreatedEvent {
    pub campaign_id: CampaignId,
    pub request_id: RequestId,
    pub amount: i128,
    pub recipient: Address,
    pub vote_deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCastEvent {
    pub campaign_id: CampaignId,
    pub request_id: RequestId,
    pub voter: Address,
    pub weight: i128,
    pub votes_for: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawRequestFinalizedEvent {
    pub campaign_id: CampaignId,
    pub request_id: RequestId,
    pub approved: bool,
    pub votes_for: i128,
    pub eligible_base: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsDisbursedEvent {
    pub campaign_id: CampaignId,
    pub request_id: RequestId,
    pub recipient: Address,
    pub amount: i128,
}

pub fn emit_campaign_started(env: &Env, event: CampaignStartedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_started"),), event);
}

pub fn emit_contribution_recorded(env: &Env, event: ContributionRecordedEvent) {
    env.events()
        .publish((Symbol::new(env, "contribution_recorded"),), event);
}

pub fn emit_withdraw_request_created(env: &Env, event: WithdrawRequestCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "withdraw_request_created"),), event);
}

pub fn emit_vote_cast(env: &Env, event: VoteCastEvent) {
    env.events().publish((Symbol::new(env, "vote_cast"),), event);
}

pub fn emit_withdraw_request_finalized(env: &Env, event: WithdrawRequestFinalizedEvent) {
    env.events()
        .publish((Symbol::new(env, "withdraw_request_finalized"),), event);
}

pub fn emit_funds_disbursed(env: &Env, event: FundsDisbursedEvent) {
    env.events()
        .publish((Symbol::new(env, "funds_disbursed"),), event);
}
