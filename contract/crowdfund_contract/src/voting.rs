use soroban_sdk::{Address, Env};

use crate::events;
use crate::guard;
use crate::ledger;
use crate::requests;
use crate::storage_types::{
    CampaignConfig, CampaignId, CrowdfundError, LedgerTotals, PersistentKey, RequestId,
    VotingMode, MAX_VOTE_THRESHOLD,
};
use crate::utils::{checked_add, checked_mul, extend_persistent, now};

pub fn has_voted(e: &Env, campaign_id: CampaignId, request_id: RequestId, voter: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&PersistentKey::Voted(campaign_id, request_id, voter.clone()))
}

/// Vote weight of a contributor with the given balance.
pub fn vote_weight(mode: VotingMode, balance: i128) -> i128 {
    match mode {
        VotingMode::PerCapita => 1,
        VotingMode::WeightedByContribution => balance,
    }
}

/// The quantity a tally is measured against.
pub fn eligible_base(mode: VotingMode, totals: &LedgerTotals) -> i128 {
    match mode {
        VotingMode::PerCapita => totals.contributor_count as i128,
        VotingMode::WeightedByContribution => totals.raised_amount,
    }
}

/// Approval rule: the tally clears the threshold percentage of the eligible
/// base, or nobody voted and the campaign approves by default.
pub fn is_approved(e: &Env, config: &CampaignConfig, votes_for: i128, base: i128) -> bool {
    debug_assert!(config.vote_threshold <= MAX_VOTE_THRESHOLD);
    let lhs = checked_mul(e, votes_for, 100);
    let rhs = checked_mul(e, config.vote_threshold as i128, base);
    lhs >= rhs || (votes_for == 0 && config.default_approve_if_no_vote)
}

/// Record an up-vote from `voter` on a pending request.
pub fn vote(
    e: &Env,
    config: &CampaignConfig,
    request_id: RequestId,
    voter: &Address,
) -> Result<i128, CrowdfundError> {
    let campaign_id = config.id;
    let mut request = requests::get_request(e, campaign_id, request_id)?;

    let balance = ledger::balance_of(e, campaign_id, voter);
    if balance == 0 {
        return Err(CrowdfundError::NotContributor);
    }
    if request.finalized || now(e) > request.vote_deadline {
        return Err(CrowdfundError::VotingClosed);
    }
    if guard::is_disbursing(e, campaign_id, request_id) {
        return Err(CrowdfundError::DisbursementInProgress);
    }
    if has_voted(e, campaign_id, request_id, voter) {
        return Err(CrowdfundError::AlreadyVoted);
    }

    let weight = vote_weight(config.voting_mode, balance);
    request.votes_for = checked_add(e, request.votes_for, weight);
    request.voter_count += 1;

    let voted_key = PersistentKey::Voted(campaign_id, request_id, voter.clone());
    e.storage().persistent().set(&voted_key, &true);
    extend_persistent(e, &voted_key);
    requests::set_request(e, campaign_id, &request);

    events::emit_vote_cast(
        e,
        events::VoteCastEvent {
            campaign_id,
            request_id,
            voter: voter.clone(),
            weight,
            votes_for: request.votes_for,
        },
    );

    Ok(request.votes_for)
}
