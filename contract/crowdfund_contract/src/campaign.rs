//! Campaign state machine: configuration and totals storage, and the derived
//! campaign status.
//!
//! The status is never stored. Every read and every mutating call derives it
//! from the raised amount, the target and the deadline, so the only way it
//! moves is through those inputs.

use soroban_sdk::Env;

use crate::storage_types::{
    CampaignConfig, CampaignId, CampaignState, CampaignSummary, CrowdfundError, LedgerTotals,
    PersistentKey, Recurrence,
};
use crate::utils::{extend_persistent, now};

/// Derive the campaign status at time `now`.
///
/// Reaching the target wins over the deadline when both hold.
pub fn derive_state(
    raised_amount: i128,
    target_contribution: i128,
    deadline: u64,
    now: u64,
) -> CampaignState {
    if raised_amount >= target_contribution {
        CampaignState::Successful
    } else if now > deadline {
        CampaignState::Expired
    } else {
        CampaignState::Fundraising
    }
}

pub fn get_config(e: &Env, campaign_id: CampaignId) -> Result<CampaignConfig, CrowdfundError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CrowdfundError::CampaignNotFound)
}

pub fn set_config(e: &Env, config: &CampaignConfig) {
    let key = PersistentKey::Campaign(config.id);
    e.storage().persistent().set(&key, config);
    extend_persistent(e, &key);
}

pub fn get_totals(e: &Env, campaign_id: CampaignId) -> LedgerTotals {
    e.storage()
        .persistent()
        .get(&PersistentKey::Totals(campaign_id))
        .unwrap_or_default()
}

pub fn set_totals(e: &Env, campaign_id: CampaignId, totals: &LedgerTotals) {
    let key = PersistentKey::Totals(campaign_id);
    e.storage().persistent().set(&key, totals);
    extend_persistent(e, &key);
}

pub fn current_state(e: &Env, config: &CampaignConfig, totals: &LedgerTotals) -> CampaignState {
    derive_state(
        totals.raised_amount,
        config.target_contribution,
        config.deadline,
        now(e),
    )
}

/// Escrowed funds not yet disbursed.
pub fn escrow_balance(totals: &LedgerTotals) -> i128 {
    totals.raised_amount - totals.disbursed_amount
}

pub fn summary(e: &Env, campaign_id: CampaignId) -> Result<CampaignSummary, CrowdfundError> {
    let config = get_config(e, campaign_id)?;
    let totals = get_totals(e, campaign_id);
    let state = current_state(e, &config, &totals);

    Ok(CampaignSummary {
        creator: config.creator,
        minimum_contribution: config.minimum_contribution,
        deadline: config.deadline,
        target_contribution: config.target_contribution,
        raised_amount: totals.raised_amount,
        contributor_count: totals.contributor_count,
        state,
        vote_threshold: config.vote_threshold,
        default_approve_if_no_vote: config.default_approve_if_no_vote,
    })
}

/// Earliest time the next periodic disbursement is due. Informational only:
/// nothing inside the contract acts on it.
pub fn next_disbursement_time(config: &CampaignConfig, totals: &LedgerTotals) -> Option<u64> {
    match &config.recurrence {
        Recurrence::OneShot => None,
        Recurrence::Periodic(policy) => {
            let last = if totals.last_disbursement_at == 0 {
                config.created_at
            } else {
                totals.last_disbursement_at
            };
            Some(last.saturating_add(policy.interval_seconds))
        }
    }
}
