use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::campaign;
use crate::events;
use crate::storage_types::{
    CampaignId, CampaignState, CrowdfundError, LedgerTotals, PersistentKey,
};
use crate::utils::{checked_add, checked_add_u32, extend_persistent, token_client};

/// Cumulative amount contributed by `contributor`, zero if absent.
pub fn balance_of(e: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

/// Record a contribution and pull the funds into escrow.
pub fn contribute(
    e: &Env,
    campaign_id: CampaignId,
    contributor: &Address,
    amount: i128,
) -> Result<LedgerTotals, CrowdfundError> {
    let config = campaign::get_config(e, campaign_id)?;
    let mut totals = campaign::get_totals(e, campaign_id);

    if amount < config.minimum_contribution {
        return Err(CrowdfundError::InsufficientContribution);
    }
    if campaign::current_state(e, &config, &totals) == CampaignState::Expired {
        return Err(CrowdfundError::CampaignExpired);
    }

    let prior = balance_of(e, campaign_id, contributor);
    let balance = checked_add(e, prior, amount);
    totals.raised_amount = checked_add(e, totals.raised_amount, amount);
    if prior == 0 {
        totals.contributor_count = checked_add_u32(e, totals.contributor_count, 1);
    }

    // A single contributor can never hold more than the campaign has raised.
    if balance > totals.raised_amount {
        panic_with_error!(e, CrowdfundError::LedgerInvariantViolated);
    }

    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    e.storage().persistent().set(&key, &balance);
    extend_persistent(e, &key);
    campaign::set_totals(e, campaign_id, &totals);

    token_client(e)?.transfer(contributor, &e.current_contract_address(), &amount);

    let state = campaign::current_state(e, &config, &totals) as u32;
    log!(e, "contribution recorded", campaign_id, totals.raised_amount, state);

    events::emit_contribution_recorded(
        e,
        events::ContributionRecordedEvent {
            campaign_id,
            contributor: contributor.clone(),
            amount,
            raised_amount: totals.raised_amount,
        },
    );

    Ok(totals)
}
