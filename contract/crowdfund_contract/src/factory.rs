use soroban_sdk::{Address, Env, String, Vec};

use crate::campaign;
use crate::events;
use crate::storage_types::{
    CampaignConfig, CampaignId, CampaignParams, CrowdfundError, DataKey, LedgerTotals,
    PersistentKey, Recurrence, FIRST_CAMPAIGN_ID, MAX_VOTE_THRESHOLD,
};
use crate::utils::{extend_instance, extend_persistent, now};

/// Check campaign parameters, reporting the first violated constraint.
pub fn validate_params(e: &Env, params: &CampaignParams) -> Result<(), CrowdfundError> {
    if params.minimum_contribution <= 0 {
        return Err(CrowdfundError::InvalidMinimumContribution);
    }
    if params.deadline <= now(e) {
        return Err(CrowdfundError::DeadlineInPast);
    }
    if params.target_contribution <= params.minimum_contribution {
        return Err(CrowdfundError::TargetNotAboveMinimum);
    }
    if params.vote_threshold > MAX_VOTE_THRESHOLD {
        return Err(CrowdfundError::InvalidVoteThreshold);
    }
    Ok(())
}

pub fn validate_recurrence(recurrence: &Recurrence) -> Result<(), CrowdfundError> {
    if let Recurrence::Periodic(policy) = recurrence {
        if policy.interval_seconds == 0 {
            return Err(CrowdfundError::InvalidInterval);
        }
    }
    Ok(())
}

pub fn campaign_ids(e: &Env) -> Vec<CampaignId> {
    e.storage()
        .persistent()
        .get(&PersistentKey::CampaignIds)
        .unwrap_or(Vec::new(e))
}

/// Create a new campaign bundle and append it to the creation list.
pub fn launch(
    e: &Env,
    creator: Address,
    params: CampaignParams,
    title: String,
    description: String,
    recurrence: Recurrence,
) -> Result<CampaignId, CrowdfundError> {
    validate_params(e, &params)?;
    validate_recurrence(&recurrence)?;

    let campaign_id: CampaignId = e
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(FIRST_CAMPAIGN_ID);

    let config = CampaignConfig {
        id: campaign_id,
        creator: creator.clone(),
        title: title.clone(),
        description: description.clone(),
        minimum_contribution: params.minimum_contribution,
        deadline: params.deadline,
        target_contribution: params.target_contribution,
        vote_threshold: params.vote_threshold,
        default_approve_if_no_vote: params.default_approve_if_no_vote,
        voting_mode: params.voting_mode,
        recurrence,
        created_at: now(e),
    };
    campaign::set_config(e, &config);
    campaign::set_totals(e, campaign_id, &LedgerTotals::default());

    let mut ids = campaign_ids(e);
    ids.push_back(campaign_id);
    e.storage().persistent().set(&PersistentKey::CampaignIds, &ids);
    extend_persistent(e, &PersistentKey::CampaignIds);

    e.storage()
        .instance()
        .set(&DataKey::NextCampaignId, &(campaign_id + 1));
    extend_instance(e);

    events::emit_campaign_started(
        e,
        events::CampaignStartedEvent {
            creator,
            campaign_id,
            title,
            description,
        },
    );

    Ok(campaign_id)
}
