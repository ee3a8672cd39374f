//! Per-request marker held while a disbursement's token transfer is in flight.

use soroban_sdk::Env;

use crate::storage_types::{CampaignId, CrowdfundError, RequestId, TemporaryKey, TTL_TEMPORARY};

pub fn is_disbursing(e: &Env, campaign_id: CampaignId, request_id: RequestId) -> bool {
    e.storage()
        .temporary()
        .has(&TemporaryKey::Disbursing(campaign_id, request_id))
}

pub fn enter(e: &Env, campaign_id: CampaignId, request_id: RequestId) -> Result<(), CrowdfundError> {
    if is_disbursing(e, campaign_id, request_id) {
        return Err(CrowdfundError::DisbursementInProgress);
    }
    let key = TemporaryKey::Disbursing(campaign_id, request_id);
    e.storage().temporary().set(&key, &true);
    e.storage().temporary().extend_ttl(&key, TTL_TEMPORARY, TTL_TEMPORARY);
    Ok(())
}

pub fn exit(e: &Env, campaign_id: CampaignId, request_id: RequestId) {
    e.storage()
        .temporary()
        .remove(&TemporaryKey::Disbursing(campaign_id, request_id));
}
