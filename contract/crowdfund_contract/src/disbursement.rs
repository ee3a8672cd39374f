use soroban_sdk::{log, Address, Env};

use crate::campaign;
use crate::events;
use crate::guard;
use crate::requests;
use crate::storage_types::{CampaignId, CrowdfundError, RequestId};
use crate::utils::{checked_add, now, token_client};
use crate::voting;

/// Decide a withdraw request and, if approved, pay it out of escrow.
///
/// The request is marked finalized and escrow is debited before the token
/// transfer runs, with the disbursement guard held across the transfer.
pub fn finalize(
    e: &Env,
    campaign_id: CampaignId,
    caller: &Address,
    request_id: RequestId,
) -> Result<bool, CrowdfundError> {
    let config = campaign::get_config(e, campaign_id)?;
    if *caller != config.creator {
        return Err(CrowdfundError::NotCreator);
    }

    let mut request = requests::get_request(e, campaign_id, request_id)?;
    if request.finalized {
        return Err(CrowdfundError::AlreadyFinalized);
    }
    if guard::is_disbursing(e, campaign_id, request_id) {
        return Err(CrowdfundError::DisbursementInProgress);
    }

    let mut totals = campaign::get_totals(e, campaign_id);
    let base = voting::eligible_base(config.voting_mode, &totals);
    let approved = voting::is_approved(e, &config, request.votes_for, base);
    log!(e, "withdraw request decided", campaign_id, request_id, approved);

    request.finalized = true;
    request.approved = approved;

    if approved {
        if request.requested_amount > campaign::escrow_balance(&totals) {
            return Err(CrowdfundError::InsufficientFunds);
        }
        totals.disbursed_amount = checked_add(e, totals.disbursed_amount, request.requested_amount);
        totals.last_disbursement_at = now(e);
    }

    requests::set_request(e, campaign_id, &request);
    campaign::set_totals(e, campaign_id, &totals);

    events::emit_withdraw_request_finalized(
        e,
        events::WithdrawRequestFinalizedEvent {
            campaign_id,
            request_id,
            approved,
            votes_for: request.votes_for,
            eligible_base: base,
        },
    );

    if approved {
        guard::enter(e, campaign_id, request_id)?;
        token_client(e)?.transfer(
            &e.current_contract_address(),
            &request.recipient,
            &request.requested_amount,
        );
        guard::exit(e, campaign_id, request_id);

        log!(e, "funds disbursed", campaign_id, request_id, request.requested_amount);
        events::emit_funds_disbursed(
            e,
            events::FundsDisbursedEvent {
                campaign_id,
                request_id,
                recipient: request.recipient,
                amount: request.requested_amount,
            },
        );
    }

    Ok(approved)
}
