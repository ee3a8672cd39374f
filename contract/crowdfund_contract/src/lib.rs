#![no_std]

mod campaign;
mod disbursement;
mod events;
mod factory;
mod guard;
mod ledger;
mod requests;
mod storage_types;
mod utils;
mod voting;


pub use storage_types::{
    CampaignConfig, CampaignId, CampaignParams, CampaignState, CampaignSummary, CrowdfundError,
    ErrorKind, PeriodicPolicy, Recurrence, RequestId, VotingMode, WithdrawRequest,
};

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use storage_types::DataKey;
use utils::{check_initialized, extend_instance};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initialize the contract with its admin and the token campaigns raise in
    pub fn initialize(e: Env, admin: Address, token: Address) -> Result<(), CrowdfundError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(CrowdfundError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage()
            .instance()
            .set(&DataKey::NextCampaignId, &storage_types::FIRST_CAMPAIGN_ID);

        extend_instance(&e);
        Ok(())
    }

    /// Returns `(admin, token)`
    pub fn get_config(e: Env) -> Result<(Address, Address), CrowdfundError> {
        check_initialized(&e)?;
        let admin: Address = e
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(CrowdfundError::NotInitialized)?;
        let token: Address = e
            .storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(CrowdfundError::NotInitialized)?;
        Ok((admin, token))
    }

    /// Create a one-shot campaign
    pub fn create_campaign(
        e: Env,
        creator: Address,
        minimum_contribution: i128,
        deadline: u64,
        target_contribution: i128,
        vote_threshold: u32,
        default_approve_if_no_vote: bool,
        voting_mode: VotingMode,
        title: String,
        description: String,
    ) -> Result<CampaignId, CrowdfundError> {
        creator.require_auth();
        check_initialized(&e)?;

        let params = CampaignParams {
            minimum_contribution,
            deadline,
            target_contribution,
            vote_threshold,
            default_approve_if_no_vote,
            voting_mode,
        };
        factory::launch(&e, creator, params, title, description, Recurrence::OneShot)
    }

    /// Create a campaign that disburses to a designated recipient every
    /// `interval_seconds`. Each disbursement still goes through a withdraw
    /// request; nothing triggers it automatically.
    pub fn create_periodic_campaign(
        e: Env,
        creator: Address,
        params: CampaignParams,
        title: String,
        description: String,
        interval_seconds: u64,
        recipient: Address,
    ) -> Result<CampaignId, CrowdfundError> {
        creator.require_auth();
        check_initialized(&e)?;

        let recurrence = Recurrence::Periodic(PeriodicPolicy {
            interval_seconds,
            recipient,
        });
        factory::launch(&e, creator, params, title, description, recurrence)
    }

    /// Contribute `amount` of the configured token to a campaign's escrow
    pub fn contribute(
        e: Env,
        campaign_id: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        contributor.require_auth();
        check_initialized(&e)?;

        ledger::contribute(&e, campaign_id, &contributor, amount)?;
        Ok(())
    }

    /// Propose a disbursement from escrow. Creator only.
    pub fn create_withdraw_request(
        e: Env,
        campaign_id: CampaignId,
        caller: Address,
        description: String,
        amount: i128,
        recipient: Address,
        vote_duration_seconds: u64,
    ) -> Result<RequestId, CrowdfundError> {
        caller.require_auth();
        check_initialized(&e)?;

        requests::create_request(
            &e,
            campaign_id,
            &caller,
            description,
            amount,
            recipient,
            vote_duration_seconds,
        )
    }

    /// Up-vote a withdraw request. Contributors only, once per request.
    pub fn vote_withdraw_request(
        e: Env,
        campaign_id: CampaignId,
        caller: Address,
        request_id: RequestId,
    ) -> Result<(), CrowdfundError> {
        caller.require_auth();
        check_initialized(&e)?;

        let config = campaign::get_config(&e, campaign_id)?;
        voting::vote(&e, &config, request_id, &caller)?;
        Ok(())
    }

    /// Apply the vote decision to a withdraw request, transferring the funds
    /// if approved. Creator only. Returns whether the request was approved.
    pub fn finalize_withdraw_request(
        e: Env,
        campaign_id: CampaignId,
        caller: Address,
        request_id: RequestId,
    ) -> Result<bool, CrowdfundError> {
        caller.require_auth();
        check_initialized(&e)?;

        disbursement::finalize(&e, campaign_id, &caller, request_id)
    }

    // View functions

    /// Campaign ids in creation order
    pub fn list_campaigns(e: Env) -> Vec<CampaignId> {
        factory::campaign_ids(&e)
    }

    pub fn get_summary(e: Env, campaign_id: CampaignId) -> Result<CampaignSummary, CrowdfundError> {
        campaign::summary(&e, campaign_id)
    }

    pub fn get_state(e: Env, campaign_id: CampaignId) -> Result<CampaignState, CrowdfundError> {
        let config = campaign::get_config(&e, campaign_id)?;
        let totals = campaign::get_totals(&e, campaign_id);
        Ok(campaign::current_state(&e, &config, &totals))
    }

    pub fn get_campaign(e: Env, campaign_id: CampaignId) -> Result<CampaignConfig, CrowdfundError> {
        campaign::get_config(&e, campaign_id)
    }

    pub fn get_recurrence(e: Env, campaign_id: CampaignId) -> Result<Recurrence, CrowdfundError> {
        Ok(campaign::get_config(&e, campaign_id)?.recurrence)
    }

    pub fn get_next_disbursement_time(
        e: Env,
        campaign_id: CampaignId,
    ) -> Result<Option<u64>, CrowdfundError> {
        let config = campaign::get_config(&e, campaign_id)?;
        let totals = campaign::get_totals(&e, campaign_id);
        Ok(campaign::next_disbursement_time(&config, &totals))
    }

    pub fn balance_of(
        e: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, CrowdfundError> {
        campaign::get_config(&e, campaign_id)?;
        Ok(ledger::balance_of(&e, campaign_id, &contributor))
    }

    pub fn get_escrow_balance(e: Env, campaign_id: CampaignId) -> Result<i128, CrowdfundError> {
        campaign::get_config(&e, campaign_id)?;
        let totals = campaign::get_totals(&e, campaign_id);
        Ok(campaign::escrow_balance(&totals))
    }

    pub fn num_withdraw_requests(e: Env, campaign_id: CampaignId) -> Result<u32, CrowdfundError> {
        campaign::get_config(&e, campaign_id)?;
        Ok(requests::request_count(&e, campaign_id))
    }

    pub fn get_withdraw_request(
        e: Env,
        campaign_id: CampaignId,
        request_id: RequestId,
    ) -> Result<WithdrawRequest, CrowdfundError> {
        campaign::get_config(&e, campaign_id)?;
        requests::get_request(&e, campaign_id, request_id)
    }

    pub fn has_voted(
        e: Env,
        campaign_id: CampaignId,
        request_id: RequestId,
        voter: Address,
    ) -> Result<bool, CrowdfundError> {
        campaign::get_config(&e, campaign_id)?;
        requests::get_request(&e, campaign_id, request_id)?;
        Ok(voting::has_voted(&e, campaign_id, request_id, &voter))
    }
}
