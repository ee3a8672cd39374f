use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    CampaignIds,
    Campaign(CampaignId),
    Totals(CampaignId),
    Contribution(CampaignId, Address),
    RequestCount(CampaignId),
    Request(CampaignId, RequestId),
    Voted(CampaignId, RequestId, Address),
}

// Storage keys for temporary data
#[derive(Clone)]
#[contracttype]
pub enum TemporaryKey {
    Disbursing(CampaignId, RequestId),
}

pub type CampaignId = u64;
pub type RequestId = u32;

/// Campaign status. The discriminants are part of the external interface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum CampaignState {
    Fundraising = 0,
    Expired = 1,
    Successful = 2,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum VotingMode {
    PerCapita = 0,
    WeightedByContribution = 1,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PeriodicPolicy {
    pub interval_seconds: u64,
    pub recipient: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Recurrence {
    OneShot,
    Periodic(PeriodicPolicy),
}

/// Caller-supplied campaign parameters, validated by the factory.
#[derive(Clone, Debug)]
#[contracttype]
pub struct CampaignParams {
    pub minimum_contribution: i128,
    pub deadline: u64,
    pub target_contribution: i128,
    pub vote_threshold: u32,           // Percentage, 0..=100
    pub default_approve_if_no_vote: bool,
    pub voting_mode: VotingMode,
}

/// Immutable campaign configuration, written once by the factory.
#[derive(Clone, Debug)]
#[contracttype]
pub struct CampaignConfig {
    pub id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub minimum_contribution: i128,
    pub deadline: u64,
    pub target_contribution: i128,
    pub vote_threshold: u32,
    pub default_approve_if_no_vote: bool,
    pub voting_mode: VotingMode,
    pub recurrence: Recurrence,
    pub created_at: u64,
}

/// Mutable ledger totals of a campaign.
#[derive(Clone, Debug, Default)]
#[contracttype]
pub struct LedgerTotals {
    pub raised_amount: i128,           // Monotonic non-decreasing
    pub contributor_count: u32,
    pub disbursed_amount: i128,
    pub last_disbursement_at: u64,     // 0 until the first disbursement
}

#[derive(Clone, Debug)]
#[contracttype]
pub struct WithdrawRequest {
    pub id: RequestId,
    pub description: String,
    pub requested_amount: i128,
    pub recipient: Address,
    pub vote_deadline: u64,
    pub votes_for: i128,               // Head count or contributed weight, per voting mode
    pub voter_count: u32,
    pub finalized: bool,
    pub approved: bool,
}

/// Read-only snapshot returned by `get_summary`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignSummary {
    pub creator: Address,
    pub minimum_contribution: i128,
    pub deadline: u64,
    pub target_contribution: i128,
    pub raised_amount: i128,
    pub contributor_count: u32,
    pub state: CampaignState,
    pub vote_threshold: u32,
    pub default_approve_if_no_vote: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    InvalidMinimumContribution = 10,
    DeadlineInPast = 11,
    TargetNotAboveMinimum = 12,
    InvalidVoteThreshold = 13,
    InsufficientContribution = 14,
    InvalidAmount = 15,
    RequestExceedsEscrow = 16,
    InvalidInterval = 17,

    NotCreator = 20,
    NotContributor = 21,

    VotingClosed = 30,
    AlreadyVoted = 31,
    AlreadyFinalized = 32,
    DisbursementInProgress = 33,
    CampaignExpired = 34,

    InsufficientFunds = 40,

    CampaignNotFound = 50,
    RequestNotFound = 51,

    ArithmeticOverflow = 60,
    LedgerInvariantViolated = 61,
}

/// Taxonomy class of a `CrowdfundError`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Lifecycle,
    Validation,
    Authorization,
    State,
    Resource,
    NotFound,
    Fatal,
}

impl CrowdfundError {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            1..=9 => ErrorKind::Lifecycle,
            10..=19 => ErrorKind::Validation,
            20..=29 => ErrorKind::Authorization,
            30..=39 => ErrorKind::State,
            40..=49 => ErrorKind::Resource,
            50..=59 => ErrorKind::NotFound,
            _ => ErrorKind::Fatal,
        }
    }
}

// Constants
pub const MAX_VOTE_THRESHOLD: u32 = 100;
pub const FIRST_CAMPAIGN_ID: CampaignId = 1;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
pub const TTL_TEMPORARY: u32 = 17280; // 1 day
