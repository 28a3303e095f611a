use soroban_sdk::{contracttype, Address, BytesN, String};

// Instance storage keys live next to the contract instance; the rest are persistent.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    CampaignCount,
    Campaign(BytesN<32>),
    CampaignIndex(u32),       // registry position -> id
    Donation(Address, BytesN<32>), // (Donor, CampaignID) -> cumulative amount
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub admin: Address,
    pub token: Address,
    pub reject_expired_donations: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: BytesN<32>,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub deadline: u64,
    pub balance: i128,
    pub is_live: bool,
}

pub const CAMPAIGNS_PER_PAGE: u32 = 5;

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const TTL_INSTANCE: u32 = DAY_IN_LEDGERS * 30; // 30 days
pub const TTL_PERSISTENT: u32 = DAY_IN_LEDGERS * 90; // 90 days
pub const TTL_THRESHOLD: u32 = DAY_IN_LEDGERS * 7;
