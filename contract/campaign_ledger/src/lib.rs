#![no_std]

mod donation;
mod error;
mod events;
mod lifecycle;
mod registry;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

pub use error::LedgerError;
pub use storage_types::{Campaign, LedgerConfig, CAMPAIGNS_PER_PAGE};

use storage_types::DataKey;
use utils::{extend_instance, read_config};

#[contract]
pub struct CampaignLedger;

#[contractimpl]
impl CampaignLedger {
    /// Initialize the ledger with its admin, the token donations are paid in,
    /// and whether donations past a campaign's deadline are refused.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        reject_expired_donations: bool,
    ) -> Result<(), LedgerError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(LedgerError::AlreadyInitialized);
        }

        admin.require_auth();

        let config = LedgerConfig {
            admin,
            token,
            reject_expired_donations,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::CampaignCount, &0u32);
        extend_instance(&env);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, LedgerError> {
        read_config(&env)
    }

    /// Admin switch for refusing donations to live campaigns past their deadline.
    pub fn set_expiry_policy(env: Env, reject_expired_donations: bool) -> Result<(), LedgerError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();

        config.reject_expired_donations = reject_expired_donations;
        env.storage().instance().set(&DataKey::Config, &config);
        extend_instance(&env);

        events::emit_expiry_policy_updated(
            &env,
            events::ExpiryPolicyUpdatedEvent {
                admin: config.admin,
                reject_expired_donations,
            },
        );

        Ok(())
    }

    /// Register a new campaign owned by `creator` and return its id.
    pub fn start_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        image_url: String,
        deadline: u64,
    ) -> Result<BytesN<32>, LedgerError> {
        registry::start_campaign(&env, creator, title, description, image_url, deadline)
    }

    pub fn get_campaign_count(env: Env) -> u32 {
        registry::campaign_count(&env)
    }

    /// Recompute the id `start_campaign` assigns for this triple.
    pub fn generate_campaign_id(
        env: Env,
        creator: Address,
        title: String,
        description: String,
    ) -> BytesN<32> {
        registry::generate_campaign_id(&env, &creator, &title, &description)
    }

    pub fn get_campaign(env: Env, campaign_id: BytesN<32>) -> Result<Campaign, LedgerError> {
        registry::read_campaign(&env, &campaign_id)
    }

    /// Page through campaign ids in creation order, `CAMPAIGNS_PER_PAGE` at a time.
    pub fn get_campaigns_in_batch(env: Env, page: u32) -> Vec<BytesN<32>> {
        registry::campaigns_in_batch(&env, page)
    }

    pub fn donate_to_campaign(
        env: Env,
        donor: Address,
        campaign_id: BytesN<32>,
        amount: i128,
    ) -> Result<(), LedgerError> {
        donation::donate_to_campaign(&env, donor, campaign_id, amount)
    }

    pub fn user_campaign_donations(env: Env, donor: Address, campaign_id: BytesN<32>) -> i128 {
        donation::user_campaign_donations(&env, &donor, &campaign_id)
    }

    /// Close a live campaign. Creator only.
    pub fn end_campaign(
        env: Env,
        caller: Address,
        campaign_id: BytesN<32>,
    ) -> Result<(), LedgerError> {
        lifecycle::end_campaign(&env, caller, campaign_id)
    }

    /// Pay a closed campaign's balance to its creator.
    pub fn withdraw_campaign_funds(
        env: Env,
        caller: Address,
        campaign_id: BytesN<32>,
    ) -> Result<(), LedgerError> {
        lifecycle::withdraw_campaign_funds(&env, caller, campaign_id)
    }
}
