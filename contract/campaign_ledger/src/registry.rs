use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env, String, Vec};

use crate::error::LedgerError;
use crate::events::{self, CampaignStartedEvent};
use crate::storage_types::{Campaign, DataKey, CAMPAIGNS_PER_PAGE};
use crate::utils::{extend_instance, extend_persistent, read_config};

/// Derive the campaign id from its creator, title and description.
///
/// Each field is XDR-encoded before hashing, so the encoding carries the
/// type tag and length of every field and two different triples never
/// concatenate to the same preimage.
pub fn generate_campaign_id(
    env: &Env,
    creator: &Address,
    title: &String,
    description: &String,
) -> BytesN<32> {
    let mut preimage = creator.clone().to_xdr(env);
    preimage.append(&title.clone().to_xdr(env));
    preimage.append(&description.clone().to_xdr(env));
    env.crypto().sha256(&preimage).to_bytes()
}

pub fn start_campaign(
    env: &Env,
    creator: Address,
    title: String,
    description: String,
    image_url: String,
    deadline: u64,
) -> Result<BytesN<32>, LedgerError> {
    creator.require_auth();
    read_config(env)?;

    if deadline <= env.ledger().timestamp() {
        return Err(LedgerError::InvalidDeadline);
    }

    let id = generate_campaign_id(env, &creator, &title, &description);
    let campaign_key = DataKey::Campaign(id.clone());
    if env.storage().persistent().has(&campaign_key) {
        return Err(LedgerError::Duplicate);
    }

    let index = campaign_count(env);
    let next_count = index
        .checked_add(1)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    let campaign = Campaign {
        id: id.clone(),
        creator: creator.clone(),
        title,
        description,
        image_url,
        deadline,
        balance: 0,
        is_live: true,
    };

    let index_key = DataKey::CampaignIndex(index);
    env.storage().persistent().set(&campaign_key, &campaign);
    env.storage().persistent().set(&index_key, &id);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &next_count);

    extend_persistent(env, &campaign_key);
    extend_persistent(env, &index_key);
    extend_instance(env);

    events::emit_campaign_started(
        env,
        CampaignStartedEvent {
            campaign_id: id.clone(),
            creator,
            deadline,
        },
    );

    Ok(id)
}

pub fn campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn read_campaign(env: &Env, id: &BytesN<32>) -> Result<Campaign, LedgerError> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(id.clone()))
        .ok_or(LedgerError::NotFound)
}

pub fn write_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id.clone());
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

/// Ids of page `page` in creation order; empty once past the end of the registry.
pub fn campaigns_in_batch(env: &Env, page: u32) -> Vec<BytesN<32>> {
    let count = campaign_count(env);
    let start = page.saturating_mul(CAMPAIGNS_PER_PAGE);
    let end = start.saturating_add(CAMPAIGNS_PER_PAGE).min(count);

    let mut ids = Vec::new(env);
    for index in start..end {
        if let Some(id) = env
            .storage()
            .persistent()
            .get::<DataKey, BytesN<32>>(&DataKey::CampaignIndex(index))
        {
            ids.push_back(id);
        }
    }
    ids
}
