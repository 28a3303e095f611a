use soroban_sdk::{Address, BytesN, Env};

use crate::error::LedgerError;
use crate::events::{self, DonationReceivedEvent};
use crate::registry::{read_campaign, write_campaign};
use crate::storage_types::DataKey;
use crate::utils::{extend_instance, extend_persistent, is_past, read_config, transfer};

pub fn donate_to_campaign(
    env: &Env,
    donor: Address,
    campaign_id: BytesN<32>,
    amount: i128,
) -> Result<(), LedgerError> {
    donor.require_auth();
    let config = read_config(env)?;

    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }

    let mut campaign = read_campaign(env, &campaign_id)?;
    if !campaign.is_live {
        return Err(LedgerError::CampaignClosed);
    }
    if config.reject_expired_donations && is_past(env, campaign.deadline) {
        return Err(LedgerError::CampaignExpired);
    }

    let donation_key = DataKey::Donation(donor.clone(), campaign_id.clone());
    let donated = user_campaign_donations(env, &donor, &campaign_id)
        .checked_add(amount)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    campaign.balance = campaign
        .balance
        .checked_add(amount)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    // Funds arrive before any bookkeeping is written.
    transfer(
        env,
        &config.token,
        &donor,
        &env.current_contract_address(),
        amount,
    )?;

    env.storage().persistent().set(&donation_key, &donated);
    extend_persistent(env, &donation_key);
    write_campaign(env, &campaign);
    extend_instance(env);

    events::emit_donation_received(
        env,
        DonationReceivedEvent {
            campaign_id,
            donor,
            amount,
            campaign_balance: campaign.balance,
        },
    );

    Ok(())
}

pub fn user_campaign_donations(
    env: &Env,
    donor: &Address,
    campaign_id: &BytesN<32>,
) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Donation(donor.clone(), campaign_id.clone()))
        .unwrap_or(0)
}
