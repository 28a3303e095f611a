use soroban_sdk::{log, Address, BytesN, Env};

use crate::error::LedgerError;
use crate::events::{self, CampaignEndedEvent, FundsWithdrawnEvent};
use crate::registry::{read_campaign, write_campaign};
use crate::storage_types::Campaign;
use crate::utils::{extend_instance, read_config, transfer};

fn creator_campaign(
    env: &Env,
    caller: &Address,
    campaign_id: &BytesN<32>,
) -> Result<Campaign, LedgerError> {
    caller.require_auth();
    let campaign = read_campaign(env, campaign_id)?;
    if campaign.creator != *caller {
        return Err(LedgerError::Unauthorized);
    }
    Ok(campaign)
}

pub fn end_campaign(
    env: &Env,
    caller: Address,
    campaign_id: BytesN<32>,
) -> Result<(), LedgerError> {
    let mut campaign = creator_campaign(env, &caller, &campaign_id)?;
    if !campaign.is_live {
        return Err(LedgerError::AlreadyEnded);
    }

    campaign.is_live = false;
    write_campaign(env, &campaign);
    extend_instance(env);
    log!(env, "campaign ended", campaign_id, campaign.balance);

    events::emit_campaign_ended(
        env,
        CampaignEndedEvent {
            campaign_id,
            creator: caller,
        },
    );

    Ok(())
}

/// Pay the whole campaign balance out to its creator.
///
/// The balance is zeroed and stored before the token transfer runs, so a
/// re-entrant call observes nothing to withdraw. If the transfer fails the
/// original record is written back before the error is returned.
pub fn withdraw_campaign_funds(
    env: &Env,
    caller: Address,
    campaign_id: BytesN<32>,
) -> Result<(), LedgerError> {
    let config = read_config(env)?;
    let mut campaign = creator_campaign(env, &caller, &campaign_id)?;
    if campaign.is_live {
        return Err(LedgerError::StillLive);
    }

    let amount = campaign.balance;
    if amount == 0 {
        return Err(LedgerError::NothingToWithdraw);
    }

    campaign.balance = 0;
    write_campaign(env, &campaign);

    if let Err(err) = transfer(
        env,
        &config.token,
        &env.current_contract_address(),
        &campaign.creator,
        amount,
    ) {
        campaign.balance = amount;
        write_campaign(env, &campaign);
        log!(env, "withdrawal reverted", campaign_id, amount);
        return Err(err);
    }

    extend_instance(env);

    events::emit_funds_withdrawn(
        env,
        FundsWithdrawnEvent {
            campaign_id,
            creator: caller,
            amount,
        },
    );

    Ok(())
}
