use soroban_sdk::{contracttype, Address, BytesN, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CampaignStartedEvent {
    pub campaign_id: BytesN<32>,
    pub creator: Address,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct DonationReceivedEvent {
    pub campaign_id: BytesN<32>,
    pub donor: Address,
    pub amount: i128,
    pub campaign_balance: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignEndedEvent {
    pub campaign_id: BytesN<32>,
    pub creator: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct FundsWithdrawnEvent {
    pub campaign_id: BytesN<32>,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct ExpiryPolicyUpdatedEvent {
    pub admin: Address,
    pub reject_expired_donations: bool,
}

pub fn emit_campaign_started(env: &Env, event: CampaignStartedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_started"),), event);
}

pub fn emit_donation_received(env: &Env, event: DonationReceivedEvent) {
    env.events()
        .publish((Symbol::new(env, "donation_received"),), event);
}

pub fn emit_campaign_ended(env: &Env, event: CampaignEndedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_ended"),), event);
}

pub fn emit_funds_withdrawn(env: &Env, event: FundsWithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "funds_withdrawn"),), event);
}

pub fn emit_expiry_policy_updated(env: &Env, event: ExpiryPolicyUpdatedEvent) {
    env.events()
        .publish((Symbol::new(env, "expiry_policy_updated"),), event);
}
