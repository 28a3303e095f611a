use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Unknown campaign id.
    NotFound = 3,
    /// Caller is not the campaign creator.
    Unauthorized = 4,
    AlreadyEnded = 5,
    /// Withdrawal attempted before the campaign was closed.
    StillLive = 6,
    NothingToWithdraw = 7,
    /// A campaign with the same creator, title and description exists.
    Duplicate = 8,
    TransferFailed = 9,
    InvalidDeadline = 10,
    InvalidAmount = 11,
    CampaignClosed = 12,
    CampaignExpired = 13,
    ArithmeticOverflow = 14,
}
