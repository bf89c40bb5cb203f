use soroban_sdk::{contracttype, Address};

/// A party's recorded vote. `None` is the unset sentinel; it can never be
/// cast through the public entry point.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Vote {
    None,
    Refund,
    Split,
    PayFull,
}

impl Vote {
    /// The disposition this vote selects, if it selects one.
    pub fn as_disposition(&self) -> Option<Disposition> {
        match self {
            Vote::None => None,
            Vote::Refund => Some(Disposition::Refund),
            Vote::Split => Some(Disposition::Split),
            Vote::PayFull => Some(Disposition::PayFull),
        }
    }
}

/// The agreed fund-split rule once both parties' latest votes match.
/// Recorded at most once; adding a variant requires updating every
/// consumer's match.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Disposition {
    /// The whole available pool goes to the participant.
    Refund,
    /// Even division; an odd remainder unit goes to the participant.
    Split,
    /// The whole available pool goes to the owner.
    PayFull,
}

/// Per-party entitlement record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BalanceRecord {
    /// Amount the party is owed overall (cumulative, not incremental).
    pub total: i128,
    /// Amount already paid out against `total`. Never decreases.
    pub claimed: i128,
}

impl BalanceRecord {
    pub fn zero() -> Self {
        BalanceRecord {
            total: 0,
            claimed: 0,
        }
    }
}

/// Fixed configuration captured once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    pub owner: Address,
    pub participant: Address,
    /// Token contract that holds and moves the escrowed funds.
    pub token: Address,
    /// Declared goodwill amount. Reserved; no operation changes it.
    pub goodwill_amount: i128,
    /// Seconds after creation before the participant's unilateral claim
    /// unlocks. Strictly shorter than `owner_delay`.
    pub participant_delay: u64,
    /// Seconds after creation before the owner's unilateral claim unlocks.
    pub owner_delay: u64,
    /// Fee reserve excluded from every payout computation.
    pub reserve: i128,
    pub created_at: u64,
}
