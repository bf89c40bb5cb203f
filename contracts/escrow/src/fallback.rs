//! Time-gated unilateral claims, the safety valve when consensus is never
//! reached.
//!
//! While the escrow is unresolved, each party has an independent unlock
//! schedule measured from creation. Whoever crosses their delay first may
//! take the entire pool net of one reserve, exactly once. The shorter
//! participant delay is intentional: held funds default to the participant
//! unless agreement overrides it.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::errors::EscrowError;
use crate::types::{BalanceRecord, EscrowConfig};
use crate::{events, ledger};

const CLAIMED: Symbol = symbol_short!("FB_CLMD");

fn claimed_key(party: &Address) -> (Symbol, Address) {
    (CLAIMED, party.clone())
}

/// True if `party` has already taken its one unilateral payout.
pub fn has_claimed(env: &Env, party: &Address) -> bool {
    env.storage()
        .instance()
        .get(&claimed_key(party))
        .unwrap_or(false)
}

/// Seconds until a claim gated by `delay` unlocks; 0 once eligible.
pub fn remaining(env: &Env, config: &EscrowConfig, delay: u64) -> u64 {
    config
        .created_at
        .saturating_add(delay)
        .saturating_sub(env.ledger().timestamp())
}

/// One-shot unilateral claim of the whole pool net of one reserve.
///
/// The claim becomes eligible at exactly `delay` seconds after creation.
/// The payout is recorded as both entitled and claimed, and the one-shot
/// latch is set, before the transfer goes out.
pub fn claim_unresolved(env: &Env, caller: Address) -> Result<i128, EscrowError> {
    let config = crate::config(env)?;

    let delay = if caller == config.participant {
        config.participant_delay
    } else if caller == config.owner {
        config.owner_delay
    } else {
        return Err(EscrowError::NotAuthorized);
    };

    if remaining(env, &config, delay) > 0 {
        return Err(EscrowError::TooEarlyToClaim);
    }
    if has_claimed(env, &caller) {
        return Err(EscrowError::AlreadyClaimed);
    }

    let held = ledger::held_balance(env, &config);
    let payout = held
        .checked_sub(config.reserve)
        .ok_or(EscrowError::InsufficientContractBalance)?;
    if payout < 0 {
        return Err(EscrowError::InsufficientContractBalance);
    }

    env.storage().instance().set(&claimed_key(&caller), &true);
    ledger::set_record(
        env,
        &caller,
        &BalanceRecord {
            total: payout,
            claimed: payout,
        },
    );

    ledger::pay_out(env, &config, &caller, payout)?;

    events::publish_fallback_claimed(env, caller, payout);
    Ok(payout)
}
