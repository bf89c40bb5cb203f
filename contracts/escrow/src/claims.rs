//! Resolved-path claims: incremental payout of recorded entitlements.

use soroban_sdk::{Address, Env};

use crate::errors::EscrowError;
use crate::{events, ledger};

/// Pay `caller` the unclaimed remainder of its entitlement.
///
/// `claimed` is persisted before the token transfer, so a re-entrant call
/// observes nothing left to claim; a failed transfer fails the whole
/// invocation and the increment is discarded with it.
pub fn claim_resolved(env: &Env, caller: Address) -> Result<i128, EscrowError> {
    let config = crate::config(env)?;

    let mut rec = ledger::record(env, &caller);
    let claimable = rec.total - rec.claimed;
    if claimable <= 0 {
        return Err(EscrowError::NoClaimableAmount);
    }

    // One reserve stays behind so the other party's claim remains payable.
    let held = ledger::held_balance(env, &config);
    let needed = claimable
        .checked_add(config.reserve)
        .ok_or(EscrowError::InsufficientContractBalance)?;
    if held < needed {
        return Err(EscrowError::InsufficientContractBalance);
    }

    rec.claimed += claimable;
    ledger::set_record(env, &caller, &rec);

    ledger::pay_out(env, &config, &caller, claimable)?;

    events::publish_funds_claimed(env, caller, claimable, rec.claimed);
    Ok(claimable)
}
