//! Vote recording and consensus resolution.
//!
//! Either party may re-cast its vote any number of times while the escrow
//! is unresolved. The moment both latest votes are non-`None` and equal,
//! the matched disposition is converted into final entitlements within the
//! same invocation, once and irrevocably. No funds move at resolution.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::errors::EscrowError;
use crate::types::{Disposition, EscrowConfig, Vote};
use crate::{events, ledger};

// ── Storage keys ──────────────────────────────────────────────────────────────

const RESOLVED: Symbol = symbol_short!("RESOLVED");
const OUTCOME: Symbol = symbol_short!("OUTCOME");
const VOTE: Symbol = symbol_short!("VOTE");

fn vote_key(party: &Address) -> (Symbol, Address) {
    (VOTE, party.clone())
}

// ── Resolution state ──────────────────────────────────────────────────────────

pub fn is_resolved(env: &Env) -> bool {
    env.storage().instance().get(&RESOLVED).unwrap_or(false)
}

/// The recorded outcome, present iff resolved.
pub fn disposition(env: &Env) -> Option<Disposition> {
    env.storage().instance().get(&OUTCOME)
}

/// `party`'s latest vote (`Vote::None` if never cast).
pub fn vote_of(env: &Env, party: &Address) -> Vote {
    env.storage()
        .instance()
        .get(&vote_key(party))
        .unwrap_or(Vote::None)
}

// ── Voting ────────────────────────────────────────────────────────────────────

/// Record `caller`'s vote, resolving the escrow if both parties now agree.
pub fn cast_vote(env: &Env, caller: Address, choice: Vote) -> Result<(), EscrowError> {
    let config = crate::config(env)?;

    if caller != config.owner && caller != config.participant {
        return Err(EscrowError::NotAuthorized);
    }
    if choice == Vote::None {
        return Err(EscrowError::InvalidVote);
    }
    if is_resolved(env) {
        return Err(EscrowError::AlreadyResolved);
    }

    env.storage().instance().set(&vote_key(&caller), &choice);
    events::publish_vote_cast(env, caller, choice);

    let owner_vote = vote_of(env, &config.owner);
    let participant_vote = vote_of(env, &config.participant);
    if owner_vote != Vote::None && owner_vote == participant_vote {
        // Two equal votes and an unresolved escrow cannot be observed
        // together: the matched disposition becomes final right here.
        let agreed = owner_vote
            .as_disposition()
            .ok_or(EscrowError::InvalidVote)?;
        resolve(env, &config, agreed)?;
    }

    Ok(())
}

/// Convert the agreed disposition into final entitlements. Runs exactly
/// once, guarded by the resolution check in [`cast_vote`].
fn resolve(
    env: &Env,
    config: &EscrowConfig,
    agreed: Disposition,
) -> Result<(), EscrowError> {
    let held = ledger::held_balance(env, config);

    // One reserve per party stays behind so both eventual claims can still
    // pay their transaction fee.
    let held_back = config
        .reserve
        .checked_mul(2)
        .ok_or(EscrowError::BalanceUnderflow)?;
    let available = held
        .checked_sub(held_back)
        .ok_or(EscrowError::BalanceUnderflow)?;
    if available < 0 {
        return Err(EscrowError::BalanceUnderflow);
    }

    let (participant_total, owner_total) = entitlements(&agreed, available);

    ledger::set_total(env, &config.participant, participant_total);
    ledger::set_total(env, &config.owner, owner_total);

    env.storage().instance().set(&RESOLVED, &true);
    env.storage().instance().set(&OUTCOME, &agreed);

    events::publish_consensus_reached(env, agreed, participant_total, owner_total);
    Ok(())
}

/// Split `available` according to `agreed`, returning
/// `(participant_total, owner_total)`. The odd unit on a `Split` always
/// goes to the participant. `available` must be non-negative.
pub fn entitlements(agreed: &Disposition, available: i128) -> (i128, i128) {
    match agreed {
        Disposition::Refund => (available, 0),
        Disposition::Split => {
            let half = available / 2;
            (available - half, half)
        }
        Disposition::PayFull => (0, available),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use proptest::prelude::*;

    use super::entitlements;
    use crate::types::Disposition;

    #[test]
    fn split_even_amount_divides_equally() {
        assert_eq!(entitlements(&Disposition::Split, 80), (40, 40));
    }

    #[test]
    fn split_odd_amount_favors_participant() {
        assert_eq!(entitlements(&Disposition::Split, 81), (41, 40));
    }

    #[test]
    fn refund_sends_everything_to_participant() {
        assert_eq!(entitlements(&Disposition::Refund, 75), (75, 0));
    }

    #[test]
    fn pay_full_sends_everything_to_owner() {
        assert_eq!(entitlements(&Disposition::PayFull, 75), (0, 75));
    }

    #[test]
    fn zero_available_yields_zero_entitlements() {
        for d in [Disposition::Refund, Disposition::Split, Disposition::PayFull] {
            assert_eq!(entitlements(&d, 0), (0, 0));
        }
    }

    proptest! {
        #[test]
        fn split_accounts_for_every_unit(available in 0i128..=i128::MAX / 4) {
            let (participant, owner) = entitlements(&Disposition::Split, available);
            prop_assert_eq!(participant + owner, available);
            prop_assert!(participant == owner || participant == owner + 1);
        }

        #[test]
        fn one_sided_dispositions_pay_in_full(available in 0i128..=i128::MAX / 4) {
            prop_assert_eq!(entitlements(&Disposition::Refund, available), (available, 0));
            prop_assert_eq!(entitlements(&Disposition::PayFull, available), (0, available));
        }
    }
}
