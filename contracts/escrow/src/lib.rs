//! # Goodwill Escrow Contract
//!
//! Two-party trustless escrow over a single token pool. An owner and a
//! participant receive deposits over time; release is governed either by
//! mutual agreement (a consensus vote over the `Refund`, `Split` and
//! `PayFull` dispositions) or, failing agreement, by a time-delayed
//! unilateral claim.
//!
//! ## Lifecycle
//! ```text
//! initialize ──► deposits / votes ──► consensus ──► incremental claims
//!                      │
//!                      └─ no agreement ──► time-gated one-shot claim
//! ```
//! Deposits are provisionally credited to the participant until a consensus
//! outcome overrides them. A fixed fee reserve is excluded from every
//! payout so that each party's eventual claim stays payable.
#![no_std]
#![allow(clippy::too_many_arguments)]

pub mod claims;
pub mod consensus;
pub mod errors;
pub mod events;
pub mod fallback;
pub mod ledger;
pub mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Env, Symbol};

use errors::EscrowError;
use types::{BalanceRecord, Disposition, EscrowConfig, Vote};

// ── Storage keys ──────────────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const RECEIVED: Symbol = symbol_short!("RECEIVED");

/// Claim delays are configured in whole days.
pub const DAY_IN_SECONDS: u64 = 86_400;

// ── Config access ─────────────────────────────────────────────────────────────

pub(crate) fn config(env: &Env) -> Result<EscrowConfig, EscrowError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(EscrowError::NotInitialized)
}

fn total_received(env: &Env) -> i128 {
    env.storage().instance().get(&RECEIVED).unwrap_or(0)
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContract {
    /// One-time setup fixing both parties, the escrow token, the claim
    /// delays and the fee reserve. The creation timestamp anchors both
    /// unilateral claim schedules.
    pub fn initialize(
        env: Env,
        owner: Address,
        participant: Address,
        token: Address,
        goodwill_amount: i128,
        participant_delay_days: u32,
        owner_delay_days: u32,
        reserve: i128,
    ) -> Result<(), EscrowError> {
        if env.storage().instance().has(&CONFIG) {
            return Err(EscrowError::AlreadyInitialized);
        }
        owner.require_auth();

        if participant == owner {
            return Err(EscrowError::InvalidParticipant);
        }
        if participant_delay_days >= owner_delay_days {
            return Err(EscrowError::InvalidDelays);
        }
        if reserve <= 0 {
            return Err(EscrowError::ZeroReserve);
        }
        if goodwill_amount < 0 {
            return Err(EscrowError::InvalidAmount);
        }

        let config = EscrowConfig {
            owner: owner.clone(),
            participant: participant.clone(),
            token,
            goodwill_amount,
            participant_delay: u64::from(participant_delay_days) * DAY_IN_SECONDS,
            owner_delay: u64::from(owner_delay_days) * DAY_IN_SECONDS,
            reserve,
            created_at: env.ledger().timestamp(),
        };
        env.storage().instance().set(&CONFIG, &config);

        events::publish_initialized(&env, owner, participant);
        Ok(())
    }

    /// Record `caller`'s vote. The escrow resolves within this same call
    /// the moment both parties' latest votes are equal.
    pub fn vote(env: Env, caller: Address, choice: Vote) -> Result<(), EscrowError> {
        caller.require_auth();
        consensus::cast_vote(&env, caller, choice)
    }

    /// Pay out to `caller`: the unclaimed remainder of its entitlement once
    /// resolved, or the time-gated unilateral payout while unresolved.
    /// Returns the amount transferred.
    pub fn claim(env: Env, caller: Address) -> Result<i128, EscrowError> {
        caller.require_auth();
        if consensus::is_resolved(&env) {
            claims::claim_resolved(&env, caller)
        } else {
            fallback::claim_unresolved(&env, caller)
        }
    }

    /// Move `amount` of the escrow token from `from` into the pool. Any
    /// sender may deposit at any time; while unresolved the amount is
    /// provisionally credited to the participant's entitlement.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), EscrowError> {
        from.require_auth();
        if amount <= 0 {
            return Err(EscrowError::InvalidAmount);
        }
        let config = config(&env)?;

        token::Client::new(&env, &config.token).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        let received = total_received(&env)
            .checked_add(amount)
            .ok_or(EscrowError::InvalidAmount)?;
        env.storage().instance().set(&RECEIVED, &received);

        if !consensus::is_resolved(&env) {
            ledger::credit_total(&env, &config.participant, amount)?;
        }

        events::publish_funds_received(&env, from, amount, received);
        Ok(())
    }

    // ── Read-only queries ─────────────────────────────────────────────────────

    /// Entitlement record for `party`; a zero record if none exists.
    pub fn get_balance(env: Env, party: Address) -> BalanceRecord {
        ledger::record(&env, &party)
    }

    /// Currently held pool net of one fee reserve, floored at zero.
    pub fn get_available_balance(env: Env) -> Result<i128, EscrowError> {
        let config = config(&env)?;
        let held = ledger::held_balance(&env, &config);
        Ok((held - config.reserve).max(0))
    }

    /// Seconds until the participant's unilateral claim unlocks; 0 once
    /// eligible.
    pub fn time_until_participant_claim(env: Env) -> Result<u64, EscrowError> {
        let config = config(&env)?;
        Ok(fallback::remaining(&env, &config, config.participant_delay))
    }

    /// Seconds until the owner's unilateral claim unlocks; 0 once eligible.
    pub fn time_until_owner_claim(env: Env) -> Result<u64, EscrowError> {
        let config = config(&env)?;
        Ok(fallback::remaining(&env, &config, config.owner_delay))
    }

    /// True once a consensus outcome has been recorded. Never reverts.
    pub fn is_resolved(env: Env) -> bool {
        consensus::is_resolved(&env)
    }

    /// The agreed disposition, present iff resolved.
    pub fn get_disposition(env: Env) -> Option<Disposition> {
        consensus::disposition(&env)
    }

    /// Latest votes as `(owner, participant)`.
    pub fn get_votes(env: Env) -> Result<(Vote, Vote), EscrowError> {
        let config = config(&env)?;
        Ok((
            consensus::vote_of(&env, &config.owner),
            consensus::vote_of(&env, &config.participant),
        ))
    }

    /// Running total of all value ever deposited. Informational; does not
    /// gate payouts.
    pub fn get_total_received(env: Env) -> i128 {
        total_received(&env)
    }

    pub fn get_config(env: Env) -> Result<EscrowConfig, EscrowError> {
        config(&env)
    }
}
