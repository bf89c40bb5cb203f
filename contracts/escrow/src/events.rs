//! Events published by the escrow contract.

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::{Disposition, Vote};

// ── Internal helper ───────────────────────────────────────────────────────────

fn emit<T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(env: &Env, topic: &str, data: T) {
    #[allow(deprecated)]
    env.events().publish(
        (symbol_short!("ESCROW"), soroban_sdk::Symbol::new(env, topic)),
        data,
    );
}

// ── Event structs ─────────────────────────────────────────────────────────────

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub participant: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCastEvent {
    pub voter: Address,
    pub choice: Vote,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsensusReachedEvent {
    pub outcome: Disposition,
    pub participant_total: i128,
    pub owner_total: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsClaimedEvent {
    pub claimant: Address,
    pub amount: i128,
    pub total_claimed: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsReceivedEvent {
    pub from: Address,
    pub amount: i128,
    pub total_received: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FallbackClaimedEvent {
    pub claimant: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Declared for indexers; no current operation changes the goodwill amount.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoodwillUpdatedEvent {
    pub old_amount: i128,
    pub new_amount: i128,
    pub timestamp: u64,
}

// ── Publishers ────────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, participant: Address) {
    emit(
        env,
        "Init",
        InitializedEvent {
            owner,
            participant,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_vote_cast(env: &Env, voter: Address, choice: Vote) {
    emit(
        env,
        "VoteCast",
        VoteCastEvent {
            voter,
            choice,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_consensus_reached(
    env: &Env,
    outcome: Disposition,
    participant_total: i128,
    owner_total: i128,
) {
    emit(
        env,
        "Consensus",
        ConsensusReachedEvent {
            outcome,
            participant_total,
            owner_total,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_funds_claimed(env: &Env, claimant: Address, amount: i128, total_claimed: i128) {
    emit(
        env,
        "Claimed",
        FundsClaimedEvent {
            claimant,
            amount,
            total_claimed,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_funds_received(env: &Env, from: Address, amount: i128, total_received: i128) {
    emit(
        env,
        "Received",
        FundsReceivedEvent {
            from,
            amount,
            total_received,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_fallback_claimed(env: &Env, claimant: Address, amount: i128) {
    emit(
        env,
        "FbClaimed",
        FallbackClaimedEvent {
            claimant,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_goodwill_updated(env: &Env, old_amount: i128, new_amount: i128) {
    emit(
        env,
        "Goodwill",
        GoodwillUpdatedEvent {
            old_amount,
            new_amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
