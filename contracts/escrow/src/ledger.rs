//! Per-party balance ledger and access to the pooled funds.
//!
//! Entitlements are [`BalanceRecord`]s in persistent storage; the funds
//! themselves sit in the escrow token contract. This module only does the
//! accounting and the final outgoing transfer of a claim.

use soroban_sdk::{symbol_short, token, Address, Env, Symbol};

use crate::errors::EscrowError;
use crate::types::{BalanceRecord, EscrowConfig};

// ── Storage keys ──────────────────────────────────────────────────────────────

const BALANCE: Symbol = symbol_short!("BALANCE");

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

fn balance_key(party: &Address) -> (Symbol, Address) {
    (BALANCE, party.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Record access ─────────────────────────────────────────────────────────────

/// Return `party`'s record (zeroed if the party was never credited).
pub fn record(env: &Env, party: &Address) -> BalanceRecord {
    let key = balance_key(party);
    let rec: Option<BalanceRecord> = env.storage().persistent().get(&key);
    if rec.is_some() {
        extend_ttl(env, &key);
    }
    rec.unwrap_or_else(BalanceRecord::zero)
}

pub fn set_record(env: &Env, party: &Address, rec: &BalanceRecord) {
    let key = balance_key(party);
    env.storage().persistent().set(&key, rec);
    extend_ttl(env, &key);
}

/// Add `amount` to `party`'s entitlement without touching `claimed`.
pub fn credit_total(env: &Env, party: &Address, amount: i128) -> Result<(), EscrowError> {
    let mut rec = record(env, party);
    rec.total = rec
        .total
        .checked_add(amount)
        .ok_or(EscrowError::InvalidAmount)?;
    set_record(env, party, &rec);
    Ok(())
}

/// Overwrite `party`'s entitlement; `claimed` keeps its prior value.
pub fn set_total(env: &Env, party: &Address, total: i128) {
    let mut rec = record(env, party);
    rec.total = total;
    set_record(env, party, &rec);
}

// ── Pooled funds ──────────────────────────────────────────────────────────────

/// Fresh read of the pool currently held by the contract. Deposits and
/// prior claims can change it between invocations, so it is never cached.
pub fn held_balance(env: &Env, config: &EscrowConfig) -> i128 {
    token::Client::new(env, &config.token).balance(&env.current_contract_address())
}

/// Transfer `amount` from the pool to `to`. Must be the last action of a
/// claim: all accounting is already persisted, and a failure here fails
/// the whole invocation.
pub fn pay_out(
    env: &Env,
    config: &EscrowConfig,
    to: &Address,
    amount: i128,
) -> Result<(), EscrowError> {
    let client = token::Client::new(env, &config.token);
    if client
        .try_transfer(&env.current_contract_address(), to, &amount)
        .is_err()
    {
        return Err(EscrowError::TransferFailed);
    }
    Ok(())
}
