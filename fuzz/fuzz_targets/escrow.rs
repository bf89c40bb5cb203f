#![no_main]

use arbitrary::Arbitrary;
use escrow::{types::Vote, EscrowContract, EscrowContractClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};

/// Actions modelling every escrow entry point.
///
/// Values are bounded to realistic ranges; invalid actions (a `None` vote,
/// a premature claim) are expected to be rejected, not to trap.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { amount: u32 },
    VoteOwner { choice: u8 },
    VoteParticipant { choice: u8 },
    ClaimOwner,
    ClaimParticipant,
    ClaimOutsider,
    AdvanceTime { delta: u32 },
}

fn choice_from(byte: u8) -> Vote {
    match byte % 4 {
        0 => Vote::None,
        1 => Vote::Refund,
        2 => Vote::Split,
        _ => Vote::PayFull,
    }
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let participant = Address::generate(&env);
    let outsider = Address::generate(&env);

    let pool_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    soroban_sdk::token::StellarAssetClient::new(&env, &pool_token.address())
        .mint(&outsider, &1_000_000_000i128);

    let contract_id = env.register(EscrowContract, ());
    let client = EscrowContractClient::new(&env, &contract_id);

    if client
        .try_initialize(
            &owner,
            &participant,
            &pool_token.address(),
            &0i128,
            &5u32,
            &10u32,
            &10i128,
        )
        .is_err()
    {
        return;
    }

    let mut was_resolved = false;
    let mut last_received = 0i128;
    let mut last_owner_claimed = 0i128;
    let mut last_participant_claimed = 0i128;

    for action in actions {
        match action {
            FuzzAction::Deposit { amount } => {
                let _ = client.try_deposit(&outsider, &i128::from(amount).max(1));
            }
            FuzzAction::VoteOwner { choice } => {
                let _ = client.try_vote(&owner, &choice_from(choice));
            }
            FuzzAction::VoteParticipant { choice } => {
                let _ = client.try_vote(&participant, &choice_from(choice));
            }
            FuzzAction::ClaimOwner => {
                let _ = client.try_claim(&owner);
            }
            FuzzAction::ClaimParticipant => {
                let _ = client.try_claim(&participant);
            }
            FuzzAction::ClaimOutsider => {
                let _ = client.try_claim(&outsider);
            }
            FuzzAction::AdvanceTime { delta } => {
                let ts = env.ledger().timestamp().saturating_add(u64::from(delta));
                env.ledger().set_timestamp(ts);
            }
        }

        // ── Post-action invariant checks ──
        let resolved = client.is_resolved();
        assert!(
            resolved || !was_resolved,
            "INVARIANT VIOLATION: resolution reverted"
        );
        was_resolved = resolved;

        let received = client.get_total_received();
        assert!(
            received >= last_received,
            "INVARIANT VIOLATION: total received decreased: {} -> {}",
            last_received,
            received
        );
        last_received = received;

        let owner_rec = client.get_balance(&owner);
        let participant_rec = client.get_balance(&participant);
        assert!(
            owner_rec.claimed >= last_owner_claimed,
            "INVARIANT VIOLATION: owner claimed decreased"
        );
        assert!(
            participant_rec.claimed >= last_participant_claimed,
            "INVARIANT VIOLATION: participant claimed decreased"
        );
        last_owner_claimed = owner_rec.claimed;
        last_participant_claimed = participant_rec.claimed;
    }
});
