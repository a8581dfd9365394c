use proptest::prelude::*;

use florin_events::{codec, BurnEvent, Event, MintEvent, TransferEvent};
use florin_ledger::{replay, LedgerState};
use florin_types::{Amount, EconomyParams, EventId, Timestamp, UserId};

#[derive(Clone, Debug)]
enum Op {
    Mint { to: u64, micros: u64 },
    Transfer { from: u64, to: u64, micros: u64, fee: u64 },
    Burn { from: u64, micros: u64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..6, 1u64..1_000).prop_map(|(to, micros)| Op::Mint { to, micros }),
        (1u64..6, 1u64..6, 1u64..1_000, 0u64..100).prop_map(|(from, to, micros, fee)| {
            Op::Transfer {
                from,
                to,
                micros,
                fee,
            }
        }),
        (1u64..6, 1u64..1_000).prop_map(|(from, micros)| Op::Burn { from, micros }),
    ]
}

/// Drive a random operation sequence the way the coordinator would: check
/// the precondition against live state, then apply and record. Returns the
/// final state, the encoded log, and the running mint/burn/fee sums.
fn simulate(ops: &[Op]) -> (LedgerState, Vec<String>, u64, u64, u64) {
    let mut state = LedgerState::new();
    let mut records = Vec::new();
    let (mut mints, mut burns, mut fees) = (0u64, 0u64, 0u64);

    for (i, op) in ops.iter().enumerate() {
        let event = match *op {
            Op::Mint { to, micros } => Event::Mint(MintEvent {
                to: UserId::new(to),
                amount: Amount::from_micros(micros),
                note: "seed".into(),
                time: Timestamp::new(i as u64),
                id: EventId::new(format!("ev{i}")),
            }),
            Op::Transfer {
                from,
                to,
                micros,
                fee,
            } => {
                if from == to
                    || state.balance(UserId::new(from)) < Amount::from_micros(micros + fee)
                {
                    continue;
                }
                Event::Transfer(TransferEvent {
                    from: UserId::new(from),
                    to: UserId::new(to),
                    amount: Amount::from_micros(micros),
                    fee: Amount::from_micros(fee),
                    note: "n".into(),
                    link: "l".into(),
                    time: Timestamp::new(i as u64),
                    id: EventId::new(format!("ev{i}")),
                })
            }
            Op::Burn { from, micros } => {
                if state.balance(UserId::new(from)) < Amount::from_micros(micros) {
                    continue;
                }
                Event::Burn(BurnEvent {
                    from: UserId::new(from),
                    amount: Amount::from_micros(micros),
                    note: "n".into(),
                    link: "l".into(),
                    time: Timestamp::new(i as u64),
                    id: EventId::new(format!("ev{i}")),
                })
            }
        };

        state.apply(&event).expect("precondition was checked");
        match &event {
            Event::Mint(e) => mints += e.amount.micros(),
            Event::Transfer(e) => fees += e.fee.micros(),
            Event::Burn(e) => burns += e.amount.micros(),
        }
        records.push(codec::encode(&event).expect("encodable event"));
    }

    (state, records, mints, burns, fees)
}

/// State with `users` participants holding `per_user_micros` each.
fn uniform_state(users: u64, per_user_micros: u64) -> LedgerState {
    let mut state = LedgerState::new();
    for id in 1..=users {
        state
            .apply(&Event::Mint(MintEvent {
                to: UserId::new(id),
                amount: Amount::from_micros(per_user_micros),
                note: "seed".into(),
                time: Timestamp::new(0),
                id: EventId::new(format!("m{id}")),
            }))
            .expect("mint into fresh state");
    }
    state
}

proptest! {
    /// Supply always equals mints minus burns minus destroyed fees.
    #[test]
    fn conservation_holds(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let (state, _, mints, burns, fees) = simulate(&ops);
        prop_assert_eq!(
            state.total_supply(),
            Amount::from_micros(mints - burns - fees)
        );
    }

    /// The incrementally maintained total agrees with a full scan.
    #[test]
    fn running_total_matches_audit(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let (state, _, _, _, _) = simulate(&ops);
        prop_assert_eq!(state.total_supply(), state.audit_supply());
    }

    /// Replaying the produced log reconstructs the live state, and doing it
    /// twice from empty state yields identical tables.
    #[test]
    fn replay_reconstructs_and_is_deterministic(
        ops in prop::collection::vec(op_strategy(), 0..60)
    ) {
        let (state, records, _, _, _) = simulate(&ops);
        let replayed = replay(&records).expect("log was built from valid events");
        prop_assert_eq!(&replayed, &state);
        prop_assert_eq!(&replay(&records).expect("same log"), &replayed);
    }

    /// The fee rate is exactly the base at or below target and never
    /// decreases as per-user supply grows.
    #[test]
    fn fee_rate_monotone_and_floored(
        users in 1u64..8,
        lo in 0u64..400_000_000,
        delta in 0u64..400_000_000,
    ) {
        let params = EconomyParams::default();
        let sparse = uniform_state(users, lo);
        let dense = uniform_state(users, lo + delta);

        let lo_rate = florin_ledger::policy::current_fee_rate(&sparse, &params);
        let hi_rate = florin_ledger::policy::current_fee_rate(&dense, &params);

        prop_assert!(lo_rate >= params.base_fee_rate);
        prop_assert!(hi_rate >= lo_rate, "fee must not fall as supply grows");
        if lo <= params.target_per_user.micros() {
            prop_assert_eq!(lo_rate, params.base_fee_rate);
        }
    }

    /// The stipend never increases as per-user supply grows and is floored
    /// at the base stipend.
    #[test]
    fn stipend_monotone_and_floored(
        users in 1u64..8,
        lo in 0u64..400_000_000,
        delta in 0u64..400_000_000,
    ) {
        let params = EconomyParams::default();
        let sparse = uniform_state(users, lo);
        let dense = uniform_state(users, lo + delta);

        let lo_stipend = florin_ledger::policy::current_stipend(&sparse, &params);
        let hi_stipend = florin_ledger::policy::current_stipend(&dense, &params);

        prop_assert!(lo_stipend >= params.base_stipend);
        prop_assert!(hi_stipend <= lo_stipend, "stipend must not rise as supply grows");
    }
}
