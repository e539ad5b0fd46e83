//! Property tests for the fee split and for token conservation.
//!
//! [`split_fee`] is pure, so it runs under `proptest!`. The conservation
//! properties need an `Env`, which proptest cannot shrink across cases; those
//! iterate over a fixed case table instead, with a fresh fixture per case.

extern crate std;

use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Vec};

use crate::fees::{rates_from_array, RATE_TOTAL, SLOT_RESERVE};
use crate::test_setup::{Fixture, UNIT};
use crate::{split_fee, RATE_SLOTS};

/// Seven rates summing to 100, built from six sorted cut points.
fn rates_strategy() -> impl Strategy<Value = [u32; RATE_SLOTS]> {
    prop::array::uniform6(0u32..=RATE_TOTAL).prop_map(|mut cuts| {
        cuts.sort_unstable();
        let mut rates = [0u32; RATE_SLOTS];
        let mut last = 0u32;
        for (slot, cut) in cuts.iter().enumerate() {
            rates[slot] = cut - last;
            last = *cut;
        }
        rates[RATE_SLOTS - 1] = RATE_TOTAL - last;
        rates
    })
}

proptest! {
    #[test]
    fn prop_parts_sum_to_charge(
        charge in 0i128..=1_000_000_000_000_000_000_000_000i128,
        rates in rates_strategy(),
    ) {
        let parts = split_fee(charge, &rates);
        prop_assert_eq!(parts.iter().sum::<i128>(), charge);
    }

    #[test]
    fn prop_parts_are_non_negative(
        charge in 0i128..=1_000_000_000i128,
        rates in rates_strategy(),
    ) {
        for part in split_fee(charge, &rates) {
            prop_assert!(part >= 0);
        }
    }

    #[test]
    fn prop_each_part_is_floor_share(
        charge in 0i128..=1_000_000_000_000i128,
        rates in rates_strategy(),
    ) {
        let parts = split_fee(charge, &rates);
        for slot in 0..RATE_SLOTS {
            if slot == SLOT_RESERVE {
                continue;
            }
            prop_assert_eq!(parts[slot], charge * rates[slot] as i128 / 100);
        }
    }

    #[test]
    fn prop_dust_below_slot_count(
        charge in 0i128..=1_000_000_000i128,
        rates in rates_strategy(),
    ) {
        let parts = split_fee(charge, &rates);
        let floor = charge * rates[SLOT_RESERVE] as i128 / 100;
        let dust = parts[SLOT_RESERVE] - floor;
        prop_assert!((0..RATE_SLOTS as i128).contains(&dust));
    }

    #[test]
    fn prop_split_monotonic_in_charge(
        charge in 0i128..=1_000_000_000i128,
        extra in 0i128..=1_000_000i128,
        rates in rates_strategy(),
    ) {
        let low = split_fee(charge, &rates);
        let high = split_fee(charge + extra, &rates);
        for slot in 0..RATE_SLOTS {
            if slot != SLOT_RESERVE {
                prop_assert!(high[slot] >= low[slot]);
            }
        }
    }
}

// ── Conservation over live contracts ────────────────────────────────

const CONSERVATION_CASES: &[(i128, [u32; RATE_SLOTS], u32)] = &[
    (UNIT, [0, 60, 10, 15, 5, 5, 5], 0),
    (7, [0, 60, 10, 15, 5, 5, 5], 0),
    (333, [20, 40, 0, 20, 10, 5, 5], 1),
    (2_000 * UNIT, [0, 30, 20, 42, 3, 4, 1], 2),
    (99, [0, 0, 0, 100, 0, 0, 0], 3),
    (1, [14, 14, 14, 14, 14, 15, 15], 4),
];

/// Whatever a call charges ends up either at the router or on one of the
/// distributor's books, and the books match its token balance.
#[test]
fn prop_charges_are_conserved() {
    for (idx, &(charge, rates, category)) in CONSERVATION_CASES.iter().enumerate() {
        let f = Fixture::new();
        f.distributor.update_call_charge(&f.admin, &charge);
        f.distributor.set_withdraw_window(&f.admin, &0);
        f.distributor.set_minimum_hold_for_staker(&f.admin, &1);
        f.distributor.set_minimum_hold_for_board(&f.admin, &(3 * UNIT));
        f.distributor
            .set_rate(&f.admin, &category, &rates_from_array(&f.env, &rates));

        let stakers = [
            f.funded_account(3 * UNIT),
            f.funded_account(2 * UNIT),
            f.funded_account(UNIT + 1),
        ];
        for staker in stakers.iter() {
            let amount = f.token.balance(staker);
            f.distributor.stake_slib(staker, &amount);
        }

        let owner = Address::generate(&f.env);
        let referrer = Address::generate(&f.env);
        let soulliber = if category == 0 {
            f.individual_soulliber(&referrer)
        } else {
            f.profile_soulliber(&owner, category)
        };
        let caller = f.soullibee(3 * charge);
        for _ in 0..3 {
            f.distributor.route_a_call(&caller, &soulliber);
        }
        f.distributor.release_fees(&category);

        let mut owed = f.distributor.get_unclaimed_fee(&category)
            + f.distributor.get_reserve()
            + f.distributor.get_reward(&owner)
            + f.distributor.get_reward(&soulliber)
            + f.distributor.get_referral_reward(&referrer);
        for staker in stakers.iter() {
            owed += f.distributor.stakes(staker) + f.distributor.get_reward(staker);
        }

        assert_eq!(
            f.token.balance(&f.distributor.address),
            owed,
            "case {idx}: books must match holdings"
        );
        assert_eq!(
            owed - (6 * UNIT + 1) + f.token.balance(&f.router),
            3 * charge,
            "case {idx}: charges must be fully accounted for"
        );
        assert_eq!(
            f.distributor.get_gross_generated_fee(&category),
            3 * charge,
            "case {idx}"
        );
    }
}

/// `set_rate` accepts a vector iff it has seven slots summing to 100.
#[test]
fn prop_rate_validation() {
    let cases: &[(&[u32], bool)] = &[
        (&[0, 60, 10, 15, 5, 5, 5], true),
        (&[100, 0, 0, 0, 0, 0, 0], true),
        (&[0, 0, 0, 0, 0, 0, 0], false),
        (&[0, 60, 10, 15, 5, 5, 6], false),
        (&[0, 60, 10, 15, 5, 10], false),
        (&[0, 60, 10, 15, 5, 5, 5, 0], false),
        (&[u32::MAX, 1, 0, 0, 0, 0, 100], false),
    ];
    for (idx, &(raw, accepted)) in cases.iter().enumerate() {
        let f = Fixture::new();
        let mut rates = Vec::new(&f.env);
        for rate in raw {
            rates.push_back(*rate);
        }
        let result = f.distributor.try_set_rate(&f.admin, &1, &rates);
        assert_eq!(result.is_ok(), accepted, "case {idx}");
        if accepted {
            assert_eq!(f.distributor.get_rate(&1), rates, "case {idx}");
        }
    }
}
