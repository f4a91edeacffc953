// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

use rand::{Rng, SeedableRng, rngs::StdRng};

use pipbot_bot::{
    Action, ActionKind, Agent, LegalActions, PolicyConfig, RaiseBounds, RoundContext,
    RoundSnapshot, Strategy, Street,
    eval::{Deck, Rank, parse_cards},
};

fn random_snapshot(rng: &mut StdRng) -> RoundSnapshot {
    let mut deck = Deck::new_and_shuffled(rng);
    let hole = [deck.deal().unwrap(), deck.deal().unwrap()];
    let board_len = [0, 3, 4, 5][rng.random_range(0..4)];
    let board = (0..board_len).map(|_| deck.deal().unwrap()).collect::<Vec<_>>();

    let active = rng.random_range(0..2);
    let committed = rng.random_range(0..=150);
    let pips = [rng.random_range(0..=200), rng.random_range(0..=200)];
    let stacks = [400 - committed - pips[0], 400 - committed - pips[1]];

    let mut snapshot = RoundSnapshot::new(active, hole, board, stacks, pips);
    if rng.random_bool(0.3) {
        snapshot = snapshot.with_bounty(Rank::from_index(rng.random_range(0..13)).unwrap());
    }

    snapshot
}

fn assert_legal(action: Action, legal: &LegalActions, bounds: RaiseBounds) {
    assert!(legal.contains(action.kind()), "{action:?}");
    if let Action::Raise(amount) = action {
        assert!(bounds.is_valid());
        assert!((bounds.min..=bounds.max).contains(&amount), "{amount} {bounds:?}");
    }
}

#[test]
fn decisions_are_legal() {
    let mut rng = StdRng::seed_from_u64(101);
    let mut agent = Agent::new(PolicyConfig::default(), StdRng::seed_from_u64(7));

    for _ in 0..300 {
        let snapshot = random_snapshot(&mut rng);
        let legal = snapshot.legal_actions();
        let bounds = snapshot.raise_bounds();

        agent.on_round_start();
        let action = agent.decide(&snapshot, &legal, bounds);
        assert_legal(action, &legal, bounds);
    }
}

#[test]
fn decisions_are_legal_for_any_action_set() {
    let mut rng = StdRng::seed_from_u64(202);
    let kinds = [ActionKind::Fold, ActionKind::Check, ActionKind::Call, ActionKind::Raise];

    for config in [PolicyConfig::default(), PolicyConfig::tight(), PolicyConfig::loose()] {
        let mut agent = Agent::new(config, StdRng::seed_from_u64(3));

        for _ in 0..200 {
            let snapshot = random_snapshot(&mut rng);

            let mut legal = kinds
                .iter()
                .copied()
                .filter(|_| rng.random_bool(0.5))
                .collect::<LegalActions>();
            if !legal.contains(ActionKind::Fold) && !legal.contains(ActionKind::Check) {
                legal.insert(if rng.random_bool(0.5) {
                    ActionKind::Fold
                } else {
                    ActionKind::Check
                });
            }

            // Sometimes min is above max.
            let min = rng.random_range(0..=400);
            let max = rng.random_range(0..=400);
            let bounds = RaiseBounds::new(min, max);

            agent.on_round_start();
            let action = agent.decide(&snapshot, &legal, bounds);
            assert_legal(action, &legal, bounds);
        }
    }
}

#[test]
fn round_start_resets_context() {
    let mut agent = Agent::new(PolicyConfig::default(), StdRng::seed_from_u64(5));
    agent.on_round_start();

    // Small blind opens aces.
    let hole = parse_cards("AsAd").unwrap();
    let s = RoundSnapshot::new(0, [hole[0], hole[1]], vec![], [399, 398], [1, 2]);
    let action = agent.decide(&s, &s.legal_actions(), s.raise_bounds());
    assert!(matches!(action, Action::Raise(_)));
    assert!(agent.context().is_preflop_aggressor());

    // Flop continuation bet with the nuts.
    let board = parse_cards("Ah Kc 7d").unwrap();
    let s = RoundSnapshot::new(0, [hole[0], hole[1]], board, [394, 394], [0, 0]);
    let action = agent.decide(&s, &s.legal_actions(), s.raise_bounds());
    assert!(matches!(action, Action::Raise(_)));
    assert_eq!(agent.context().street(), Street::Flop);
    assert_eq!(agent.context().raises(), 2);

    agent.on_round_start();
    assert_eq!(agent.context(), &RoundContext::default());
}

#[test]
fn seeded_agents_agree() {
    let mut rng = StdRng::seed_from_u64(303);
    let snapshots = (0..100).map(|_| random_snapshot(&mut rng)).collect::<Vec<_>>();

    let play = |seed| {
        let mut agent = Agent::new(PolicyConfig::default(), StdRng::seed_from_u64(seed));
        snapshots
            .iter()
            .map(|s| {
                agent.on_round_start();
                agent.decide(s, &s.legal_actions(), s.raise_bounds())
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(play(9), play(9));
}
