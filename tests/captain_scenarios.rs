//! End-to-end scenarios for The Captain Is Dead, driven through the
//! orchestrator with scripted providers.

use coop_sim::captain::registry::{CrisisCard, CrisisEffect, ShipSystem, SystemStatus};
use coop_sim::{
    CaptainGame, CaptainIntent, CoopGame, Deck, Orchestrator, RunOutcome, ScriptedProvider,
    SimConfig,
};

fn repair_jump_core() -> CaptainIntent {
    CaptainIntent::Repair {
        system: "Jump Core".into(),
    }
}

/// A crisis deck whose cards cannot end the game.
fn harmless_crises() -> Deck<CrisisCard> {
    Deck::new(vec![
        CrisisCard::new(
            "Power Surge",
            "Conduits overload across the ship",
            CrisisEffect::ActionRestriction,
            1,
        ),
        CrisisCard::new(
            "Power Surge",
            "Conduits overload across the ship",
            CrisisEffect::ActionRestriction,
            1,
        ),
    ])
}

#[test]
fn five_jump_core_repairs_win_the_game() {
    let mut game = CaptainGame::new(&SimConfig::default());
    game.state.crisis_deck = harmless_crises();

    // Player 1 (the engineer) repairs four times; player 2 stands down;
    // the fifth repair on the engineer's next turn finishes the core.
    let script = vec![
        repair_jump_core(),
        repair_jump_core(),
        repair_jump_core(),
        repair_jump_core(),
        CaptainIntent::EndTurn,
        repair_jump_core(),
    ];
    let mut orch = Orchestrator::new(game, ScriptedProvider::new(script), 10);
    let summary = orch.run();

    match summary.outcome {
        RunOutcome::Finished(terminal) => {
            assert!(terminal.victory, "expected victory, got: {}", terminal.reason);
            assert!(terminal.reason.contains("jump core"));
        }
        RunOutcome::TurnLimit => panic!("game should have ended"),
    }
    assert_eq!(summary.turns_played, 3);
    let game = orch.into_game();
    assert_eq!(game.state.jump_core_progress, 5);
    assert_eq!(
        game.state.system_status(ShipSystem::JumpCore),
        SystemStatus::Online
    );
}

#[test]
fn unknown_destination_still_burns_a_point() {
    let mut game = CaptainGame::new(&SimConfig::default());
    game.state.crisis_deck = harmless_crises();
    let home = game.state.crew[0].location;

    let script = vec![
        CaptainIntent::Move {
            destination: "Cargo Bay".into(),
        },
        CaptainIntent::EndTurn,
    ];
    let mut orch = Orchestrator::new(game, ScriptedProvider::new(script), 10);
    assert!(orch.play_turn().is_none());

    let game = orch.into_game();
    // The failed move left the crew member in place but still cost a
    // point (4 -> 3), and the turn's Power Surge crisis took one more.
    assert_eq!(game.state.crew[0].location, home);
    assert_eq!(game.state.crew[0].action_points, 2);
}

#[test]
fn life_support_offline_loses_the_game() {
    let mut game = CaptainGame::new(&SimConfig::default());
    game.state.crisis_deck = harmless_crises();
    game.state
        .set_system(ShipSystem::LifeSupport, SystemStatus::Offline);

    let script: Vec<CaptainIntent> = vec![];
    let mut orch = Orchestrator::new(game, ScriptedProvider::new(script), 10);
    let summary = orch.run();
    match summary.outcome {
        RunOutcome::Finished(terminal) => {
            assert!(!terminal.victory);
            assert!(terminal.reason.contains("Life Support"));
        }
        RunOutcome::TurnLimit => panic!("defeat should have been detected"),
    }
}

#[test]
fn exhausted_script_just_ends_turns_until_the_limit() {
    let mut game = CaptainGame::new(&SimConfig::default());
    game.state.crisis_deck = harmless_crises();

    let script: Vec<CaptainIntent> = vec![];
    let mut orch = Orchestrator::new(game, ScriptedProvider::new(script), 4);
    let summary = orch.run();
    assert_eq!(summary.outcome, RunOutcome::TurnLimit);
    assert_eq!(summary.turns_played, 4);

    // Two crisis cards cycled through the discard for four turns.
    let game = orch.into_game();
    assert_eq!(game.state.crisis_deck.total_len(), 2);
    assert!(game.state.last_crisis.is_some());
}

#[test]
fn crisis_deck_synthesizes_when_completely_empty() {
    let mut game = CaptainGame::new(&SimConfig::default());
    game.state.crisis_deck = Deck::new(vec![]);

    game.hazard_phase();
    assert_eq!(
        game.state.last_crisis.as_ref().map(|card| card.name.as_str()),
        Some("Emergency Alert")
    );
    assert_eq!(game.state.crisis_deck.total_len(), 1);
}

#[test]
fn same_seed_same_run() {
    let run = |seed: u64| {
        let mut game = CaptainGame::new(&SimConfig::default().with_seed(seed));
        game.state.crisis_deck = harmless_crises();
        let script = vec![
            CaptainIntent::UseSystem {
                system: "Teleporter".into(),
            },
            CaptainIntent::EndTurn,
        ];
        let mut orch = Orchestrator::new(game, ScriptedProvider::new(script), 1);
        orch.run();
        orch.into_game().state.crew[0].location
    };
    assert_eq!(run(9), run(9));
}
