use game_core::{
    CombatEvent, CombatSession, CombatantKind, CombatantSpec, ItemSpec, SessionConfig,
    SessionOutcome,
};

fn single_encounter(player_health: u32, enemy_health: u32, enemy_attack: u32) -> SessionConfig {
    SessionConfig {
        player: CombatantSpec::new("😎", player_health, 20),
        enemies: vec![CombatantSpec::new("foe", enemy_health, enemy_attack)],
        items: Vec::new(),
    }
}

/// Attacks in order as (attacker kind, damage, target health after).
fn attacks(events: &[CombatEvent]) -> Vec<(CombatantKind, u32, u32)> {
    events
        .iter()
        .filter_map(|event| match event {
            CombatEvent::Attacked {
                attacker_kind,
                damage,
                target_health,
                ..
            } => Some((*attacker_kind, *damage, *target_health)),
            _ => None,
        })
        .collect()
}

#[test]
fn weak_enemy_falls_after_two_player_attacks() {
    let mut session = CombatSession::from_config(&single_encounter(100, 30, 10)).unwrap();
    let mut events: Vec<CombatEvent> = Vec::new();

    let outcome = session.run(&mut events);

    assert_eq!(outcome, SessionOutcome::Victory);
    assert_eq!(
        attacks(&events),
        vec![
            (CombatantKind::Player, 20, 10),
            (CombatantKind::Enemy, 10, 90),
            (CombatantKind::Player, 20, 0),
        ]
    );
    assert_eq!(session.player().health(), 90);
    assert_eq!(session.rounds(), 2);
    assert!(events.contains(&CombatEvent::EncounterWon {
        enemy: "foe".to_string(),
        player_health: 90,
    }));
}

#[test]
fn strong_enemy_outlasts_full_health_player_round_by_round() {
    let mut session = CombatSession::from_config(&single_encounter(100, 100, 25)).unwrap();
    let mut events: Vec<CombatEvent> = Vec::new();

    let outcome = session.run(&mut events);

    // Player deals 20/40/60/80 cumulative, enemy answers 25/50/75/100.
    assert_eq!(outcome, SessionOutcome::Defeat);
    assert_eq!(
        attacks(&events),
        vec![
            (CombatantKind::Player, 20, 80),
            (CombatantKind::Enemy, 25, 75),
            (CombatantKind::Player, 20, 60),
            (CombatantKind::Enemy, 25, 50),
            (CombatantKind::Player, 20, 40),
            (CombatantKind::Enemy, 25, 25),
            (CombatantKind::Player, 20, 20),
            (CombatantKind::Enemy, 25, 0),
        ]
    );
    assert_eq!(session.enemies()[0].health(), 20);
    assert!(events.contains(&CombatEvent::Defeated {
        name: "😎".to_string(),
        kind: CombatantKind::Player,
    }));
}

#[test]
fn wounded_player_falls_after_first_exchange() {
    let mut session = CombatSession::from_config(&single_encounter(20, 100, 25)).unwrap();
    let mut events: Vec<CombatEvent> = Vec::new();

    assert_eq!(session.run(&mut events), SessionOutcome::Defeat);
    assert_eq!(
        attacks(&events),
        vec![(CombatantKind::Player, 20, 80), (CombatantKind::Enemy, 25, 0)]
    );
    assert_eq!(session.rounds(), 1);
}

#[test]
fn first_strike_wins_an_even_fight() {
    // Both sides would kill the other with one hit; the player swings first.
    let config = SessionConfig {
        player: CombatantSpec::new("😎", 20, 20),
        enemies: vec![CombatantSpec::new("mirror", 20, 20)],
        items: Vec::new(),
    };
    let mut session = CombatSession::from_config(&config).unwrap();
    let mut events: Vec<CombatEvent> = Vec::new();

    assert_eq!(session.run(&mut events), SessionOutcome::Victory);
    assert_eq!(attacks(&events), vec![(CombatantKind::Player, 20, 0)]);
    assert_eq!(session.player().health(), 20);
}

#[test]
fn standard_session_ends_in_defeat_against_third_enemy() {
    let mut session = CombatSession::new("😎");
    let mut events: Vec<CombatEvent> = Vec::new();

    let outcome = session.run(&mut events);

    assert_eq!(outcome, SessionOutcome::Defeat);
    assert_eq!(session.outcome(), Some(SessionOutcome::Defeat));
    assert_eq!(session.player().health(), 0);
    assert_eq!(session.rounds(), 8);
    assert_eq!(session.enemies_defeated(), 2);

    let remaining: Vec<_> = session.enemies().iter().map(|e| e.health()).collect();
    assert_eq!(remaining, vec![0, 0, 40]);

    let won: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            CombatEvent::EncounterWon { player_health, .. } => Some(*player_health),
            _ => None,
        })
        .collect();
    assert_eq!(won, vec![90, 60]);

    let started = events
        .iter()
        .filter(|event| matches!(event, CombatEvent::EncounterStarted { .. }))
        .count();
    assert_eq!(started, 3);

    let enemy_attacks = attacks(&events)
        .iter()
        .filter(|(kind, _, _)| *kind == CombatantKind::Enemy)
        .count();
    assert_eq!(enemy_attacks, 6);

    assert_eq!(
        events.last(),
        Some(&CombatEvent::SessionEnded {
            player: "😎".to_string(),
            outcome: SessionOutcome::Defeat,
        })
    );
}

#[test]
fn session_stops_at_first_lethal_encounter() {
    let config = SessionConfig {
        player: CombatantSpec::new("😎", 10, 20),
        enemies: vec![
            CombatantSpec::new("brute", 100, 50),
            CombatantSpec::new("never-reached", 1, 1),
        ],
        items: Vec::new(),
    };
    let mut session = CombatSession::from_config(&config).unwrap();
    let mut events: Vec<CombatEvent> = Vec::new();

    assert_eq!(session.run(&mut events), SessionOutcome::Defeat);
    assert!(!events.iter().any(|event| matches!(
        event,
        CombatEvent::EncounterStarted { enemy, .. } if enemy == "never-reached"
    )));
    assert_eq!(session.enemies()[1].health(), 1);
}

#[test]
fn healing_after_an_encounter_is_applied() {
    let mut session = CombatSession::from_config(&SessionConfig {
        enemies: vec![CombatantSpec::new("🤬", 30, 10)],
        ..SessionConfig::standard("😎")
    })
    .unwrap();
    let mut events: Vec<CombatEvent> = Vec::new();

    session.run(&mut events);
    assert_eq!(session.player().health(), 90);

    session.use_item("Major Restoration", &mut events);
    assert_eq!(session.player().health(), 100);
    assert!(session.inventory().contains("Major Restoration"));
    assert!(session.inventory().contains("Minor Restoration"));
}

#[test]
fn the_same_potion_heals_on_every_use() {
    let config = SessionConfig {
        player: CombatantSpec::new("😎", 100, 20),
        enemies: vec![CombatantSpec::new("🤬", 30, 10), CombatantSpec::new("😤", 50, 15)],
        items: vec![ItemSpec::healing_potion("Minor Restoration", 20)],
    };
    let mut session = CombatSession::from_config(&config).unwrap();
    let mut events: Vec<CombatEvent> = Vec::new();

    assert_eq!(session.run(&mut events), SessionOutcome::Victory);
    assert_eq!(session.player().health(), 60);

    session.use_item("Minor Restoration", &mut events);
    session.use_item("Minor Restoration", &mut events);

    assert_eq!(session.player().health(), 100);
    assert_eq!(session.inventory().len(), 1);
    let healed = events
        .iter()
        .filter(|event| matches!(event, CombatEvent::ItemUsed(_)))
        .count();
    assert_eq!(healed, 2);
}
