//! Integration tests for the game loop driven through the public API

use blockfall::core::{EngineConfig, GameState, LineScoreRule, Phase};
use blockfall::input::{translate, Command};
use blockfall::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent};

const CYCLE: [GameAction; 7] = [
    GameAction::MoveLeft,
    GameAction::Rotate,
    GameAction::MoveLeft,
    GameAction::SoftDrop,
    GameAction::MoveRight,
    GameAction::Rotate,
    GameAction::HardDrop,
];

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn press(state: &mut GameState, code: KeyCode) -> bool {
    match translate(key(code)) {
        Some(Command::Action(action)) => state.apply_action(action),
        _ => false,
    }
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(EngineConfig::default(), 12345);
    assert_eq!(state.phase(), Phase::Ready);
    assert!(state.active().is_none());
    assert!(!state.tick(5000));

    state.start();
    assert_eq!(state.phase(), Phase::Running);
    assert!(state.active().is_some());
    assert!(!state.is_game_over());
    assert!(!state.is_paused());
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::init(EngineConfig::default(), 777);
    let mut b = GameState::init(EngineConfig::default(), 777);

    for step in 0..300 {
        let action = CYCLE[step % CYCLE.len()];
        assert_eq!(a.apply_action(action), b.apply_action(action));
        a.tick(16);
        b.tick(16);
        assert_eq!(a.snapshot(), b.snapshot(), "diverged at step {}", step);
    }
}

#[test]
fn test_active_piece_never_overlaps_stack() {
    let mut state = GameState::init(EngineConfig::default(), 4242);

    for step in 0..2000 {
        state.apply_action(CYCLE[(step * 3) % CYCLE.len()]);
        state.tick(50);

        if state.is_game_over() {
            state.restart();
            continue;
        }
        let active = state.active().expect("running game has an active piece");
        assert!(!active.collides(state.board()), "overlap at step {}", step);
    }
}

#[test]
fn test_keys_drive_the_game() {
    let mut state = GameState::init(EngineConfig::default(), 12345);
    let x = state.active().unwrap().x;

    assert!(press(&mut state, KeyCode::Left));
    assert_eq!(state.active().unwrap().x, x - 1);
    assert!(press(&mut state, KeyCode::Char('d')));
    assert_eq!(state.active().unwrap().x, x);

    assert!(press(&mut state, KeyCode::Char('p')));
    assert!(state.is_paused());
    assert!(!press(&mut state, KeyCode::Left));
    assert!(press(&mut state, KeyCode::Esc));
    assert!(!state.is_paused());

    assert!(press(&mut state, KeyCode::Char(' ')));
    assert_eq!(state.board().filled_count(), 4);
    assert_eq!(translate(key(KeyCode::Char('q'))), Some(Command::Quit));
}

#[test]
fn test_stacking_in_the_middle_ends_the_game() {
    let mut state = GameState::init(EngineConfig::default(), 9);

    let mut drops = 0;
    while !state.is_game_over() && drops < 200 {
        state.apply_action(GameAction::HardDrop);
        drops += 1;
    }
    assert!(state.is_game_over());

    // Everything except restart is inert.
    let snap = state.snapshot();
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Pause,
        GameAction::Resume,
    ] {
        assert!(!state.apply_action(action));
    }
    assert!(!state.tick(60_000));
    assert_eq!(state.snapshot(), snap);
    assert!(snap.game_over);

    state.apply_action(GameAction::Restart);
    assert!(!state.is_game_over());
    assert_eq!(state.board().filled_count(), 0);
    assert_eq!(state.score(), 0);
    assert_eq!(state.episode_id(), 1);
}

#[test]
fn test_lock_events_account_for_every_line() {
    let mut state = GameState::init(EngineConfig::default(), 31337);
    let mut lines = 0;
    let mut points = 0;

    for step in 0..3000 {
        state.apply_action(CYCLE[step % CYCLE.len()]);
        let mut events = vec![state.take_last_event()];
        state.tick(100);
        events.push(state.take_last_event());

        for event in events.into_iter().flatten() {
            assert_eq!(event.cleared_rows.len() as u32, event.lines_cleared);
            lines += event.lines_cleared;
            points += event.points;
        }
        if state.is_game_over() {
            break;
        }
    }

    assert_eq!(state.lines(), lines);
    assert_eq!(state.score(), points);
    assert_eq!(state.level(), lines / 10 + 1);
}

#[test]
fn test_gravity_alone_lands_a_piece() {
    let mut state = GameState::init(EngineConfig::default(), 5);

    // Twenty rows at 1000ms each is more than enough to land and lock.
    for _ in 0..25 {
        state.tick(1000);
    }
    assert_eq!(state.board().filled_count(), 4);
    assert!(state.piece_id() >= 2);
}

#[test]
fn test_json_config_changes_rules() {
    let config = EngineConfig::from_json_str(
        r#"{ "width": 8, "height": 12, "line_score": "square", "base_drop_ms": 500, "min_drop_ms": 50 }"#,
    )
    .unwrap();
    assert_eq!(config.line_score, LineScoreRule::Square);

    let state = GameState::try_new(config, 1).unwrap();
    assert_eq!(state.board().width(), 8);
    assert_eq!(state.board().height(), 12);
    assert_eq!(state.drop_interval_ms(), 500);
}
