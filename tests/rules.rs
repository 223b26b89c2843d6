use std::fs;
use std::path::PathBuf;

use snake_touch::{
    Bounds, Context, Direction, GameConfig, GameState, HighScoreStore, Position, Settings, TickEngine, TickOutcome,
};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("snake_touch_rules_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir.join("high_score.json")
}

fn setup(name: &str, chance: f64) -> (TickEngine, Context) {
    let config = GameConfig { seed: Some(42), special_food_chance: chance, ..GameConfig::default() };
    let engine = TickEngine::new(config).unwrap();
    let ctx = Context::silent(Settings::default(), HighScoreStore::new(scratch(name)));
    (engine, ctx)
}

fn board() -> Bounds {
    Bounds::new(800, 600, 20, 20)
}

#[test]
fn eating_food_from_the_start_cell() {
    let (mut engine, mut ctx) = setup("start_cell", 0.0);
    let mut state = GameState::new(Position::new(100, 100), Direction::Right);
    state.food = Some(Position::new(120, 100));

    let out = engine.advance(&mut state, 0.2, &board(), &mut ctx);

    assert_eq!(out, TickOutcome::AteFood);
    assert_eq!(Vec::from(state.snake.clone()), vec![Position::new(120, 100), Position::new(100, 100)]);
    assert_eq!(state.score, 1);
}

#[test]
fn moving_into_a_wall_ends_the_run() {
    let (mut engine, mut ctx) = setup("wall", 0.0);
    let mut state = GameState::new(Position::new(100, 100), Direction::Down);
    state.food = Some(Position::new(400, 400));
    state.snake = [Position::new(100, 20)].into_iter().collect();

    let out = engine.advance(&mut state, 0.2, &board(), &mut ctx);

    assert_eq!(out, TickOutcome::Collided { new_record: false });
    assert!(state.game_over);
    assert_eq!(Vec::from(state.snake.clone()), vec![Position::new(100, 20)]);
}

#[test]
fn length_and_score_follow_eating() {
    let (mut engine, mut ctx) = setup("invariants", 0.5);
    let mut state = engine.new_game(&board());
    let mut steer = [Direction::Up, Direction::Right, Direction::Down, Direction::Left].into_iter().cycle();

    for tick in 0..400 {
        if state.game_over {
            break;
        }
        // Walk a 10x10 square so the run lasts.
        if tick % 10 == 0 {
            state.direction = steer.next().unwrap();
        }
        let len = state.len();
        let score = state.score;
        let multiplier = state.score_multiplier;

        match engine.advance(&mut state, 0.2, &board(), &mut ctx) {
            TickOutcome::Moved => {
                assert_eq!(state.len(), len);
                assert_eq!(state.score, score);
            }
            TickOutcome::AteFood => {
                assert_eq!(state.len(), len + 1);
                assert_eq!(state.score, score + multiplier);
            }
            TickOutcome::AteSpecialFood => {
                assert_eq!(state.len(), len + 1);
                assert_eq!(state.score, score + 5 * multiplier);
                assert_eq!(state.score_multiplier, 2);
                assert!(state.invincible);
                assert_eq!(state.special_food, None);
            }
            TickOutcome::Collided { .. } => assert_eq!(state.len(), len),
            TickOutcome::Idle => unreachable!("running state never idles"),
        }
        assert!(state.score >= score);
        assert!(state.score_multiplier == 1 || state.score_multiplier == 2);
        if let (Some(food), Some(special)) = (state.food, state.special_food) {
            assert_ne!(food, special);
        }
    }
}

#[test]
fn self_collision_ends_the_run() {
    let (mut engine, mut ctx) = setup("self", 0.0);
    let mut state = GameState::new(Position::new(100, 100), Direction::Left);
    state.food = Some(Position::new(400, 400));
    state.snake = [(100, 100), (100, 120), (80, 120), (80, 100), (80, 80)]
        .into_iter()
        .map(|(x, y)| Position::new(x, y))
        .collect();

    assert!(matches!(engine.advance(&mut state, 0.2, &board(), &mut ctx), TickOutcome::Collided { .. }));
    assert!(state.game_over);
    assert_eq!(state.len(), 5);
}

#[test]
fn ticks_after_game_over_do_nothing() {
    let (mut engine, mut ctx) = setup("after", 0.0);
    let mut state = GameState::new(Position::new(20, 20), Direction::Left);
    engine.advance(&mut state, 0.2, &board(), &mut ctx);
    let frozen = state.clone();
    assert_eq!(engine.advance(&mut state, 0.2, &board(), &mut ctx), TickOutcome::Idle);
    assert_eq!(state, frozen);
}

#[test]
fn new_food_never_covers_live_special_food() {
    // 3x2 cells; after eating only three cells are left, one holding special food.
    let bounds = Bounds::new(100, 80, 20, 20);
    let special = Position::new(60, 40);

    for seed in 0..40 {
        let config = GameConfig { seed: Some(seed), special_food_chance: 1.0, ..GameConfig::default() };
        let mut engine = TickEngine::new(config).unwrap();
        let mut ctx = Context::silent(Settings::default(), HighScoreStore::new(scratch("crowded")));
        let mut state = GameState::new(Position::new(20, 20), Direction::Right);
        state.food = Some(Position::new(40, 20));
        state.special_food = Some(special);
        state.special_food_timer = 5.0;

        assert_eq!(engine.advance(&mut state, 0.2, &bounds, &mut ctx), TickOutcome::AteFood);
        let food = state.food.unwrap();
        assert_ne!(food, special, "seed {seed}");
        assert!(!state.snake.contains(&food));
        assert_eq!(state.special_food, Some(special));
    }
}
