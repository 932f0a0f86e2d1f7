//! End-to-end game scenarios through the `Game` surface.

use std::collections::BTreeMap;

use rust_stratego::board::{Board, Cell, CellView};
use rust_stratego::core::{GameConfig, GameError, MoveOutcome, Phase, PieceId, Side};
use rust_stratego::game::{Game, Tick};
use rust_stratego::pieces::PieceKind;

fn board_with(pieces: &[(PieceKind, Side, u8, u8)]) -> Board {
    let mut board = Board::new();
    for &(kind, side, row, col) in pieces {
        board.place(kind, side, Cell::new(row, col)).unwrap();
    }
    board
}

fn started(board: Board) -> Game {
    let mut game = Game::from_position(GameConfig::default(), board);
    assert!(game.force_start());
    game
}

fn id_at(game: &Game, row: u8, col: u8) -> PieceId {
    game.board().piece_at(Cell::new(row, col)).unwrap().id
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_fresh_game_layout() {
    for seed in 0..25 {
        let game = Game::new(GameConfig::default().with_seed(seed)).unwrap();
        let board = game.board();

        assert_eq!(board.len(), 10);
        for row in 2..=3 {
            for col in 0..6 {
                assert!(board.is_empty(Cell::new(row, col)), "seed {seed}: middle rows must start empty");
            }
        }
        assert!(board.pieces_of(Side::Player).all(|p| p.position.row >= 4));
        assert!(board.pieces_of(Side::Opponent).all(|p| p.position.row <= 1));
    }
}

#[test]
fn test_same_seed_same_deal() {
    let layout = |game: &Game| {
        Cell::all()
            .map(|c| game.board().piece_at(c).map(|p| (p.owner, p.kind)))
            .collect::<Vec<_>>()
    };

    let a = Game::new(GameConfig::default().with_seed(99)).unwrap();
    let b = Game::new(GameConfig::default().with_seed(99)).unwrap();
    assert_eq!(layout(&a), layout(&b));
}

#[test]
fn test_concealed_ids_do_not_reveal_kind() {
    let mut kinds_by_id: BTreeMap<PieceId, Vec<PieceKind>> = BTreeMap::new();
    for seed in 0..50 {
        let game = Game::new(GameConfig::default().with_seed(seed)).unwrap();
        let snapshot = game.board_snapshot();
        for cell in Cell::all() {
            if let CellView::Concealed { id, .. } = snapshot.get(cell) {
                kinds_by_id.entry(*id).or_default().push(game.board().get(*id).unwrap().kind);
            }
        }
    }

    assert_eq!(kinds_by_id.len(), 5);
    for (id, mut kinds) in kinds_by_id {
        kinds.sort();
        kinds.dedup();
        assert!(kinds.len() > 1, "{id} was always {:?}", kinds[0]);
    }
}

#[test]
fn test_setup_transition_happens_once() {
    let mut game = Game::new(GameConfig::default().with_setup_seconds(2)).unwrap();

    assert_eq!(game.tick(), Tick::Remaining(1));
    assert!(game.force_start());
    assert_eq!(game.tick(), Tick::Idle);
    assert!(!game.force_start());
    assert_eq!(game.current_state().phase, Phase::Playing);
    assert_eq!(game.current_state().mover, Side::Player);
    assert_eq!(game.current_state().ply, 0);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_private_attacks_spy() {
    let mut game = started(board_with(&[
        (PieceKind::Private, Side::Player, 4, 2),
        (PieceKind::Spy, Side::Opponent, 3, 2),
        (PieceKind::Flag, Side::Opponent, 0, 0),
    ]));
    let private = id_at(&game, 4, 2);
    let spy = id_at(&game, 3, 2);

    let outcome = game.attempt_move(private, Cell::new(3, 2)).unwrap();

    let MoveOutcome::Combat(result) = outcome else {
        panic!("expected combat, got {outcome:?}");
    };
    assert_eq!(result.attacker, private);
    assert_eq!(result.defender, spy);
    assert!(result.attacker_survived);
    assert!(!result.defender_survived);
    assert_eq!(result.winner, None);

    assert_eq!(game.board().get(private).unwrap().position, Cell::new(3, 2));
    assert!(game.board().get(spy).is_none());
    assert_eq!(game.current_state().mover, Side::Opponent);
}

#[test]
fn test_flag_reaches_back_rank() {
    let mut game = started(board_with(&[
        (PieceKind::Flag, Side::Player, 1, 0),
        (PieceKind::Spy, Side::Opponent, 1, 5),
    ]));
    let flag = id_at(&game, 1, 0);

    let outcome = game.attempt_move(flag, Cell::new(0, 0)).unwrap();

    assert_eq!(outcome, MoveOutcome::GameOver { winner: Side::Player });
    assert_eq!(game.current_state().phase, Phase::GameOver);
    assert_eq!(game.current_state().winner, Some(Side::Player));
}

#[test]
fn test_boxed_in_opponent_passes() {
    let mut game = started(board_with(&[
        (PieceKind::Flag, Side::Opponent, 0, 0),
        (PieceKind::Spy, Side::Opponent, 0, 1),
        (PieceKind::Private, Side::Opponent, 1, 0),
        (PieceKind::OneStar, Side::Opponent, 1, 1),
        (PieceKind::TwoStar, Side::Opponent, 0, 2),
        (PieceKind::Private, Side::Player, 2, 0),
        (PieceKind::OneStar, Side::Player, 2, 1),
        (PieceKind::TwoStar, Side::Player, 1, 2),
        (PieceKind::Spy, Side::Player, 0, 3),
        (PieceKind::Flag, Side::Player, 5, 5),
    ]));
    let flag = id_at(&game, 5, 5);
    game.attempt_move(flag, Cell::new(4, 5)).unwrap();

    let outcome = game.opponent_turn().unwrap();

    assert_eq!(outcome, MoveOutcome::Passed { side: Side::Opponent });
    assert_eq!(game.current_state().phase, Phase::Playing);
    assert_eq!(game.current_state().mover, Side::Player);
}

#[test]
fn test_capturing_flag_wins() {
    let mut game = started(board_with(&[
        (PieceKind::Private, Side::Player, 2, 2),
        (PieceKind::Flag, Side::Opponent, 1, 2),
    ]));
    let private = id_at(&game, 2, 2);

    let outcome = game.attempt_move(private, Cell::new(1, 2)).unwrap();
    assert_eq!(outcome.winner(), Some(Side::Player));
}

#[test]
fn test_failed_attack_reveals_defender() {
    let mut game = started(board_with(&[
        (PieceKind::OneStar, Side::Player, 3, 3),
        (PieceKind::TwoStar, Side::Opponent, 2, 3),
    ]));
    let one_star = id_at(&game, 3, 3);

    let before = game.board_snapshot();
    assert!(matches!(
        before.get(Cell::new(2, 3)),
        CellView::Concealed { .. }
    ));

    game.attempt_move(one_star, Cell::new(2, 3)).unwrap();

    let after = game.board_snapshot();
    assert!(matches!(
        after.get(Cell::new(2, 3)),
        CellView::Visible { kind: PieceKind::TwoStar, .. }
    ));
    assert!(game.board().is_empty(Cell::new(3, 3)));
}

// =============================================================================
// Terminal state
// =============================================================================

#[test]
fn test_game_over_is_frozen() {
    let mut game = started(board_with(&[
        (PieceKind::Flag, Side::Player, 1, 0),
        (PieceKind::Private, Side::Player, 4, 4),
        (PieceKind::Spy, Side::Opponent, 1, 5),
    ]));
    let flag = id_at(&game, 1, 0);
    let private = id_at(&game, 4, 4);
    game.attempt_move(flag, Cell::new(0, 0)).unwrap();

    let state_before = game.current_state().clone();
    let snapshot_before = game.board_snapshot();

    assert_eq!(game.attempt_move(private, Cell::new(3, 4)), Err(GameError::GameAlreadyOver));
    assert_eq!(game.opponent_turn(), Err(GameError::GameAlreadyOver));
    assert_eq!(game.rearrange(private, Cell::new(5, 0)), Err(GameError::GameAlreadyOver));
    assert_eq!(game.tick(), Tick::Idle);
    assert!(!game.force_start());

    assert_eq!(game.current_state(), &state_before);
    assert_eq!(game.board_snapshot(), snapshot_before);
}

#[test]
fn test_full_random_game_alternates() {
    let mut game = Game::new(GameConfig::default().with_seed(2024)).unwrap();
    game.force_start();

    let mut expected = Side::Player;
    for ply in 0..200 {
        if game.current_state().phase == Phase::GameOver {
            break;
        }
        assert_eq!(game.current_state().mover, expected, "ply {ply}");

        let outcome = match expected {
            Side::Player => {
                let choice = game
                    .board()
                    .piece_ids(Side::Player)
                    .into_iter()
                    .find_map(|id| game.legal_targets(id).first().map(|&to| (id, to)));
                let Some((id, to)) = choice else { break };
                game.attempt_move(id, to).unwrap()
            }
            Side::Opponent => game.opponent_turn().unwrap(),
        };

        if outcome.winner().is_none() {
            expected = expected.other();
        }
    }
}
