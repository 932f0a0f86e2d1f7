//! Property tests for setup, validation, combat and the random opponent.

use proptest::prelude::*;

use rust_stratego::board::{Board, Cell};
use rust_stratego::core::{GameConfig, GameError, GameRng, GameState, Side};
use rust_stratego::game::Game;
use rust_stratego::opponent::{OpponentPolicy, RandomOpponent};
use rust_stratego::pieces::{PieceKind, PieceRegistry};
use rust_stratego::rules::{resolve, validate, verdict, Verdict};

fn cell() -> impl Strategy<Value = Cell> {
    (0u8..6, 0u8..6).prop_map(|(row, col)| Cell::new(row, col))
}

fn kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::SETUP_ORDER.to_vec())
}

fn side() -> impl Strategy<Value = Side> {
    prop::sample::select(Side::ALL.to_vec())
}

/// A board with up to 20 pieces on random cells; collisions are skipped.
fn board() -> impl Strategy<Value = Board> {
    prop::collection::vec((kind(), side(), cell()), 0..20).prop_map(|pieces| {
        let mut board = Board::new();
        for (kind, side, cell) in pieces {
            let _ = board.place(kind, side, cell);
        }
        board
    })
}

fn playing(mover: Side) -> GameState {
    let mut state = GameState::new(0);
    state.start();
    state.mover = mover;
    state
}

proptest! {
    #[test]
    fn prop_setup_deals_one_of_each_kind(seed in any::<u64>()) {
        let game = Game::new(GameConfig::default().with_seed(seed)).unwrap();

        for side in Side::ALL {
            let pieces: Vec<_> = game.board().pieces_of(side).collect();
            prop_assert_eq!(pieces.len(), 5);

            let mut kinds: Vec<_> = pieces.iter().map(|p| p.kind).collect();
            kinds.sort();
            kinds.dedup();
            prop_assert_eq!(kinds.len(), 5);

            let mut cells: Vec<_> = pieces.iter().map(|p| p.position).collect();
            cells.sort();
            cells.dedup();
            prop_assert_eq!(cells.len(), 5);

            for piece in &pieces {
                prop_assert!(side.setup_rows().contains(&piece.position.row));
            }
        }
    }

    #[test]
    fn prop_validation_matches_rule(
        from in cell(),
        to in cell(),
        occupant in prop::option::of(side()),
        mover in side(),
        owner in side(),
    ) {
        let mut board = Board::new();
        let id = board.place(PieceKind::Private, owner, from).unwrap();
        if from != to {
            if let Some(occupant) = occupant {
                board.place(PieceKind::Spy, occupant, to).unwrap();
            }
        }

        let expected = owner == mover
            && from.is_adjacent(to)
            && board.piece_at(to).map_or(true, |p| p.owner != owner);
        let result = validate(&board, &playing(mover), id, to);

        prop_assert_eq!(result.is_ok(), expected);
        prop_assert_eq!(board.get(id).unwrap().position, from);
    }

    #[test]
    fn prop_combat_is_deterministic_and_consistent(attacker in kind(), defender in kind()) {
        let registry = PieceRegistry::standard();
        let mut board = Board::new();
        let a = board.place(attacker, Side::Player, Cell::new(3, 2)).unwrap();
        let d = board.place(defender, Side::Opponent, Cell::new(2, 2)).unwrap();

        let result = resolve(&mut board, &registry, a, d).unwrap();

        prop_assert_eq!(board.get(a).is_some(), result.attacker_survived);
        prop_assert_eq!(board.get(d).is_some(), result.defender_survived);
        match verdict(&registry, attacker, defender) {
            Verdict::AttackerWinsGame => prop_assert_eq!(result.winner, Some(Side::Player)),
            Verdict::AttackerTakes => {
                prop_assert_eq!(board.get(a).unwrap().position, Cell::new(2, 2));
                prop_assert!(board.is_empty(Cell::new(3, 2)));
            }
            Verdict::DefenderHolds => prop_assert_eq!(board.get(d).unwrap().position, Cell::new(2, 2)),
            Verdict::BothRemoved => prop_assert_eq!(board.len(), 0),
        }
    }

    #[test]
    fn prop_opponent_moves_iff_some_piece_can(board in board(), seed in any::<u64>()) {
        let can_move = board
            .pieces_of(Side::Opponent)
            .any(|p| !board.empty_neighbors(p.position).is_empty());

        let mut rng = GameRng::new(seed);
        let result = RandomOpponent.choose_move(&board, &playing(Side::Opponent), Side::Opponent, &mut rng);

        match result {
            Ok(mv) => {
                prop_assert!(can_move);
                let piece = board.get(mv.piece).unwrap();
                prop_assert_eq!(piece.owner, Side::Opponent);
                prop_assert!(piece.position.is_adjacent(mv.to));
                prop_assert!(board.is_empty(mv.to));
            }
            Err(err) => {
                prop_assert!(!can_move);
                prop_assert_eq!(err, GameError::NoLegalMove);
            }
        }
    }
}
