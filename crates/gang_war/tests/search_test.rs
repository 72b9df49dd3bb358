//! Tests for the search engines: correctness, tie-breaking, and
//! minimax/alpha-beta equivalence.

use gang_war::{
    ActionKind, AlphaBeta, Cell, GameState, Minimax, OwnershipGrid, Player, Position,
    SearchError, SearchStrategy, ValueGrid, evaluate,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

fn state_from(rows: &[&str], values: Vec<Vec<u32>>, turn: Player) -> GameState {
    let cells = rows
        .iter()
        .map(|row| row.chars().map(|c| Cell::from_char(c).unwrap()).collect())
        .collect();
    let ownership = OwnershipGrid::from_rows(cells).unwrap();
    let values = Arc::new(ValueGrid::from_rows(values).unwrap());
    GameState::new(values, ownership, turn).unwrap()
}

fn random_state(rng: &mut StdRng, n: usize, turn: Player) -> GameState {
    let values: Vec<Vec<u32>> = (0..n)
        .map(|_| (0..n).map(|_| rng.gen_range(1..=9)).collect())
        .collect();
    let occupancy = rng.gen_range(0.0..0.6);
    let cells: Vec<Vec<Cell>> = (0..n)
        .map(|_| {
            (0..n)
                .map(|_| {
                    if rng.gen_bool(occupancy) {
                        if rng.gen_bool(0.5) {
                            Cell::Owned(Player::X)
                        } else {
                            Cell::Owned(Player::O)
                        }
                    } else {
                        Cell::Unowned
                    }
                })
                .collect()
        })
        .collect();
    let ownership = OwnershipGrid::from_rows(cells).unwrap();
    let values = Arc::new(ValueGrid::from_rows(values).unwrap());
    GameState::new(values, ownership, turn).unwrap()
}

#[test]
fn evaluation_is_score_margin_for_the_perspective_player() {
    let state = state_from(&["X.", ".O"], vec![vec![2, 3], vec![5, 7]], Player::X);
    assert_eq!(evaluate(&state, Player::X), 2 - 7);
    assert_eq!(evaluate(&state, Player::O), 7 - 2);
}

#[test]
fn search_on_an_empty_symmetric_board_returns_a_stake() {
    let state = state_from(&["..", ".."], vec![vec![1, 1], vec![1, 1]], Player::X);
    for strategy in [
        Box::new(Minimax::new(Player::X, 2)) as Box<dyn SearchStrategy>,
        Box::new(AlphaBeta::new(Player::X, 2)),
    ] {
        let action = strategy.choose(&state).unwrap();
        assert_eq!(action.kind(), ActionKind::Stake);
        assert_eq!(action.player(), Player::X);
    }
}

#[test]
fn depth_one_search_stakes_the_most_valuable_cell() {
    let state = state_from(
        &["...", "...", "..."],
        vec![vec![1, 9, 2], vec![3, 4, 5], vec![2, 1, 6]],
        Player::X,
    );
    for strategy in [
        Box::new(Minimax::new(Player::X, 1)) as Box<dyn SearchStrategy>,
        Box::new(AlphaBeta::new(Player::X, 1)),
    ] {
        let action = strategy.choose(&state).unwrap();
        assert_eq!(action.position(), Position::new(0, 1));
        assert_eq!(action.kind(), ActionKind::Stake);
    }
}

#[test]
fn equal_valued_stake_beats_raid() {
    // X's raids capture nothing here, so every move is worth its cell
    // value; the stake must win the tie.
    let state = state_from(&["X.", ".."], vec![vec![1, 1], vec![1, 1]], Player::X);
    for strategy in [
        Box::new(Minimax::new(Player::X, 1)) as Box<dyn SearchStrategy>,
        Box::new(AlphaBeta::new(Player::X, 1)),
    ] {
        let action = strategy.choose(&state).unwrap();
        assert_eq!(action.kind(), ActionKind::Stake);
    }
}

#[test]
fn profitable_raid_is_preferred_over_any_stake() {
    // Raiding (0,1) captures X's valuable corner, outweighing any stake.
    let state = state_from(
        &["X.", ".O"],
        vec![vec![9, 1], vec![1, 1]],
        Player::O,
    );
    for strategy in [
        Box::new(Minimax::new(Player::O, 1)) as Box<dyn SearchStrategy>,
        Box::new(AlphaBeta::new(Player::O, 1)),
    ] {
        let action = strategy.choose(&state).unwrap();
        assert_eq!(action.kind(), ActionKind::Raid);
        assert_eq!(action.position(), Position::new(0, 1));
    }
}

#[test]
fn search_on_a_terminal_root_is_an_error() {
    let state = state_from(&["XO", "OX"], vec![vec![1, 1], vec![1, 1]], Player::X);
    let minimax = Minimax::new(Player::X, 3);
    assert_eq!(minimax.choose(&state), Err(SearchError::TerminalRoot));
    let alphabeta = AlphaBeta::new(Player::X, 3);
    assert_eq!(alphabeta.choose(&state), Err(SearchError::TerminalRoot));
}

#[test]
fn strategies_agree_on_seeded_random_boards() {
    let mut rng = StdRng::seed_from_u64(561);
    for round in 0..12 {
        let turn = if round % 2 == 0 { Player::X } else { Player::O };
        let state = random_state(&mut rng, 4, turn);
        if state.terminal() {
            continue;
        }
        for depth in 0..=3 {
            let minimax = Minimax::new(turn, depth);
            let alphabeta = AlphaBeta::new(turn, depth);
            assert_eq!(
                minimax.choose(&state).unwrap(),
                alphabeta.choose(&state).unwrap(),
                "strategies diverged at depth {depth} on round {round}",
            );
        }
    }
}

#[test]
fn strategies_agree_along_a_full_game() {
    let mut state = state_from(
        &["...", "...", "..."],
        vec![vec![4, 1, 2], vec![9, 9, 3], vec![1, 8, 2]],
        Player::X,
    );
    while !state.terminal() {
        let turn = state.turn();
        let chosen = AlphaBeta::new(turn, 2).choose(&state).unwrap();
        assert_eq!(chosen, Minimax::new(turn, 2).choose(&state).unwrap());
        state = state.transition(&chosen).unwrap();
    }
}

#[test]
fn deeper_search_sees_the_counter_raid() {
    // Staking greedily next to the opponent invites an immediate
    // recapture; at depth 2 the agent must account for O's reply.
    let state = state_from(
        &[".O.", "...", "..."],
        vec![vec![1, 5, 1], vec![9, 1, 1], vec![1, 1, 1]],
        Player::X,
    );
    let greedy = AlphaBeta::new(Player::X, 1).choose(&state).unwrap();
    assert_eq!(greedy.position(), Position::new(1, 0));

    let careful = AlphaBeta::new(Player::X, 2).choose(&state).unwrap();
    let after = state.transition(&careful).unwrap();
    let reply = AlphaBeta::new(Player::O, 1).choose(&after).unwrap();
    let settled = after.transition(&reply).unwrap();
    // The depth-2 choice is at least as good after the best reply as
    // the greedy one.
    let after_greedy = state.transition(&greedy).unwrap();
    let greedy_reply = AlphaBeta::new(Player::O, 1).choose(&after_greedy).unwrap();
    let greedy_settled = after_greedy.transition(&greedy_reply).unwrap();
    assert!(evaluate(&settled, Player::X) >= evaluate(&greedy_settled, Player::X));
}
