//! Random board generation for testing.

use gang_war::{Cell, Player};
use rand::Rng;

/// A randomly generated board, not yet turned into a game state.
#[derive(Debug, Clone)]
pub struct RandomBoard {
    /// Board side length, drawn from 5..=7.
    pub n: usize,
    /// Cell values, each drawn from 1..=99.
    pub values: Vec<Vec<u32>>,
    /// Initial ownership.
    pub cells: Vec<Vec<Cell>>,
}

/// Generates a random board.
///
/// Each board draws its own occupancy chance, so some boards come out
/// dense and some sparse; `blank` forces every cell unowned.
pub fn generate(rng: &mut impl Rng, blank: bool) -> RandomBoard {
    let n = rng.gen_range(5..=7);
    let occupancy = rng.gen_range(0.0..1.0);
    let mut values = vec![vec![0u32; n]; n];
    let mut cells = vec![vec![Cell::Unowned; n]; n];
    for row in 0..n {
        for col in 0..n {
            values[row][col] = rng.gen_range(1..=99);
            if !blank && rng.gen_bool(occupancy) {
                let owner = if rng.gen_bool(0.5) {
                    Player::X
                } else {
                    Player::O
                };
                cells[row][col] = Cell::Owned(owner);
            }
        }
    }
    RandomBoard { n, values, cells }
}

/// Renders a board as a position file in the loader's input format.
pub fn render_position(board: &RandomBoard, mode: &str, player: Player, depth: u32) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n{}\n{}\n", board.n, mode, player, depth));
    for row in &board.values {
        let tokens: Vec<String> = row.iter().map(u32::to_string).collect();
        out.push_str(&tokens.join(" "));
        out.push('\n');
    }
    for row in &board.cells {
        for cell in row {
            out.push(cell.as_char());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn boards_respect_the_generation_constraints() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let board = generate(&mut rng, false);
            assert!((5..=7).contains(&board.n));
            assert_eq!(board.values.len(), board.n);
            assert_eq!(board.cells.len(), board.n);
            for row in &board.values {
                assert_eq!(row.len(), board.n);
                assert!(row.iter().all(|v| (1..=99).contains(v)));
            }
        }
    }

    #[test]
    fn blank_boards_are_fully_unowned() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = generate(&mut rng, true);
        assert!(
            board
                .cells
                .iter()
                .flatten()
                .all(|cell| *cell == Cell::Unowned)
        );
    }

    #[test]
    fn rendered_position_parses_back() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = generate(&mut rng, false);
        let text = render_position(&board, "MINIMAX", Player::X, 3);
        let problem = crate::loader::parse(&text).unwrap();
        assert_eq!(problem.state.size(), board.n);
        assert_eq!(problem.player, Player::X);
        assert_eq!(problem.depth, 3);
    }
}
