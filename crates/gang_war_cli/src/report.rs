//! Result reporter for the text output format.
//!
//! The chosen move on the first line (`<ColumnLetter><Row> <Stake|Raid>`),
//! followed by the resulting ownership grid as N rows of `{X, O, .}`.

use gang_war::{Action, GameState};

/// Renders the chosen action and the board it produced.
pub fn render(action: &Action, result: &GameState) -> String {
    format!("{}\n{}", action, result.ownership().render())
}
