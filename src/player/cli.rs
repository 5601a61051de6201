use std::io::{BufRead, Write};

use rand::rngs::SmallRng;

use crate::core::{BoardError, Coordinate, Shot, ShotOutcome};

use super::Combatant;

/// Why a line of input could not be read as a target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("enter two coordinates, got {0} value(s)")]
    WrongTokenCount(usize),
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Parse `"row col"` into a coordinate.
///
/// Both tokens must be plain ASCII digits. Values too large for `i32` saturate
/// and are left for the grid to reject as off the board.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    Ok(Coordinate::new(parse_index(row)?, parse_index(col)?))
}

fn parse_index(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_string()));
    }
    Ok(token.parse().unwrap_or(i32::MAX))
}

/// Combatant driven by a person typing targets.
///
/// Reads from any `BufRead` and writes prompts to any `Write`, so the
/// interactive binary uses stdin/stdout and tests use in-memory buffers.
pub struct HumanCombatant<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanCombatant<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self) -> anyhow::Result<String> {
        write!(self.output, "Your move: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed while waiting for a target");
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write, const N: usize> Combatant<N> for HumanCombatant<R, W> {
    fn choose_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Coordinate> {
        loop {
            let line = self.prompt()?;
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn report_rejected(&mut self, target: Coordinate, err: &BoardError) {
        log::debug!("human target {} rejected: {}", target, err);
        if let Err(e) = writeln!(self.output, "Cannot fire there: {}", err) {
            log::warn!("failed to report rejected target: {}", e);
        }
    }

    fn report_outcome(&mut self, shot: &Shot) {
        let text = match shot.outcome {
            ShotOutcome::Miss => "Miss!",
            ShotOutcome::Hit => "Hit! Fire again.",
            ShotOutcome::Sunk => "Vessel destroyed! Fire again.",
        };
        if let Err(e) = writeln!(self.output, "{} {}", shot.target, text) {
            log::warn!("failed to report shot outcome: {}", e);
        }
    }
}
