//! Synchronous UCI engine.
//!
//! Commands are handled one at a time on the calling thread. `go` blocks
//! until the search finishes, printing an `info` line per completed
//! iteration and then `bestmove`.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing::{debug, info, warn};

use vantage_core::{ChessBoard, Color, Move, Position, move_to_uci};
use vantage_engine::{
    SearchConfig, SearchLimits, SearchResult, Searcher, TranspositionTable, budget_from_clock,
    mate_in_moves,
};

use crate::command::{Command, GoParams, UciOption, parse_command};
use crate::error::UciError;

/// Transposition table size at startup, in megabytes.
const DEFAULT_HASH_MB: usize = 16;

/// Largest accepted `Hash` value, in megabytes.
const MAX_HASH_MB: usize = 4096;

/// Search limits for a `go` command.
///
/// Priority order:
/// 1. `movetime` -> that budget
/// 2. the mover's clock -> `budget_from_clock`, dividing by `movestogo`
///    instead of `time_divisor` when fewer moves remain
/// 3. `depth` -> fixed depth
/// 4. bare `go` / `go infinite` -> `default_depth`
///
/// A `depth` given alongside a clock caps the timed search.
pub fn limits_from_go(params: &GoParams, side: Color, config: &SearchConfig) -> SearchLimits {
    let max_depth = params.depth.unwrap_or(config.max_depth);

    if let Some(movetime) = params.movetime {
        return SearchLimits::timed(movetime, max_depth);
    }

    let (remaining, increment) = match side {
        Color::White => (params.wtime, params.winc),
        Color::Black => (params.btime, params.binc),
    };

    if !params.infinite
        && let Some(remaining) = remaining
    {
        let divisor = params
            .movestogo
            .map_or(config.time_divisor, |mtg| mtg.clamp(1, config.time_divisor.max(1)));
        let budget = budget_from_clock(remaining, increment.unwrap_or(Duration::ZERO), divisor);
        return SearchLimits::timed(budget, max_depth);
    }

    SearchLimits::depth(params.depth.unwrap_or(config.default_depth))
}

/// Format a score for an `info` line: `cp N` or `mate N`.
pub fn uci_score(score: i32, root_ply: u32) -> String {
    match mate_in_moves(score, root_ply) {
        Some(moves) => format!("mate {moves}"),
        None => format!("cp {score}"),
    }
}

fn info_line(result: &SearchResult<Move>, root_ply: u32) -> String {
    let pv = result.best_move.as_ref().map(move_to_uci).unwrap_or_default();
    format!(
        "info depth {} score {} nodes {} nps {} time {} pv {}",
        result.depth,
        uci_score(result.score, root_ply),
        result.nodes,
        result.nps(),
        result.elapsed.as_millis(),
        pv
    )
}

/// The UCI engine, holding the current board and the searcher.
pub struct UciEngine {
    board: ChessBoard,
    searcher: Searcher<ChessBoard>,
}

impl UciEngine {
    /// Create a new engine with the starting position.
    pub fn new() -> Self {
        let config = SearchConfig {
            tt_bits: TranspositionTable::<Move>::bits_for_megabytes(DEFAULT_HASH_MB),
            ..SearchConfig::default()
        };
        Self {
            board: ChessBoard::new(),
            searcher: Searcher::new(config),
        }
    }

    /// Current position.
    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    /// Current search settings.
    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    /// Run the UCI loop on stdin and stdout until `quit` or end of input.
    pub fn run(mut self) -> Result<(), UciError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout.lock())
    }

    /// Run the UCI loop over arbitrary input and output.
    ///
    /// Parse errors are logged and the offending line is skipped; only I/O
    /// errors end the loop early.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), UciError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command, out)?,
                Err(e) => warn!(error = %e, "UCI parse error"),
            }
            out.flush()?;
        }

        info!("vantage shutting down");
        Ok(())
    }

    /// Apply one parsed command, writing any response to `out`.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<(), UciError> {
        match command {
            Command::Uci => self.handle_uci(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::UciNewGame => self.handle_ucinewgame(),
            Command::Position(board) => self.board = *board,
            Command::Go(params) => self.handle_go(&params, out)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    fn handle_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let config = SearchConfig::default();
        writeln!(out, "id name vantage")?;
        writeln!(out, "id author the vantage developers")?;
        writeln!(
            out,
            "option name Hash type spin default {DEFAULT_HASH_MB} min 1 max {MAX_HASH_MB}"
        )?;
        writeln!(
            out,
            "option name DrawScore type spin default {} min -1000 max 1000",
            config.draw_score
        )?;
        writeln!(
            out,
            "option name TimeDivisor type spin default {} min 1 max 1000",
            config.time_divisor
        )?;
        writeln!(out, "uciok")
    }

    fn handle_ucinewgame(&mut self) {
        self.board = ChessBoard::new();
        self.searcher.clear();
    }

    fn handle_setoption(&mut self, option: UciOption) {
        let mut config = self.searcher.config().clone();
        match option {
            UciOption::Hash(mb) => {
                config.tt_bits = TranspositionTable::<Move>::bits_for_megabytes(mb.min(MAX_HASH_MB));
            }
            UciOption::DrawScore(score) => config.draw_score = score,
            UciOption::TimeDivisor(divisor) => config.time_divisor = divisor.max(1),
        }
        debug!(?option, ?config, "option set");
        self.searcher.set_config(config);
    }

    fn handle_go<W: Write>(&mut self, params: &GoParams, out: &mut W) -> Result<(), UciError> {
        let limits = limits_from_go(params, self.board.side_to_move(), self.searcher.config());
        let root_ply = self.board.ply_count();
        debug!(?limits, "starting search");

        let mut write_result = Ok(());
        let result = self.searcher.search(&mut self.board, limits, |iteration| {
            if write_result.is_ok() {
                write_result = writeln!(out, "{}", info_line(iteration, root_ply));
            }
        });
        write_result?;

        match result.best_move {
            Some(best) => writeln!(out, "bestmove {}", move_to_uci(&best))?,
            None => writeln!(out, "bestmove 0000")?,
        }
        Ok(())
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}
