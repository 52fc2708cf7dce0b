//! Integration tests for the search driver.
//!
//! Covers the end-to-end scenarios plus the structural properties of the
//! negamax core: colour symmetry, push/undo discipline, window behaviour,
//! history growth and deadline handling.

use std::time::{Duration, Instant};

use gambit_core::{Color, Game, Move, Piece, PieceKind, Rules, RulesError, Square};
use gambit_engine::{
    INFINITY, MoveSource, OpeningBook, SearchContext, SearchControl, SearchResult, Searcher,
    evaluate, is_decisive, negamax,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SCHOLARS_MATE_FEN: &str =
    "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

const ITALIAN_FEN: &str =
    "r1bq1rk1/ppp2ppp/2np1n2/2b1p3/2B1P3/2NP1N2/PPP2PPP/R1BQ1RK1 w - - 0 1";

const HANGING_QUEEN_FEN: &str = "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1";

const PAWN_ENDGAME_FEN: &str = "8/5k2/3p4/2pP4/2P5/4K3/8/8 w - - 0 1";

const MATED_FEN: &str = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1";

fn infinite() -> SearchControl {
    SearchControl::new_infinite()
}

fn run<R: Rules + ?Sized>(searcher: &Searcher, game: &mut R, depth: i32) -> SearchResult {
    let control = infinite();
    let mut rng = StdRng::seed_from_u64(11);
    searcher.search(game, depth, &control, &mut rng, |_, _, _, _| {})
}

fn bookless() -> Searcher {
    Searcher::with_book(OpeningBook::empty())
}

/// Rotate the board 180 degrees and swap colours.
///
/// Castling and en passant rights are dropped, so only use positions
/// without them.
fn mirror(fen: &str) -> String {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().unwrap();
    let turn = fields.next().unwrap();
    let ranks: Vec<String> = placement
        .split('/')
        .rev()
        .map(|rank| {
            rank.chars()
                .rev()
                .map(|c| {
                    if c.is_ascii_uppercase() {
                        c.to_ascii_lowercase()
                    } else {
                        c.to_ascii_uppercase()
                    }
                })
                .collect()
        })
        .collect();
    let turn = if turn == "w" { "b" } else { "w" };
    format!("{} {} - - 0 1", ranks.join("/"), turn)
}

fn root_search(game: &mut Game, depth: i32, alpha: i32, beta: i32) -> (i32, Option<Move>) {
    let control = infinite();
    let mut ctx = SearchContext::new(&control);
    negamax(game, depth, alpha, beta, true, &mut ctx).unwrap()
}

// ── End-to-end scenarios ──────────────────────────────────────────────────────

#[test]
fn start_position_depth_one() {
    let mut game = Game::starting_position();
    let result = run(&bookless(), &mut game, 1);
    let mv = result.best_move.unwrap();
    let legal = game.legal_moves();
    assert_eq!(legal.len(), 20);
    assert!(legal.contains(&mv), "{mv} is not a legal opening move");
    assert!(result.nodes >= 20, "nodes={}", result.nodes);
    assert_eq!(result.source, MoveSource::Search);
}

#[test]
fn mate_in_one_is_found_and_delivered() {
    let mut game = Game::from_fen(SCHOLARS_MATE_FEN).unwrap();
    let result = run(&bookless(), &mut game, 3);
    assert!(is_decisive(result.score), "score={}", result.score);
    assert!(result.score > 0);

    let mv = result.best_move.unwrap();
    game.push(mv).unwrap();
    assert!(game.is_checkmate(), "{mv} does not mate");
}

#[test]
fn mated_side_sees_negative_infinity() {
    let mut game = Game::from_fen(MATED_FEN).unwrap();
    assert_eq!(evaluate(&game), -INFINITY);

    let result = run(&bookless(), &mut game, 4);
    assert_eq!(result.score, -INFINITY);
    assert_eq!(result.best_move, None);
}

#[test]
fn book_hit_on_initial_position() {
    let mut game = Game::starting_position();
    let searcher = Searcher::new();
    let start = Instant::now();
    let result = run(&searcher, &mut game, 5);
    assert!(start.elapsed() < Duration::from_millis(100));
    assert_eq!(result.source, MoveSource::Book);
    assert_eq!(result.nodes, 0);

    let mv = result.best_move.unwrap();
    let listed: Vec<String> = ["e2e4", "d2d4", "c2c4", "g1f3"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(listed.contains(&mv.to_uci()), "{mv} is not a book move");
}

// ── Symmetry ──────────────────────────────────────────────────────────────────

#[test]
fn mirror_helper_round_trips() {
    let back = mirror(&mirror(ITALIAN_FEN));
    assert_eq!(back, ITALIAN_FEN);
}

#[test]
fn evaluation_is_colour_symmetric() {
    for fen in [ITALIAN_FEN, HANGING_QUEEN_FEN, PAWN_ENDGAME_FEN] {
        let game = Game::from_fen(fen).unwrap();
        let mirrored = Game::from_fen(&mirror(fen)).unwrap();
        assert_eq!(evaluate(&game), evaluate(&mirrored), "fen={fen}");
    }
}

#[test]
fn search_is_colour_symmetric() {
    for fen in [ITALIAN_FEN, HANGING_QUEEN_FEN, PAWN_ENDGAME_FEN] {
        let mut game = Game::from_fen(fen).unwrap();
        let mut mirrored = Game::from_fen(&mirror(fen)).unwrap();
        for depth in 1..=2 {
            let (score, _) = root_search(&mut game, depth, -INFINITY, INFINITY);
            let (mirrored_score, _) = root_search(&mut mirrored, depth, -INFINITY, INFINITY);
            assert_eq!(score, mirrored_score, "fen={fen} depth={depth}");
        }
    }
}

#[test]
fn unique_best_move_maps_to_its_mirror() {
    let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w - - 4 4";
    let mut game = Game::from_fen(fen).unwrap();
    let mut mirrored = Game::from_fen(&mirror(fen)).unwrap();

    let (score, mv) = root_search(&mut game, 2, -INFINITY, INFINITY);
    let (mirrored_score, mirrored_mv) = root_search(&mut mirrored, 2, -INFINITY, INFINITY);
    assert_eq!(score, INFINITY);
    assert_eq!(mirrored_score, INFINITY);
    assert_eq!(mv, Move::from_uci("h5f7"));
    assert_eq!(mirrored_mv, mv.map(Move::rotate));
}

// ── Push/undo discipline ──────────────────────────────────────────────────────

/// Wraps a [`Game`] and checks that every undo restores the exact position
/// seen before the matching push.
struct Recording {
    inner: Game,
    before: Vec<String>,
    verified: usize,
}

impl Recording {
    fn new(fen: &str) -> Self {
        Self {
            inner: Game::from_fen(fen).unwrap(),
            before: Vec::new(),
            verified: 0,
        }
    }
}

impl Rules for Recording {
    fn legal_moves(&self) -> Vec<Move> {
        self.inner.legal_moves()
    }

    fn capture_moves(&self) -> Vec<Move> {
        self.inner.capture_moves()
    }

    fn push(&mut self, mv: Move) -> Result<(), RulesError> {
        let before = self.inner.canonical();
        self.inner.push(mv)?;
        self.before.push(before);
        Ok(())
    }

    fn push_null(&mut self) -> Result<(), RulesError> {
        let before = self.inner.canonical();
        self.inner.push_null()?;
        self.before.push(before);
        Ok(())
    }

    fn undo(&mut self) -> Result<(), RulesError> {
        self.inner.undo()?;
        let expected = self.before.pop().expect("undo without a recorded push");
        assert_eq!(self.inner.canonical(), expected);
        self.verified += 1;
        Ok(())
    }

    fn is_check(&self) -> bool {
        self.inner.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.inner.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.inner.is_stalemate()
    }

    fn is_insufficient_material(&self) -> bool {
        self.inner.is_insufficient_material()
    }

    fn is_capture(&self, mv: Move) -> bool {
        self.inner.is_capture(mv)
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.inner.piece_at(sq)
    }

    fn side_to_move(&self) -> Color {
        self.inner.side_to_move()
    }

    fn pieces(&self, color: Color, kind: PieceKind) -> Vec<Square> {
        self.inner.pieces(color, kind)
    }

    fn canonical(&self) -> String {
        self.inner.canonical()
    }
}

#[test]
fn every_push_is_undone_exactly() {
    for fen in [ITALIAN_FEN, HANGING_QUEEN_FEN, SCHOLARS_MATE_FEN] {
        let mut game = Recording::new(fen);
        let start = game.canonical();
        run(&bookless(), &mut game, 3);
        assert!(game.verified > 0, "nothing was searched for {fen}");
        assert!(game.before.is_empty());
        assert_eq!(game.canonical(), start);
    }
}

#[test]
fn cancellation_unwinds_every_push() {
    let mut game = Recording::new(ITALIAN_FEN);
    let start = game.canonical();
    let control = SearchControl::new_timed(Duration::from_millis(30));
    let mut rng = StdRng::seed_from_u64(5);
    let result = bookless().search(&mut game, 40, &control, &mut rng, |_, _, _, _| {});

    assert!(result.best_move.is_some());
    assert!(game.before.is_empty());
    assert_eq!(game.canonical(), start);
}

// ── Window behaviour ──────────────────────────────────────────────────────────

#[test]
fn narrow_windows_agree_with_full_window() {
    for fen in [ITALIAN_FEN, HANGING_QUEEN_FEN, PAWN_ENDGAME_FEN] {
        let mut game = Game::from_fen(fen).unwrap();
        for depth in 1..=2 {
            let (full, _) = root_search(&mut game, depth, -INFINITY, INFINITY);

            // Window containing the true score: exact.
            let (inside, _) = root_search(&mut game, depth, full - 30, full + 30);
            assert_eq!(inside, full, "fen={fen} depth={depth}");

            // Window above the true score: fails low.
            let (low, _) = root_search(&mut game, depth, full + 10, full + 60);
            assert!(low <= full + 10, "fen={fen} depth={depth} low={low}");

            // Window below the true score: fails high.
            let (high, _) = root_search(&mut game, depth, full - 60, full - 10);
            assert!(high >= full - 10, "fen={fen} depth={depth} high={high}");
        }
    }
}

#[test]
fn beta_cutoff_returns_the_bound() {
    for fen in [ITALIAN_FEN, HANGING_QUEEN_FEN] {
        let mut game = Game::from_fen(fen).unwrap();
        let (full, _) = root_search(&mut game, 2, -INFINITY, INFINITY);
        let beta = full - 20;
        let (score, mv) = root_search(&mut game, 2, beta - 1, beta);
        assert_eq!(score, beta, "fen={fen}");
        assert!(mv.is_some());

        // Null-move cutoffs report the bound too.
        let (score, _) = root_search(&mut game, 3, beta - 1, beta);
        if score >= beta {
            assert_eq!(score, beta, "fen={fen}");
        }
    }
}

// ── Null-move pruning ─────────────────────────────────────────────────────────

/// Black queen on h4 checks the white king through the open f2 square.
const ROOT_IN_CHECK_FEN: &str =
    "rnb1kbnr/pppp1ppp/8/4p3/7q/5P2/PPPPP1PP/RNBQKBNR w KQkq - 1 3";

/// White queen against a bare king: never an endgame, few replies.
const LONE_QUEEN_FEN: &str = "k7/8/8/8/8/8/6PP/6QK w - - 0 1";

/// Wraps a [`Game`] and counts null moves, including how many are stacked
/// on top of each other at once.
struct NullCounting {
    inner: Game,
    stack: Vec<bool>,
    nulls: usize,
    max_nested: usize,
}

impl NullCounting {
    fn new(fen: &str) -> Self {
        Self {
            inner: Game::from_fen(fen).unwrap(),
            stack: Vec::new(),
            nulls: 0,
            max_nested: 0,
        }
    }

    fn search(fen: &str, depth: i32) -> Self {
        let mut game = Self::new(fen);
        let control = infinite();
        let mut ctx = SearchContext::new(&control);
        negamax(&mut game, depth, -INFINITY, INFINITY, true, &mut ctx).unwrap();
        assert!(game.stack.is_empty());
        game
    }
}

impl Rules for NullCounting {
    fn legal_moves(&self) -> Vec<Move> {
        self.inner.legal_moves()
    }

    fn capture_moves(&self) -> Vec<Move> {
        self.inner.capture_moves()
    }

    fn push(&mut self, mv: Move) -> Result<(), RulesError> {
        self.inner.push(mv)?;
        self.stack.push(false);
        Ok(())
    }

    fn push_null(&mut self) -> Result<(), RulesError> {
        self.inner.push_null()?;
        self.stack.push(true);
        self.nulls += 1;
        let nested = self.stack.iter().filter(|&&null| null).count();
        self.max_nested = self.max_nested.max(nested);
        Ok(())
    }

    fn undo(&mut self) -> Result<(), RulesError> {
        self.inner.undo()?;
        self.stack.pop();
        Ok(())
    }

    fn is_check(&self) -> bool {
        self.inner.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.inner.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.inner.is_stalemate()
    }

    fn is_insufficient_material(&self) -> bool {
        self.inner.is_insufficient_material()
    }

    fn is_capture(&self, mv: Move) -> bool {
        self.inner.is_capture(mv)
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.inner.piece_at(sq)
    }

    fn side_to_move(&self) -> Color {
        self.inner.side_to_move()
    }

    fn pieces(&self, color: Color, kind: PieceKind) -> Vec<Square> {
        self.inner.pieces(color, kind)
    }

    fn canonical(&self) -> String {
        self.inner.canonical()
    }
}

#[test]
fn null_move_needs_three_plies() {
    assert_eq!(NullCounting::search(ITALIAN_FEN, 2).nulls, 0);
    assert_eq!(NullCounting::search(ITALIAN_FEN, 3).nulls, 1);
}

#[test]
fn null_move_skipped_in_endgame() {
    assert_eq!(NullCounting::search(PAWN_ENDGAME_FEN, 4).nulls, 0);
}

#[test]
fn null_move_skipped_in_check() {
    let game = NullCounting::new(ROOT_IN_CHECK_FEN);
    assert!(game.is_check());
    assert_eq!(NullCounting::search(ROOT_IN_CHECK_FEN, 3).nulls, 0);
}

#[test]
fn null_move_never_nests() {
    // At depth 6 the reduced probe still has three plies left.
    let game = NullCounting::search(LONE_QUEEN_FEN, 6);
    assert!(game.nulls > 0);
    assert_eq!(game.max_nested, 1);
}

// ── Heuristic tables ──────────────────────────────────────────────────────────

fn history_snapshot(ctx: &SearchContext<'_>) -> Vec<i32> {
    let mut snapshot = Vec::with_capacity(Square::COUNT * Square::COUNT);
    for from in Square::all() {
        for to in Square::all() {
            snapshot.push(ctx.history.score(Move::new(from, to)));
        }
    }
    snapshot
}

#[test]
fn history_never_decreases() {
    let mut game = Game::from_fen(ITALIAN_FEN).unwrap();
    let control = infinite();
    let mut ctx = SearchContext::new(&control);
    let mut previous = history_snapshot(&ctx);

    for depth in 1..=3 {
        negamax(&mut game, depth, -INFINITY, INFINITY, true, &mut ctx).unwrap();
        let current = history_snapshot(&ctx);
        for (before, after) in previous.iter().zip(&current) {
            assert!(after >= before, "history shrank at depth {depth}");
        }
        previous = current;
    }
    assert!(previous.iter().any(|&v| v > 0));
}

// ── Deadline ──────────────────────────────────────────────────────────────────

#[test]
fn deadline_is_respected() {
    let mut game = Game::from_fen(ITALIAN_FEN).unwrap();
    let limit = Duration::from_millis(100);
    let control = SearchControl::new_timed(limit);
    let mut rng = StdRng::seed_from_u64(9);

    let start = Instant::now();
    let result = bookless().search(&mut game, 60, &control, &mut rng, |_, _, _, _| {});
    let spent = start.elapsed();

    assert!(spent < limit + Duration::from_millis(250), "spent {spent:?}");
    let mv = result.best_move.unwrap();
    assert!(game.legal_moves().contains(&mv));
}

#[test]
fn result_comes_from_last_completed_depth() {
    let mut game = Game::from_fen(ITALIAN_FEN).unwrap();
    let control = SearchControl::new_timed(Duration::from_millis(500));
    let mut rng = StdRng::seed_from_u64(9);
    let mut completed = Vec::new();
    let result = bookless().search(&mut game, 60, &control, &mut rng, |depth, score, _, mv| {
        completed.push((depth, score, mv));
    });

    match completed.last() {
        Some(&(depth, score, mv)) => {
            assert_eq!(result.depth, depth);
            assert_eq!(result.score, score);
            assert_eq!(result.best_move, mv);
            assert_eq!(result.source, MoveSource::Search);
        }
        None => assert_eq!(result.source, MoveSource::Fallback),
    }
    assert!(result.depth < 60);
}
