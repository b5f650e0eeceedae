//! Properties of the legal move generator on hand-picked positions.

use tabia_core::{
    All, Captures, Color, MAX_MOVES, Move, MoveFlag, PieceKind, Position, Square, legal_moves,
    perft,
};

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    "4k3/8/8/8/2pPp3/8/8/4K3 b - d3 0 1",
];

fn pos(fen: &str) -> Position {
    fen.parse().unwrap()
}

fn uci(moves: &[Move]) -> Vec<String> {
    moves.iter().map(Move::to_string).collect()
}

#[test]
fn captures_mode_is_the_capture_subset_in_order() {
    for fen in POSITIONS {
        let mut position = pos(fen);
        let all = legal_moves::<All>(&mut position);
        let captures = legal_moves::<Captures>(&mut position);
        let expected: Vec<Move> = all.iter().copied().filter(|mv| mv.is_capture()).collect();
        assert_eq!(captures.as_slice(), expected.as_slice(), "{fen}");
    }
}

#[test]
fn every_move_is_sound() {
    for fen in POSITIONS {
        let mut position = pos(fen);
        let us = position.side_to_move();
        for &mv in &legal_moves::<All>(&mut position) {
            let piece = position.piece_on(mv.from()).expect("move from an empty square");
            assert_eq!(piece.color(), us, "{fen}: {mv} moves an enemy piece");
            if let Some(target) = position.piece_on(mv.to()) {
                assert_eq!(target.color(), !us, "{fen}: {mv} lands on a friendly piece");
                assert!(mv.is_capture(), "{fen}: {mv} takes a piece without a capture flag");
            }
            let after = position.play(mv);
            let king = after.king_square(us);
            assert!(!after.is_square_attacked_by(king, !us), "{fen}: {mv} leaves the king in check");
        }
    }
}

#[test]
fn make_unmake_restores_position_for_every_move() {
    for fen in POSITIONS {
        let mut position = pos(fen);
        let before = position.clone();
        for &mv in &legal_moves::<All>(&mut position) {
            let revert = position.make_turn(mv);
            assert_eq!(revert.played(), mv);
            position.unmake_turn(revert);
            assert_eq!(position, before, "{fen}: {mv}");
            assert_eq!(position.hash(), before.hash());
            assert_eq!(position.to_string(), before.to_string());
        }
    }
}

#[test]
fn nested_guards_unwind_in_order() {
    let mut position = Position::starting_position();
    let e4 = position.parse_uci_move("e2e4").unwrap();
    {
        let mut first = position.play(e4);
        let c5 = first.parse_uci_move("c7c5").unwrap();
        {
            let second = first.play(c5);
            assert_eq!(second.en_passant(), Some(Square::C6));
            assert_eq!(second.fullmove_number(), 2);
        }
        assert_eq!(first.en_passant(), Some(Square::E3));
        assert_eq!(first.side_to_move(), Color::Black);
    }
    assert_eq!(position, Position::starting_position());
}

#[test]
fn push_promotion_yields_four_distinct_moves() {
    let mut position = pos("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let promotions: Vec<Move> =
        legal_moves::<All>(&mut position).iter().copied().filter(|mv| mv.is_promotion()).collect();
    assert_eq!(uci(&promotions), ["a7a8q", "a7a8r", "a7a8b", "a7a8n"]);
    assert!(promotions.iter().all(|mv| !mv.is_capture()));
    let kinds: Vec<_> = promotions.iter().filter_map(|mv| mv.promotion_piece()).collect();
    assert_eq!(kinds, [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight]);
}

fn castles(fen: &str) -> Vec<MoveFlag> {
    let mut position = pos(fen);
    legal_moves::<All>(&mut position).iter().filter(|mv| mv.is_castle()).map(|mv| mv.flag()).collect()
}

#[test]
fn castling_with_free_safe_path() {
    assert_eq!(
        castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"),
        [MoveFlag::KingCastle, MoveFlag::QueenCastle]
    );
}

#[test]
fn blocked_path_suppresses_only_that_side() {
    assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K1NR w KQkq - 0 1"), [MoveFlag::QueenCastle]);
    assert_eq!(castles("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1"), [MoveFlag::KingCastle]);
}

#[test]
fn attacked_transit_or_landing_suppresses_only_that_side() {
    // Rook on f2 covers the transit square f1.
    assert_eq!(castles("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1"), [MoveFlag::QueenCastle]);
    // Bishop on a3 covers the landing square c1.
    assert_eq!(castles("r3k2r/8/8/8/8/b7/8/R3K2R w KQkq - 0 1"), [MoveFlag::KingCastle]);
    // An attacked b1 is irrelevant: the king never crosses it.
    assert_eq!(
        castles("r3k2r/8/8/8/4b3/8/8/R3K2R w KQkq - 0 1"),
        [MoveFlag::KingCastle, MoveFlag::QueenCastle]
    );
}

#[test]
fn forfeited_right_suppresses_only_that_side() {
    assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1"), [MoveFlag::QueenCastle]);
    assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b Kk - 0 1"), [MoveFlag::KingCastle]);
}

#[test]
fn no_castling_while_in_check() {
    assert!(castles("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1").is_empty());
}

#[test]
fn en_passant_only_from_adjacent_pawns() {
    let mut position = pos("4k3/8/8/1P1pP3/8/8/8/4K3 w - d6 0 1");
    let moves = legal_moves::<All>(&mut position);
    let ep: Vec<Move> = moves.iter().copied().filter(|mv| mv.is_en_passant()).collect();
    assert_eq!(ep, [Move::new(Square::E5, Square::D6, MoveFlag::EnPassant)]);

    let after = position.play(ep[0]);
    assert_eq!(after.piece_on(Square::D5), None);
    assert_eq!(after.piece_on(Square::D6).map(|p| p.kind()), Some(PieceKind::Pawn));
    assert_eq!(after.pieces(PieceKind::Pawn, Color::Black).count(), 0);
}

#[test]
fn en_passant_that_exposes_the_king_is_dropped() {
    let mut position = pos("4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1");
    assert!(legal_moves::<All>(&mut position).iter().all(|mv| !mv.is_en_passant()));
}

#[test]
fn captures_mode_omits_quiet_check_evasions() {
    // Every way out of check is quiet: a block on e3 or a king step.
    let mut position = pos("4r2k/8/8/8/8/8/5B2/4K3 w - - 0 1");
    assert!(position.in_check());
    let all = legal_moves::<All>(&mut position);
    assert!(all.iter().any(|mv| mv.to_string() == "f2e3"));
    assert!(legal_moves::<Captures>(&mut position).is_empty());
}

#[test]
fn reference_position_has_max_moves() {
    let mut position = pos("R6R/3Q4/1Q4Q1/4Q3/2Q4Q/Q4Q2/pp1Q4/kBNN1KB1 w - - 0 1");
    let moves = legal_moves::<All>(&mut position);
    assert_eq!(moves.len(), MAX_MOVES);
    assert_eq!(moves.len(), 218);
}

#[test]
fn checkmate_and_stalemate_have_no_moves() {
    let mut mate = pos("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert!(mate.in_check());
    assert!(legal_moves::<All>(&mut mate).is_empty());

    let mut stalemate = pos("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!stalemate.in_check());
    assert!(legal_moves::<All>(&mut stalemate).is_empty());
}

#[test]
fn move_counters_at_u16_max_do_not_break_generation() {
    let mut halfmove = pos("4k3/8/8/8/8/8/8/R3K3 w - - 65535 1");
    assert_eq!(legal_moves::<All>(&mut halfmove).len(), 15);
    assert_eq!(halfmove.halfmove_clock(), 65535);

    let mut fullmove = pos("4k3/8/8/8/8/8/8/R3K3 b - - 0 65535");
    assert_eq!(perft(&mut fullmove, 1), 5);
    assert_eq!(perft(&mut fullmove, 2), 75);
    assert_eq!(fullmove.fullmove_number(), 65535);
}
