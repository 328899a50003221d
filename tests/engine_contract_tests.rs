//! Contract verification for the engine's external surfaces: the facelet
//! string, the silent-ignore move symbols, scramble replayability, and
//! copy independence.

use twisty::cube::{notation, Color, Cube, Face, FaceMap, Move, ScrambleRng};
use twisty::net::{CubeNet, NetError, Rgb};

#[test]
fn test_solved_facelet_string_layout() {
    // 9 of each symbol, in URFDLB face order.
    let s = Cube::solved().facelet_string();
    assert_eq!(s.len(), 54);
    assert_eq!(&s[0..9], "wwwwwwwww");
    assert_eq!(&s[9..18], "rrrrrrrrr");
    assert_eq!(&s[18..27], "ggggggggg");
    assert_eq!(&s[27..36], "yyyyyyyyy");
    assert_eq!(&s[36..45], "ooooooooo");
    assert_eq!(&s[45..54], "bbbbbbbbb");
}

#[test]
fn test_facelet_string_row_major_within_face() {
    // Paint the up face with a marker at index 0 and 8 and check their
    // positions in the serialized string.
    let mut cube = Cube::solved();
    let mut facelets = cube.facelets();
    facelets[Face::Up][0] = Color::Green;
    facelets[Face::Up][8] = Color::Blue;
    cube.set_facelets(facelets);

    let s = cube.facelet_string();
    assert_eq!(&s[0..1], "g");
    assert_eq!(&s[8..9], "b");
    assert_eq!(&s[1..8], "wwwwwww");
}

#[test]
fn test_unrecognized_symbols_are_silent_noops() {
    let mut cube = Cube::solved();
    cube.scramble(10, &mut ScrambleRng::new(4));
    let before = cube;

    for symbol in ["", "X", "u", "R2", "M", "R''", "FR"] {
        assert!(!cube.apply_symbol(symbol), "{symbol:?} must be rejected");
        assert_eq!(cube, before, "{symbol:?} must not change state");
    }

    for symbol in ["U", "U'", "R", "R'", "F", "F'", "D", "D'", "L", "L'", "B", "B'"] {
        assert!(cube.apply_symbol(symbol), "{symbol:?} must be accepted");
    }
}

#[test]
fn test_scramble_is_replayable() {
    let mut rng = ScrambleRng::new(1234);
    let mut cube = Cube::solved();
    let moves = cube.scramble(20, &mut rng);
    assert_eq!(moves.len(), 20);

    // Replay by notation symbols, the way a frontend would display them.
    let mut replay = Cube::solved();
    for symbol in notation(&moves).split_whitespace() {
        assert!(replay.apply_symbol(symbol));
    }
    assert_eq!(replay, cube);
}

#[test]
fn test_state_copies_are_independent() {
    let mut engine = Cube::solved();
    engine.apply(Move::clockwise(Face::Up));

    let mut copy_a = engine.facelets();
    let copy_b = engine.facelets();

    copy_a[Face::Front] = [Color::White; 9];
    assert_ne!(copy_a, copy_b, "copies must not alias each other");
    assert_eq!(engine.facelets(), copy_b, "engine state must not change");

    engine.apply(Move::clockwise(Face::Right));
    assert_eq!(
        copy_b,
        {
            let mut c = Cube::solved();
            c.apply(Move::clockwise(Face::Up));
            c.facelets()
        },
        "earlier copies must not track later engine mutation"
    );
}

#[test]
fn test_set_facelets_round_trip_is_noop() {
    let mut cube = Cube::solved();
    cube.scramble(15, &mut ScrambleRng::new(77));
    let before = cube;

    let snapshot = cube.facelets();
    cube.set_facelets(snapshot);
    assert_eq!(cube, before);
}

#[test]
fn test_net_accepts_engine_output() {
    let mut cube = Cube::solved();
    cube.scramble(20, &mut ScrambleRng::new(6));

    let net = CubeNet::parse(&cube.facelet_string()).unwrap();
    for face in Face::ALL {
        for i in 0..9 {
            let expected = cube.face(face)[i];
            assert_ne!(
                net.facelet(face, i),
                Rgb::new(0xcc, 0xcc, 0xcc),
                "engine symbol {expected} must map to a real color"
            );
        }
    }
}

#[test]
fn test_net_length_error_propagates() {
    fn render(facelets: &str) -> Result<CubeNet, NetError> {
        let net = CubeNet::parse(facelets)?;
        Ok(net)
    }

    assert!(render(&Cube::solved().facelet_string()).is_ok());
    assert_eq!(render("wgb"), Err(NetError::Length(3)));
}

#[test]
fn test_net_handles_injected_malformed_state() {
    // setState-style injection of unknown content is accepted by the
    // engine and only surfaces downstream as fallback display colors.
    let cube = {
        let mut c = Cube::solved();
        c.set_facelets(FaceMap::with_value([Color::White; 9]));
        c
    };
    let s = cube.facelet_string();
    assert_eq!(s, "w".repeat(54));
    assert!(CubeNet::parse(&s).is_ok());
}
