//! End-to-end tests for the scripted walkthrough and the session layer
//! driving it.

use twisty::cube::{Cube, ScrambleRng};
use twisty::session::SessionBuilder;
use twisty::solver::{ScriptedSolver, SCRIPT_MOVE_COUNT};

#[test]
fn test_walkthrough_records_every_move() {
    let mut cube = Cube::solved();
    cube.scramble(20, &mut ScrambleRng::new(2024));

    let walkthrough = ScriptedSolver::new(cube).solve();
    assert_eq!(walkthrough.len(), SCRIPT_MOVE_COUNT + 1);

    assert!(walkthrough[0].mv.is_none());
    assert!(walkthrough.iter().skip(1).all(|step| step.mv.is_some()));
    assert!(walkthrough
        .iter()
        .all(|step| step.facelets.len() == 54));
}

#[test]
fn test_walkthrough_states_chain() {
    let mut cube = Cube::solved();
    cube.scramble(20, &mut ScrambleRng::new(404));

    let walkthrough = ScriptedSolver::new(cube).solve();

    let mut replay = cube;
    assert_eq!(walkthrough[0].facelets, replay.facelet_string());
    for step in walkthrough.iter().skip(1) {
        replay.apply(step.mv.unwrap());
        assert_eq!(step.facelets, replay.facelet_string());
    }
}

#[test]
fn test_session_full_flow() {
    let mut session = SessionBuilder::new().seed(2025).build();

    let scramble_len = session.scramble().len();
    assert_eq!(scramble_len, 20);
    assert!(!session.is_solved());

    let state_before_solve = *session.cube();
    session.solve();
    assert_eq!(session.cube(), &state_before_solve);

    // Walk to the end and back to the start.
    let len = session.walkthrough().unwrap().len();
    for _ in 0..len + 5 {
        session.step_forward();
    }
    assert_eq!(session.step_index(), len - 1);

    session.first_step();
    assert_eq!(
        session.current_step().unwrap().facelets,
        state_before_solve.facelet_string()
    );

    session.reset();
    assert!(session.is_solved());
    assert!(session.walkthrough().is_none());
}

#[test]
fn test_sessions_with_same_seed_replay_identically() {
    let run = |seed: u64| {
        let mut session = SessionBuilder::new().seed(seed).build();
        session.scramble();
        session.solve();
        let last = session.walkthrough().unwrap().len() - 1;
        session.last_step();
        (
            session.facelet_string(),
            session.current_step().unwrap().facelets.clone(),
            last,
        )
    };

    assert_eq!(run(555), run(555));
}
