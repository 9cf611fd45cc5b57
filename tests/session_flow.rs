//! Session turn handling and the interactive play loop

mod common;

use std::io::Cursor;

use common::board_with;
use rollout_ttt::{
    EngineConfig, Error,
    cli::commands::play,
    rollout::{Difficulty, RolloutEvaluator},
    tictactoe::{FirstMover, GameStatus, Session, Side},
};

fn quiet_config(first_mover: FirstMover) -> EngineConfig {
    EngineConfig {
        difficulty: Difficulty::Trivial,
        seed: Some(3),
        reset_delay_ms: 0,
        first_mover,
        ..EngineConfig::default()
    }
}

fn every_cell_in_order() -> String {
    (0..9).map(|i| format!("{i}\n")).collect()
}

mod session {
    use super::*;

    #[test]
    fn robot_only_moves_on_its_turn() {
        let mut session = Session::new(Side::Robot);
        let mut evaluator = RolloutEvaluator::with_seed(10, 1);

        let (first, status) = session.play_robot(&mut evaluator).unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(session.to_move(), Side::Player);
        assert!(matches!(
            session.play_robot(&mut evaluator),
            Err(Error::NotYourTurn { .. })
        ));
        assert!(!session.board().is_empty(first));
    }

    #[test]
    fn occupied_cell_does_not_pass_the_turn() {
        let mut session = Session::new(Side::Player);
        session.play(4, Side::Player).unwrap();
        session.play(0, Side::Robot).unwrap();

        assert!(matches!(
            session.play(0, Side::Player),
            Err(Error::IllegalMove { position: 0 })
        ));
        assert!(matches!(
            session.play(9, Side::Player),
            Err(Error::IllegalMove { position: 9 })
        ));
        assert_eq!(session.to_move(), Side::Player);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn robot_finishes_a_game_it_can_win() {
        // o o .
        // x . .
        // . . x
        let mut session = Session::new(Side::Robot);
        for (pos, side) in [
            (0, Side::Robot),
            (3, Side::Player),
            (1, Side::Robot),
            (8, Side::Player),
        ] {
            session.play(pos, side).unwrap();
        }
        assert_eq!(
            *session.board(),
            board_with(&[
                (0, Side::Robot),
                (1, Side::Robot),
                (3, Side::Player),
                (8, Side::Player),
            ])
        );

        let mut evaluator = RolloutEvaluator::from_difficulty(Difficulty::Hard, Some(11));
        let (position, status) = session.play_robot(&mut evaluator).unwrap();
        assert_eq!(position, 2);
        assert_eq!(status, GameStatus::Won(Side::Robot));
        assert_eq!(status.announcement(), Some("Robot won!!!"));
        assert!(matches!(
            session.play(5, Side::Player),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn full_game_between_two_robots_terminates() {
        let mut session = Session::new(Side::Robot);
        let mut robot = RolloutEvaluator::with_seed(10, 5);
        let mut other = RolloutEvaluator::with_seed(10, 6);

        while !session.status().is_terminal() {
            match session.to_move() {
                Side::Robot => {
                    session.play_robot(&mut robot).unwrap();
                }
                Side::Player => {
                    let position = other.choose(session.board(), Side::Player).unwrap();
                    session.play(position, Side::Player).unwrap();
                }
            }
        }

        assert!(session.history().len() >= 5);
        assert!(session.history().len() <= 9);
        assert_eq!(session.status(), session.board().status());
    }
}

mod play_loop {
    use super::*;

    #[test]
    fn scripted_game_finishes() {
        let config = quiet_config(FirstMover::Player);
        let input = Cursor::new(every_cell_in_order());
        let mut output = Vec::new();

        let summary = play::run(&config, Some(1), input, &mut output).unwrap();
        assert_eq!(summary.games, 1);
        assert_eq!(
            summary.robot_wins + summary.player_wins + summary.draws,
            1
        );

        let text = String::from_utf8(output).unwrap();
        assert!(["Robot won!!!", "You won!!!", "Draw!"]
            .iter()
            .any(|message| text.contains(message)));
    }

    #[test]
    fn robot_opens_when_configured() {
        let config = quiet_config(FirstMover::Robot);
        let input = Cursor::new("q\n");
        let mut output = Vec::new();

        let summary = play::run(&config, None, input, &mut output).unwrap();
        assert_eq!(summary.games, 0);
        assert!(String::from_utf8(output).unwrap().contains("Robot plays"));
    }

    #[test]
    fn quit_and_end_of_input_stop_the_loop() {
        let config = quiet_config(FirstMover::Player);

        let summary = play::run(&config, None, Cursor::new("quit\n0\n"), Vec::new()).unwrap();
        assert_eq!(summary.games, 0);

        let summary = play::run(&config, None, Cursor::new(""), Vec::new()).unwrap();
        assert_eq!(summary.games, 0);
    }

    #[test]
    fn bad_input_is_reported_and_ignored() {
        let config = quiet_config(FirstMover::Player);
        let input = Cursor::new("hello\n42\nd 1\nr\nq\n");
        let mut output = Vec::new();

        play::run(&config, None, input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Unrecognized input 'hello'"));
        assert!(text.contains("illegal move"), "{text}");
        assert!(text.contains("Difficulty set to easy."));
        assert!(text.contains("Restarted."));
    }
}
