//! The `suggest` and `bench` commands driven in-process

use rollout_ttt::{
    EngineConfig,
    cli::commands::{
        bench::{self, BenchArgs, OpponentKind},
        suggest::{self, SuggestArgs},
    },
    pipeline::MatchResult,
    rollout::Difficulty,
    tictactoe::{FirstMover, Side},
};
use serde_json::Value;
use tempfile::tempdir;

fn seeded_config(difficulty: Difficulty, seed: u64) -> EngineConfig {
    EngineConfig {
        difficulty,
        seed: Some(seed),
        ..EngineConfig::default()
    }
}

fn suggest_args(board: &str, mover: Side, json: bool) -> SuggestArgs {
    SuggestArgs {
        board: board.to_string(),
        mover,
        json,
    }
}

fn quiet_bench(opponent: OpponentKind, games: usize) -> BenchArgs {
    BenchArgs {
        opponent,
        opponent_difficulty: Difficulty::Trivial,
        games,
        quiet: true,
        export: None,
    }
}

mod suggest_command {
    use super::*;

    #[test]
    fn json_lists_every_candidate_and_the_choice() {
        let config = seeded_config(Difficulty::Hard, 42);
        let mut out = Vec::new();

        let suggestion =
            suggest::run(&suggest_args("oo.xx....", Side::Robot, true), &config, &mut out)
                .unwrap();
        assert_eq!(suggestion.best, 2);

        let json: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["board"], "oo.xx....");
        assert_eq!(json["mover"], "robot");
        assert_eq!(json["rollouts_per_candidate"], 1000);
        assert_eq!(json["best"], 2);

        let positions: Vec<u64> = json["scores"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["position"].as_u64().unwrap())
            .collect();
        assert_eq!(positions, vec![2, 5, 6, 7, 8]);
        assert!(json["scores"][0]["score"].is_i64());
    }

    #[test]
    fn player_mover_scores_stay_robot_positive() {
        // o o .
        // x x .
        // o . .
        let config = seeded_config(Difficulty::Hard, 5);
        let suggestion = suggest::run(
            &suggest_args("oo.xx.o..", Side::Player, true),
            &config,
            Vec::new(),
        )
        .unwrap();

        let at_two = suggestion
            .scores
            .iter()
            .find(|s| s.position == 2)
            .unwrap()
            .score;
        assert!(at_two < 0);
        assert!(
            suggestion
                .scores
                .iter()
                .all(|s| s.position == 2 || s.score > at_two)
        );
        assert!(suggestion.best == 7 || suggestion.best == 8);
    }

    #[test]
    fn table_marks_the_best_cell() {
        let config = seeded_config(Difficulty::Hard, 1);
        let mut out = Vec::new();
        suggest::run(&suggest_args("oo.xx....", Side::Robot, false), &config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(" o | o | 2 "));
        assert!(text.contains("cell 2:"));
        let best_line = text.lines().find(|line| line.contains("<- best")).unwrap();
        assert!(best_line.contains("cell 2:"));
    }

    #[test]
    fn bad_boards_are_rejected() {
        let config = seeded_config(Difficulty::Trivial, 0);
        for board in ["oo.xx", "oo.xx....xxxxxzz", "oo.xz....", "xoxxoooxx"] {
            assert!(
                suggest::run(&suggest_args(board, Side::Robot, false), &config, Vec::new())
                    .is_err(),
                "{board}"
            );
        }
    }
}

mod bench_command {
    use super::*;

    #[test]
    fn reports_and_exports_the_match() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench.json");
        let config = seeded_config(Difficulty::Easy, 1);
        let args = BenchArgs {
            export: Some(path.clone()),
            ..quiet_bench(OpponentKind::Random, 10)
        };
        let mut out = Vec::new();

        let result = bench::run(&args, &config, &mut out).unwrap();
        assert_eq!(result.total_games, 10);
        assert_eq!(result.robot, "Robot-easy");
        assert_eq!(result.opponent, "Random");
        assert_eq!(MatchResult::load(&path).unwrap(), result);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Results exported to"));
        assert!(text.contains("Average length"));
    }

    #[test]
    fn uses_the_configured_first_mover() {
        let mut out = Vec::new();
        bench::run(
            &quiet_bench(OpponentKind::Blocking, 2),
            &seeded_config(Difficulty::Trivial, 3),
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let line = text.lines().find(|l| l.contains("First mover:")).unwrap();
        assert!(line.trim_end().ends_with("random"));

        let config = EngineConfig {
            first_mover: FirstMover::Alternate,
            ..seeded_config(Difficulty::Trivial, 3)
        };
        let mut out = Vec::new();
        bench::run(&quiet_bench(OpponentKind::Blocking, 2), &config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let line = text.lines().find(|l| l.contains("First mover:")).unwrap();
        assert!(line.trim_end().ends_with("alternate"));
    }

    #[test]
    fn same_seed_same_bench() {
        let config = seeded_config(Difficulty::Easy, 8);
        let args = quiet_bench(OpponentKind::Robot, 6);

        let first = bench::run(&args, &config, Vec::new()).unwrap();
        let second = bench::run(&args, &config, Vec::new()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.opponent, "Robot-trivial");
    }
}
