use crossword_csp::config::{Inference, Settings, ValueOrdering, VariableOrdering};
use crossword_csp::csp::SearchOptions;
use crossword_csp::generate::SolutionValidator;
use crossword_csp::puzzle::{
    create_example_puzzles, load_crossword, parse_structure, parse_words, Direction, Variable,
};
use crossword_csp::{solve_crossword, Crossword, CrosswordCreator, Solution};
use tempfile::tempdir;

fn all_options() -> Vec<SearchOptions> {
    let mut options = Vec::new();
    for variable_ordering in [VariableOrdering::MrvDegree, VariableOrdering::Static] {
        for value_ordering in [ValueOrdering::LeastConstraining, ValueOrdering::Lexicographic] {
            for inference in [Inference::None, Inference::MaintainArcConsistency] {
                options.push(SearchOptions {
                    variable_ordering,
                    value_ordering,
                    inference,
                });
            }
        }
    }
    options
}

#[test]
fn test_example_puzzle_end_to_end() {
    let temp_dir = tempdir().unwrap();
    create_example_puzzles(temp_dir.path()).unwrap();

    let mut settings = Settings::default();
    settings.input.structure_file = temp_dir.path().join("structure0.txt");
    settings.input.words_file = temp_dir.path().join("words0.txt");
    settings.validate().unwrap();

    let report = solve_crossword(&settings).unwrap();
    assert!(report.solved);
    assert!(report.statistics.search_invoked);

    let assignment = report.assignment.as_ref().unwrap();
    assert_eq!(assignment.get(&Variable::new(0, 1, Direction::Across, 3)), Some("SIX"));
    assert_eq!(assignment.get(&Variable::new(0, 1, Direction::Down, 5)), Some("SEVEN"));
    assert_eq!(assignment.get(&Variable::new(4, 1, Direction::Across, 4)), Some("NINE"));
    assert_eq!(assignment.get(&Variable::new(1, 4, Direction::Down, 4)), Some("FIVE"));

    let crossword = load_crossword(&settings.input.structure_file, &settings.input.words_file).unwrap();
    assert!(SolutionValidator::new(&crossword).validate(assignment).is_valid);
}

#[test]
fn test_larger_example_puzzle_solves() {
    let temp_dir = tempdir().unwrap();
    create_example_puzzles(temp_dir.path()).unwrap();
    let crossword = load_crossword(
        temp_dir.path().join("structure1.txt"),
        temp_dir.path().join("words1.txt"),
    )
    .unwrap();

    for options in all_options() {
        let mut creator = CrosswordCreator::new(crossword.clone(), options);
        assert!(creator.propagate().is_ok());

        let report = creator.solve_report();
        assert!(report.solved, "{:?}", options);

        let assignment = report.assignment.as_ref().unwrap();
        assert!(SolutionValidator::new(&crossword).validate(assignment).is_valid);
        assert_eq!(
            assignment.get(&Variable::new(2, 1, Direction::Across, 12)),
            Some("INTELLIGENCE")
        );
        assert_eq!(assignment.get(&Variable::new(8, 1, Direction::Across, 5)), Some("LOGIC"));
    }
}

#[test]
fn test_every_configuration_agrees_on_unique_fill() {
    let crossword = Crossword::new(
        parse_structure("#___#\n#_##_\n#_##_\n#_##_\n#____\n").unwrap(),
        parse_words("one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\nnine\nten\n"),
    )
    .unwrap();

    let mut fills = Vec::new();
    for options in all_options() {
        let mut creator = CrosswordCreator::new(crossword.clone(), options);
        let solution = creator.solve();
        let assignment = solution.assignment().unwrap();
        assert!(SolutionValidator::new(&crossword).validate(assignment).is_valid);
        fills.push(assignment.clone());
    }
    assert!(fills.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_unsolvable_by_uniqueness() {
    // A plus sign: both slots cross in the middle and must hold different words.
    let crossword = Crossword::from_variables(
        3,
        3,
        vec![
            Variable::new(1, 0, Direction::Across, 3),
            Variable::new(0, 1, Direction::Down, 3),
        ],
        parse_words("cat\ndog\nart\n"),
    )
    .unwrap();

    for options in all_options() {
        let mut creator = CrosswordCreator::new(crossword.clone(), options);
        assert_eq!(creator.solve(), Solution::NoSolution);
        assert!(creator.statistics().search_invoked);
    }
}

#[test]
fn test_words_file_with_noise() {
    let temp_dir = tempdir().unwrap();
    let structure = temp_dir.path().join("structure.txt");
    let words = temp_dir.path().join("words.txt");
    std::fs::write(&structure, "___\n_\n_\n").unwrap();
    std::fs::write(&words, "  cat \n\nCAR\ncar\nzebra\n").unwrap();

    let crossword = load_crossword(&structure, &words).unwrap();
    assert_eq!(crossword.words().len(), 3);
    assert_eq!(crossword.variables().len(), 2);

    let mut creator = CrosswordCreator::new(crossword, SearchOptions::default());
    let report = creator.solve_report();
    assert!(report.solved);
    assert_eq!(report.statistics.propagation.node_removals, 2);

    let reloaded = crossword_csp::SolveReport::from_json(&report.to_json().unwrap()).unwrap();
    assert_eq!(reloaded.assignment, report.assignment);
}
