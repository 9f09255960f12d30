use rand::SeedableRng;
use rand::rngs::StdRng;
use tv_schedule_ga::ga::{optimize, GaConfig, ScheduleChromosome};
use tv_schedule_ga::loader::ProgramTable;
use tv_schedule_ga::trials::{best_trial, run_trials, TrialParameters};
use tv_schedule_ga::Error;

const DATASET: &str = "\
Show,Ratings
Morning News,0.3
Cartoons,0.4
Talk Show,0.2
Drama Series,0.5
Documentary,0.25
Live Sports,0.45
";

#[test]
fn test_loads_dataset_and_optimizes() {
    let table = ProgramTable::from_reader(DATASET.as_bytes()).unwrap();
    assert_eq!(table.len(), 6);

    let mut rng = StdRng::seed_from_u64(42);
    let solution = optimize(&table.programs, &table.ratings, GaConfig::default(), &mut rng).unwrap();

    assert!(ScheduleChromosome::new(solution.schedule.clone()).is_permutation_of(&table.programs));
    assert!((solution.fitness - 2.1).abs() < 1e-9);
    assert_eq!(solution.history.len(), 51);
    assert_eq!(solution.slots()[0].order, 1);
}

#[test]
fn test_runs_default_trials_on_bundled_data() {
    let table = ProgramTable::from_path(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/data/program_ratings.csv"
    ))
    .unwrap();
    let trials = TrialParameters::defaults();
    let outcomes =
        run_trials(&table.programs, &table.ratings, &GaConfig::default(), &trials, 2024).unwrap();

    assert_eq!(outcomes.len(), 3);
    let total: f64 = table.programs.iter().map(|p| table.ratings.get(p).unwrap()).sum();
    for outcome in &outcomes {
        assert_eq!(outcome.solution.len(), table.len());
        assert!((outcome.fitness() - total).abs() < 1e-9);
    }
    assert!(best_trial(&outcomes).is_some());
}

#[test]
fn test_empty_dataset_is_a_configuration_error() {
    let table = ProgramTable::from_reader("Program,Rating\n".as_bytes()).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let err = optimize(&table.programs, &table.ratings, GaConfig::default(), &mut rng).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
