#![cfg(feature = "serde")]

use queens_gambit::evolution::EvolutionOptions;
use queens_gambit::individual::Individual;

#[test]
fn test_individual_round_trip() {
    let individual = Individual::from_genes(vec![2, 4, 1, 3]).unwrap();

    let json = serde_json::to_string(&individual).unwrap();
    let back: Individual = serde_json::from_str(&json).unwrap();

    assert_eq!(back, individual);
}

#[test]
fn test_evolution_options_round_trip() {
    let options = EvolutionOptions::builder()
        .board_size(15)
        .population_size(200)
        .mutation_probability(0.2)
        .build();

    let json = serde_json::to_string(&options).unwrap();
    let back: EvolutionOptions = serde_json::from_str(&json).unwrap();

    assert_eq!(back.get_board_size(), options.get_board_size());
    assert_eq!(back.get_population_size(), options.get_population_size());
    assert_eq!(
        back.get_mutation_probability(),
        options.get_mutation_probability()
    );
}
