use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use pretty_assertions::assert_eq;

use acpcalc::{programs::*, types::*, *};

fn roster_from_file(path: &str, profile: &RosterProfile) -> Roster {
    let path = Path::new(path);
    let mut f = File::open(path).unwrap();
    let mut rosterstring = String::new();
    f.read_to_string(&mut rosterstring).unwrap();
    Roster::from_csv(&rosterstring, profile).unwrap()
}

/// Igualdad aproximada para valores calculados
pub fn approx_equal(expected: f64, got: f64) -> bool {
    let diff = expected - got;
    let res = diff.abs() < 1e-6;
    if !res {
        eprintln!("Expected: {}, Got: {}, Diff: {}", expected, got, diff);
    }
    res
}

#[test]
fn berdo_fines_from_roster() {
    let program = Program::BERDO;
    let roster = roster_from_file("test_data/berdo_test_roster.csv", program.profile());
    assert_eq!(roster.buildings.len(), 3);

    let factors = program.factors().unwrap();
    let assessment = compute_fines(&roster, &factors, &program.params(2025, 2026)).unwrap();

    assert!(assessment.failures.is_empty());
    assert_eq!(assessment.fines[0].id, "100001");
    assert_eq!(assessment.fines[0].amount, 38825);
    // bajo el umbral los dos años
    assert_eq!(assessment.fines[1].amount, 0);
    // sin superficie declarada no hay años sancionables
    assert_eq!(assessment.fines[2].amount, 0);

    let aggregates = aggregate_fines(&assessment.fines);
    assert_eq!(aggregates.len(), 2);
    assert_eq!(aggregates[0].category, "Hotel");
    assert_eq!(aggregates[0].amount, 0);
    assert_eq!(aggregates[1].category, "Office");
    assert_eq!(aggregates[1].amount, 38825);
}

#[test]
fn berdo_fines_with_user_factors() {
    let program = Program::BERDO;
    let roster = roster_from_file("test_data/berdo_test_roster.csv", program.profile());
    let factors: FactorTable = "#META FUENTE: factores de ensayo
*, NATURALGAS, 10.0
*, ELECTRICITY, 5.0
"
    .parse()
    .unwrap();
    let assessment = compute_fines(&roster, &factors, &program.params(2025, 2026)).unwrap();
    let total: i64 = assessment.fines.iter().map(|f| f.amount).sum();
    assert_eq!(total, 0);
}

#[test]
fn aggregation_does_not_depend_on_the_split() {
    let program = Program::BERDO;
    let roster = roster_from_file("test_data/berdo_test_roster.csv", program.profile());
    let factors = program.factors().unwrap();
    let params = program.params(2025, 2026);

    let full = compute_fines(&roster, &factors, &params).unwrap();

    // el mismo censo evaluado en dos partes
    let (head, tail) = roster.buildings.split_at(1);
    let part1 = Roster {
        rmeta: vec![],
        buildings: head.to_vec(),
    };
    let part2 = Roster {
        rmeta: vec![],
        buildings: tail.to_vec(),
    };
    let mut fines = compute_fines(&part1, &factors, &params).unwrap().fines;
    fines.extend(compute_fines(&part2, &factors, &params).unwrap().fines);

    assert_eq!(aggregate_fines(&full.fines), aggregate_fines(&fines));
}

#[test]
fn beudo_baseline_thresholds_and_fines() {
    let program = Program::BEUDO;
    let mut roster = roster_from_file("test_data/beudo_test_roster.csv", program.profile());
    // la fila residencial y la del año de datos 2020 quedan fuera
    assert_eq!(roster.buildings.len(), 2);

    let factors = program.factors().unwrap();
    augment_thresholds(&mut roster, &factors, BEUDO_BASELINE_YEAR).unwrap();

    // edificio grande: calendario 0.8/0.4/0.0 sobre 53.11 t CO2e
    let large = &roster.buildings[0];
    assert_eq!(large.id, "2001");
    assert!(approx_equal(42.488, large.thresholds[&2025]));
    assert!(approx_equal(21.244, large.thresholds[&2030]));
    assert!(approx_equal(0.0, large.thresholds[&2035]));

    // edificio pequeño: calendario 1.0/0.6/... sobre 21.244 t CO2e
    let small = &roster.buildings[1];
    assert_eq!(small.id, "2002");
    assert!(approx_equal(21.244, small.thresholds[&2025]));
    assert!(approx_equal(12.7464, small.thresholds[&2030]));

    let assessment = compute_fines(&roster, &factors, &program.params(2025, 2030)).unwrap();
    assert!(assessment.failures.is_empty());
    assert_eq!(assessment.fines[0].amount, 19884);
    assert_eq!(assessment.fines[1].amount, 1988);
}

#[test]
fn ll97_limits_and_failures() {
    let program = Program::LL97;
    let mut roster = roster_from_file("test_data/ll97_test_roster.csv", program.profile());
    // exentos y filas sin superficie o sin intensidad declarada quedan fuera
    assert_eq!(roster.buildings.len(), 2);

    assign_thresholds(&mut roster, LL97_CATEGORY_LIMITS, 2029, 2030);
    let office = &roster.buildings[0];
    assert_eq!(office.thresholds[&2029], 8.46);
    assert_eq!(office.thresholds[&2030], 4.53);
    // tipo de uso sin límite definido, sin umbrales
    assert!(roster.buildings[1].thresholds.is_empty());

    let factors = program.factors().unwrap();
    let assessment = compute_fines(&roster, &factors, &program.params(2029, 2030)).unwrap();
    assert_eq!(assessment.fines.len(), 1);
    assert_eq!(assessment.fines[0].id, "3001");
    assert_eq!(assessment.fines[0].amount, 32321);

    assert_eq!(assessment.failures.len(), 1);
    let failure = &assessment.failures[0];
    assert_eq!(failure.id, "3002");
    assert_eq!(
        failure.error,
        "No compliance threshold for building 3002 in year 2029"
    );
}

#[test]
fn census_statistics() {
    let program = Program::BERDO;
    let roster = roster_from_file("test_data/berdo_test_roster.csv", program.profile());

    let allocation = category_allocation(&roster.buildings);
    assert_eq!(allocation.len(), 2);
    assert_eq!(allocation[0].category, "Hotel");
    assert_eq!(allocation[0].count, 1);
    assert_eq!(allocation[1].category, "Office");
    assert_eq!(allocation[1].count, 2);
    assert!(approx_equal(150_000.0, allocation[1].floor_area));
    assert!(approx_equal(100.0, allocation[1].pct_floor_area));

    let gfa = category_summary(&roster.buildings, &GFA_BINS, |b| b.floor_area);
    let office = &gfa[1];
    assert_eq!(office.count, 2);
    assert!(approx_equal(75_000.0, office.median));
    // 50000 ft2 cierra el primer intervalo y 100000 ft2 el segundo
    assert_eq!(office.bin_counts, vec![1, 1, 0, 0, 0, 0]);
    // sin superficie no hay valores que resumir
    assert_eq!(gfa[0].count, 0);
    assert!(gfa[0].median.is_nan());
}
