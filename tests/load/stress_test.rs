#![cfg(test)]
//! Load Testing Suite
//!
//! Simulates many buildings at once, each run on its own thread with its own
//! generator, and checks the results match a sequential pass exactly.

use std::thread;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use energy_day_report::analytics::{AlertThresholds, DayReport};
use energy_day_report::domain::EnergyDay;
use energy_day_report::simulation::{EnergyDaySimulator, SimulationInputs};

const BUILDINGS: u64 = 256;

fn inputs_for(building: u64) -> SimulationInputs {
    SimulationInputs {
        seed: 0xC0FFEE ^ building.wrapping_mul(0x9E37_79B9_7F4A_7C15),
        building_name: format!("Building {building}"),
        date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        price_czk_per_kwh: 3.2,
    }
}

fn sequential(simulator: &EnergyDaySimulator) -> Vec<EnergyDay> {
    (0..BUILDINGS)
        .map(|b| simulator.run(&inputs_for(b)).unwrap())
        .collect()
}

#[test]
#[ignore]
fn test_concurrent_buildings_match_sequential() {
    let simulator = EnergyDaySimulator::default();
    let expected = sequential(&simulator);

    let start = Instant::now();
    let concurrent: Vec<EnergyDay> = thread::scope(|scope| {
        let handles: Vec<_> = (0..BUILDINGS)
            .map(|b| {
                let simulator = &simulator;
                scope.spawn(move || simulator.run(&inputs_for(b)).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    let elapsed = start.elapsed();

    println!("{BUILDINGS} buildings simulated concurrently in {elapsed:?}");
    assert_eq!(concurrent, expected);
}

#[test]
#[ignore]
fn test_bulk_report_throughput() {
    let simulator = EnergyDaySimulator::default();
    let thresholds = AlertThresholds::default();

    let start = Instant::now();
    let mut peaks = 0usize;
    for round in 0..10_000u64 {
        let day = simulator.run(&inputs_for(round)).unwrap();
        let report = DayReport::build(&day, &thresholds);
        peaks += report.top_hours.iter().filter(|r| r.ranked.is_peak).count();
    }
    let elapsed = start.elapsed();

    println!("10000 reports in {elapsed:?}, {peaks} peak rows");
    assert!(elapsed < Duration::from_secs(30));
}
