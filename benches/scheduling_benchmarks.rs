//! Performance benchmarks for the shift roster engine.
//!
//! Measures full two-phase scheduling for rosters of increasing size, plus
//! the CSV import path.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_roster::adapters::csv_import::read_employees;
use shift_roster::models::{Day, Employee, ShiftKind};
use shift_roster::scheduling::Scheduler;

/// Builds a roster where each employee prefers a rotating shift on five days.
fn create_roster(size: usize) -> Vec<Employee> {
    (0..size)
        .map(|i| {
            let mut employee = Employee::new(format!("Employee {}", i));
            for (offset, day) in Day::ALL.into_iter().enumerate() {
                if (i + offset) % 7 < 5 {
                    employee.add_preference(day, ShiftKind::SCHEDULABLE[(i + offset) % 3]);
                }
            }
            employee
        })
        .collect()
}

/// Renders a roster as CSV text in the import format.
fn create_csv(size: usize) -> String {
    let mut csv = String::from("Name,Monday,Tuesday,Wednesday,Thursday,Friday,Saturday,Sunday\n");
    for i in 0..size {
        csv.push_str(&format!("Employee {}", i));
        for offset in 0..7 {
            csv.push(',');
            csv.push(['M', 'A', 'E', 'N'][(i + offset) % 4]);
        }
        csv.push('\n');
    }
    csv
}

fn bench_generate_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_schedule");

    for size in [5, 20, 100, 1000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| {
                let mut scheduler = Scheduler::new(roster.clone());
                black_box(scheduler.generate_seeded(42).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_csv_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_import");

    for size in [20, 1000] {
        let csv = create_csv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &csv, |b, csv| {
            b.iter(|| black_box(read_employees(csv.as_bytes(), "bench").unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_schedule, bench_csv_import);
criterion_main!(benches);
