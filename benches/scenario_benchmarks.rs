//! Performance benchmarks for the Compensation Scenario Engine.
//!
//! - Pure scenario computation
//! - Request validation (numeric text parsing included)
//! - Single submission through the HTTP router
//! - Batch of 100 submissions through the HTTP router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use compensation_engine::api::{AppState, EmployeeDetailsRequest, create_router};
use compensation_engine::calculation::compute_scenarios;
use compensation_engine::config::ConfigLoader;
use compensation_engine::models::{CompensationRequest, ScenarioInputs};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a fresh state with the shipped role salary catalog.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::in_memory(&config)
}

fn create_body(employee_id: &str) -> String {
    serde_json::json!({
        "employeeId": employee_id,
        "employeeName": "Bench Employee",
        "city": "Berlin",
        "role": "Software Engineer",
        "currentSalary": "50000",
        "requestedSalary": 60000,
        "staffingSalaryPerMonth": "7000.50",
        "monthsForStaffing": 3,
        "recruitmentCost": 5000
    })
    .to_string()
}

fn submit_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/employee-details")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Benchmark: pure scenario computation.
fn bench_compute_scenarios(c: &mut Criterion) {
    let inputs = ScenarioInputs {
        current_salary: Decimal::new(50000, 0),
        requested_salary: Decimal::new(60000, 0),
        staffing_salary_per_month: Decimal::new(700050, 2),
        months_for_staffing: Decimal::new(35, 1),
        recruitment_cost: Decimal::new(5000, 0),
    };
    let market_salary = Decimal::new(55000, 0);

    c.bench_function("compute_scenarios", |b| {
        b.iter(|| compute_scenarios(black_box(&inputs), black_box(market_salary)))
    });
}

/// Benchmark: body deserialization plus validation.
fn bench_validation(c: &mut Criterion) {
    let body = create_body("E-bench");

    c.bench_function("validate_request", |b| {
        b.iter(|| {
            let raw: EmployeeDetailsRequest = serde_json::from_str(black_box(&body)).unwrap();
            black_box(CompensationRequest::try_from(raw).unwrap())
        })
    });
}

/// Benchmark: one submission through the router.
fn bench_single_submission(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let body = create_body("E-bench");

    c.bench_function("single_submission", |b| {
        b.to_async(&rt).iter(|| async {
            // Fresh state so the employee ID never collides.
            let router = create_router(create_test_state());
            let response = router.oneshot(submit_request(body.clone())).await.unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 submissions sharing one store.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let bodies: Vec<String> = (0..100)
        .map(|i| create_body(&format!("E-batch-{:03}", i)))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(create_test_state());
            let mut results = Vec::with_capacity(bodies.len());
            for body in &bodies {
                let response = router
                    .clone()
                    .oneshot(submit_request(body.clone()))
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_scenarios,
    bench_validation,
    bench_single_submission,
    bench_batch_100,
);
criterion_main!(benches);
