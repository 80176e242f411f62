use bench_runner::core::compare::compare;
use bench_runner::core::execution::{RunOptions, run_spec};
use bench_runner::core::models::ExecutionOutcome;
use bench_runner::core::spec::TestSpecFile;
use bench_runner::core::value::Value;
use bench_runner::infra::command::Invoke;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::path::Path;
use tokio::runtime::Runtime;

/// Answers every invocation with the first argument, without spawning.
struct EchoInvoker;

impl Invoke for EchoInvoker {
    async fn invoke(&self, _source: &Path, args: &[Value]) -> ExecutionOutcome {
        ExecutionOutcome::Output(args.first().map(Value::to_string).unwrap_or_default())
    }
}

fn bench_compare(c: &mut Criterion) {
    let integer = Value::from(6_i64);
    let float = Value::from(2.9289682539);
    let glyph = Value::from("⊥");
    let text = Value::from("hello world");

    c.bench_function("compare_integer", |b| {
        b.iter(|| compare(black_box(&integer), black_box(Some("6")), None, None))
    });
    c.bench_function("compare_float_tolerance", |b| {
        b.iter(|| compare(black_box(&float), black_box(Some("2.928968254")), None, None))
    });
    c.bench_function("compare_boolean", |b| {
        b.iter(|| compare(black_box(&glyph), black_box(Some("false")), None, None))
    });
    c.bench_function("compare_string", |b| {
        b.iter(|| compare(black_box(&text), black_box(Some("hello world")), None, None))
    });
}

fn bench_run_spec(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let cases: Vec<String> = (0..200)
        .map(|i| format!(r#"{{ "input": [{i}], "expected": {i} }}"#))
        .collect();
    let document = format!(
        r#"{{ "category": "bench", "tests": [ {{ "name": "id", "file": "id.goth", "cases": [{}] }} ] }}"#,
        cases.join(",")
    );
    let spec = TestSpecFile::from_json_str(&document).unwrap();
    let options = RunOptions::default();

    c.bench_function("run_spec_200_cases", |b| {
        b.to_async(&rt)
            .iter(|| async { run_spec(&EchoInvoker, &spec, &options).await });
    });
}

criterion_group!(benches, bench_compare, bench_run_spec);
criterion_main!(benches);
