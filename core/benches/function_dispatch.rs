//! Benchmark: member dispatch paths
//!
//! Compares the cost of adding integers through:
//! 1. `PhotonInt`, which answers `+` itself
//! 2. An Int `PObject`, which looks `+` up in the `Int` method table
//! 3. The host dispatch registry routing to a wrapped value
//!
//! Run with: `cargo bench --bench function_dispatch`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use photon_core::{
    dispatch::{DispatchRegistry, Receiver},
    interop::Interop,
    types::INT_TYPE,
    values::Value,
};

fn bench_photon_int(c: &mut Criterion) {
    c.bench_function("photon_int_plus", |b| {
        b.iter(|| {
            let mut sum = Value::int(0);
            for i in 0..1000 {
                sum = sum.invoke_member("+", &[Value::int(black_box(i))]).unwrap();
            }
            sum.as_int()
        })
    });
}

fn bench_method_table(c: &mut Criterion) {
    c.bench_function("object_plus", |b| {
        b.iter(|| {
            let mut sum = Value::object(0i32, &INT_TYPE);
            for i in 0..1000 {
                let rhs = Value::object(black_box(i), &INT_TYPE);
                sum = sum.invoke_member("+", &[rhs]).unwrap();
            }
            sum.as_object().and_then(|obj| obj.payload::<i32>().copied())
        })
    });
}

fn bench_registry(c: &mut Criterion) {
    let registry = DispatchRegistry::global();

    c.bench_function("registry_photon_int_plus", |b| {
        b.iter(|| {
            let mut sum = Value::int(0);
            for i in 0..1000 {
                sum = registry
                    .invoke(Receiver::Value(&sum), "+", &[Value::int(black_box(i))])
                    .unwrap();
            }
            sum.as_int()
        })
    });
}

fn bench_direct_call(c: &mut Criterion) {
    // Baseline: plain host arithmetic (no indirection)
    c.bench_function("direct_add", |b| {
        b.iter(|| {
            let mut sum = 0i32;
            for i in 0..1000 {
                sum = sum.wrapping_add(black_box(i));
            }
            sum
        })
    });
}

criterion_group!(
    benches,
    bench_direct_call,
    bench_photon_int,
    bench_method_table,
    bench_registry
);
criterion_main!(benches);
