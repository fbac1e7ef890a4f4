use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

use heap_bench::report::CriterionReporter;
use heap_bench::{Registry, Suite, SuiteConfig};

// Every adapter, size and order the environment asks for, as one group.
fn bench_heaps(c: &mut Criterion) {
   let _ = env_logger::builder().is_test(false).try_init();

   let config = SuiteConfig::from_env().unwrap_or_else(|e| panic!("bad configuration: {e}"));
   let suite = Suite::new(config, Registry::builtin()).unwrap_or_else(|e| panic!("{e}"));

   let mut group = c.benchmark_group("heaps");
   let mut reporter = CriterionReporter::new(&mut group);
   suite.run(&mut reporter).unwrap_or_else(|e| panic!("{e}"));
   group.finish();
}

// Criterion setup
fn custom_criterion() -> Criterion {
   Criterion::default()
      .warm_up_time(Duration::from_secs(2))
      .measurement_time(Duration::from_secs(10))
      // N=1M drains take long enough that criterion's default 100 would
      // blow the measurement window
      .sample_size(20)
}

criterion_group! {
   name = benches;
   config = custom_criterion();
   targets = bench_heaps
}
criterion_main!(benches);
