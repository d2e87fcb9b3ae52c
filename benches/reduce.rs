//! Reduction benchmarks.
//!
//! Inputs are sums of full minterms over growing alphabets, so the merge
//! rounds and the covering table both scale with the variable count.
//!
//! Run with:
//! ```bash
//! cargo bench --bench reduce
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qmc_rs::dnf::ExpandedExpression;
use qmc_rs::reduce::Reduction;

/// Sum of every minterm over `n` variables whose index is not a multiple of `step`.
fn sum_of_minterms(n: usize, step: u32) -> String {
    let letters: Vec<char> = ('A'..='Z').take(n).collect();
    let mut terms = Vec::new();
    for m in 0..(1u32 << n) {
        if m % step == 0 {
            continue;
        }
        let mut term = String::new();
        for (i, &letter) in letters.iter().enumerate() {
            term.push(letter);
            if m & (1 << (n - 1 - i)) == 0 {
                term.push('\'');
            }
        }
        terms.push(term);
    }
    terms.join("+")
}

/// Product of `n` two-literal sums: `(A+B)(C+D)...`.
fn product_of_sums(n: usize) -> String {
    let letters: Vec<char> = ('A'..='Z').take(2 * n).collect();
    letters
        .chunks(2)
        .map(|pair| format!("({}+{})", pair[0], pair[1]))
        .collect()
}

fn bench_minterm_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce/minterms");
    group.sample_size(10);

    for n in [3, 4, 5, 6, 7] {
        let input = sum_of_minterms(n, 3);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("vars", n), &input, |b, input| {
            b.iter(|| Reduction::new(input).map(|r| r.to_string()));
        });
    }

    group.finish();
}

fn bench_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce/distribution");

    for n in [2, 3, 4, 5] {
        let input = product_of_sums(n);
        group.bench_with_input(BenchmarkId::new("expand", n), &input, |b, input| {
            b.iter(|| ExpandedExpression::parse(input));
        });
        group.bench_with_input(BenchmarkId::new("reduce", n), &input, |b, input| {
            b.iter(|| qmc_rs::reduce(input));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_minterm_scaling, bench_distribution);
criterion_main!(benches);
