//! Benchmarks comparing dlist against the std sequence types.
//!
//! Run with: cargo bench
//!
//! Containers are pre-sized where they support it, so steady-state numbers
//! are not dominated by growth.

use std::collections::{LinkedList, VecDeque};

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use dlist::DList;

const N: usize = 10_000;

// ============================================================================
// Push Benchmarks
// ============================================================================

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    group.throughput(Throughput::Elements(N as u64));

    // Pre-allocate ONCE, reuse via clear()
    let mut list = DList::with_capacity(N);
    let mut linked = LinkedList::new();
    let mut deque = VecDeque::with_capacity(N);

    group.bench_function("dlist", |b| {
        b.iter(|| {
            for i in 0..N as i64 {
                black_box(list.push_back(i).unwrap());
            }
            list.clear();
        });
    });

    group.bench_function("linked_list", |b| {
        b.iter(|| {
            for i in 0..N as i64 {
                linked.push_back(black_box(i));
            }
            linked.clear();
        });
    });

    group.bench_function("vec_deque", |b| {
        b.iter(|| {
            for i in 0..N as i64 {
                deque.push_back(black_box(i));
            }
            deque.clear();
        });
    });

    group.finish();
}

// ============================================================================
// Churn (Push/Pop Cycle)
// ============================================================================

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");

    const CYCLES: usize = 10_000;
    group.throughput(Throughput::Elements(CYCLES as u64 * 2)); // push + pop

    let mut list = DList::with_capacity(64);
    let mut linked = LinkedList::new();
    let mut deque = VecDeque::with_capacity(64);

    group.bench_function("dlist", |b| {
        b.iter(|| {
            for i in 0..CYCLES as i64 {
                list.push_front(i).unwrap();
                black_box(list.pop_back());
            }
        });
    });

    group.bench_function("linked_list", |b| {
        b.iter(|| {
            for i in 0..CYCLES as i64 {
                linked.push_front(i);
                black_box(linked.pop_back());
            }
        });
    });

    group.bench_function("vec_deque", |b| {
        b.iter(|| {
            for i in 0..CYCLES as i64 {
                deque.push_front(i);
                black_box(deque.pop_back());
            }
        });
    });

    group.finish();
}

// ============================================================================
// Traversal (Worst-Case Find)
// ============================================================================

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    group.throughput(Throughput::Elements(N as u64));

    let mut list = DList::with_capacity(N);
    let mut linked = LinkedList::new();
    let mut deque = VecDeque::with_capacity(N);
    for i in 0..N as i64 {
        list.push_back(i).unwrap();
        linked.push_back(i);
        deque.push_back(i);
    }

    let needle = (N - 1) as i64; // last element: full scan

    group.bench_function("dlist", |b| {
        b.iter(|| black_box(list.find(black_box(needle))));
    });

    group.bench_function("linked_list", |b| {
        b.iter(|| black_box(linked.iter().position(|&v| v == black_box(needle))));
    });

    group.bench_function("vec_deque", |b| {
        b.iter(|| black_box(deque.iter().position(|&v| v == black_box(needle))));
    });

    group.finish();
}

// ============================================================================
// Reverse
// ============================================================================

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");
    group.throughput(Throughput::Elements(N as u64));

    let mut list = DList::with_capacity(N);
    for i in 0..N as i64 {
        list.push_back(i).unwrap();
    }
    let mut vec: Vec<i64> = (0..N as i64).collect();

    group.bench_function("dlist", |b| {
        b.iter(|| list.reverse());
    });

    group.bench_function("vec", |b| {
        b.iter(|| vec.reverse());
    });

    group.finish();
}

// ============================================================================
// Removal From the Middle
// ============================================================================

fn bench_remove_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_middle");

    const OPS: usize = 1_000;
    group.throughput(Throughput::Elements(OPS as u64));

    group.bench_function("dlist/remove_at", |b| {
        b.iter_with_setup(
            || {
                let mut list = DList::with_capacity(OPS * 2);
                for i in 0..(OPS * 2) as i64 {
                    list.push_back(i).unwrap();
                }
                list
            },
            |mut list| {
                for _ in 0..OPS {
                    black_box(list.remove_at(list.len() / 2).unwrap());
                }
            },
        );
    });

    group.bench_function("dlist/remove_node", |b| {
        b.iter_with_setup(
            || {
                let mut list = DList::with_capacity(OPS * 2);
                let ids: Vec<_> = (0..(OPS * 2) as i64)
                    .map(|i| list.push_back(i).unwrap())
                    .collect();
                (list, ids)
            },
            |(mut list, ids)| {
                // OPS handles out of the middle of the chain
                for id in ids.into_iter().skip(OPS / 2).take(OPS) {
                    black_box(list.remove_node(id).unwrap());
                }
            },
        );
    });

    group.bench_function("vec_deque", |b| {
        b.iter_with_setup(
            || (0..(OPS * 2) as i64).collect::<VecDeque<i64>>(),
            |mut deque| {
                for _ in 0..OPS {
                    black_box(deque.remove(deque.len() / 2).unwrap());
                }
            },
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_churn,
    bench_find,
    bench_reverse,
    bench_remove_middle,
);

criterion_main!(benches);
