use core::hash::BuildHasher;
use core::hash::Hash;
use core::hash::Hasher;
use core::hint::black_box;

use chain_hash::HashMap as ChainHashMap;
use chain_hash::HashTable as ChainHashTable;
use chain_hash::hash_table::Entry as ChainEntry;
use chain_hash::pipeline::terminal;
use chain_hash::pipeline::transform;
use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::hash_table::Entry as HashbrownEntry;
use hashbrown::hash_table::HashTable as HashbrownHashTable;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::distr;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use siphasher::sip::SipHasher;

trait KeyValuePair: Clone {
    fn new(key: u64) -> Self;

    fn hash_key(&self) -> u64;
    fn eq_key(&self, other: &Self) -> bool;
}

#[derive(Clone)]
struct TestItem {
    key: String,
    _value: u64,
}

impl KeyValuePair for TestItem {
    fn new(key: u64) -> Self {
        black_box(Self {
            key: format!("key_{:016X}", key),
            _value: key,
        })
    }

    fn hash_key(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.key.hash(&mut hasher);
        hasher.finish()
    }

    fn eq_key(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

#[derive(Clone)]
struct SmallTestItem {
    key: u64,
}

impl KeyValuePair for SmallTestItem {
    fn new(key: u64) -> Self {
        black_box(Self { key })
    }

    fn hash_key(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.key.hash(&mut hasher);
        hasher.finish()
    }

    fn eq_key(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

#[derive(Clone, Copy, Default)]
struct SipBuilder;

impl BuildHasher for SipBuilder {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> SipHasher {
        SipHasher::new()
    }
}

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 12),
    (1 << 14),
    (1 << 16),
    (1 << 18),
];

fn random_items<T: KeyValuePair>(count: usize) -> Vec<(u64, T)> {
    let mut rng = OsRng;
    (0..count)
        .map(|_| {
            let item = T::new(rng.try_next_u64().unwrap());
            (item.hash_key(), item)
        })
        .collect()
}

fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.shuffle(&mut SmallRng::from_os_rng());
    items
}

fn chain_table_of<T: KeyValuePair>(items: &[(u64, T)]) -> ChainHashTable<T> {
    let mut table = ChainHashTable::with_capacity(items.len());
    for (hash, item) in items {
        if let ChainEntry::Vacant(entry) = table.entry(*hash, |v| v.eq_key(item)) {
            entry.insert(item.clone());
        }
    }
    table
}

fn hashbrown_table_of<T: KeyValuePair>(items: &[(u64, T)]) -> HashbrownHashTable<T> {
    let mut table = HashbrownHashTable::with_capacity(items.len());
    for (hash, item) in items {
        if let HashbrownEntry::Vacant(entry) = table.entry(*hash, |v| v.eq_key(item), |v| v.hash_key()) {
            entry.insert(item.clone());
        }
    }
    table
}

fn bench_insert_random<T: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("insert_random_{}", core::any::type_name::<T>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = random_items::<T>(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || shuffled(&hash_and_item),
                |hash_and_item| {
                    let mut table = ChainHashTable::<T>::with_capacity(0);
                    for (hash, item) in hash_and_item {
                        match table.entry(hash, |v| v.eq_key(&item)) {
                            ChainEntry::Vacant(entry) => {
                                black_box(entry.insert(item));
                            }
                            ChainEntry::Occupied(_) => unreachable!(),
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || shuffled(&hash_and_item),
                |hash_and_item| {
                    let mut table = HashbrownHashTable::with_capacity(0);
                    for (hash, item) in hash_and_item {
                        match table.entry(hash, |v: &T| v.eq_key(&item), |v| v.hash_key()) {
                            HashbrownEntry::Vacant(entry) => {
                                black_box(entry.insert(item));
                            }
                            HashbrownEntry::Occupied(_) => unreachable!(),
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find_hit_miss<T: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("find_hit_miss_{}", core::any::type_name::<T>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let present = random_items::<T>(size);
        let absent = random_items::<T>(size);
        let mut probes = present.clone();
        probes.extend(absent.iter().cloned());
        let probes = shuffled(&probes);

        let chain = chain_table_of(&present);
        let hashbrown = hashbrown_table_of(&present);

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for (hash, item) in &probes {
                    if chain.find(*hash, |v| v.eq_key(item)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for (hash, item) in &probes {
                    if hashbrown.find(*hash, |v| v.eq_key(item)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }

    group.finish();
}

fn bench_remove<T: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("remove_{}", core::any::type_name::<T>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = random_items::<T>(size);
        let order = shuffled(&hash_and_item);
        let chain = chain_table_of(&hash_and_item);
        let hashbrown = hashbrown_table_of(&hash_and_item);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || chain.clone(),
                |mut table| {
                    for (hash, item) in &order {
                        black_box(table.remove(*hash, |v| v.eq_key(item)));
                    }
                    black_box(table)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || hashbrown.clone(),
                |mut table| {
                    for (hash, item) in &order {
                        if let Ok(entry) = table.find_entry(*hash, |v| v.eq_key(item)) {
                            black_box(entry.remove().0);
                        }
                    }
                    black_box(table)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_iteration<T: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("iteration_{}", core::any::type_name::<T>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = random_items::<T>(size);
        let mut chain = chain_table_of(&hash_and_item);
        // Leave holes in the arena so iteration has to skip free slots.
        for (hash, item) in hash_and_item.iter().step_by(4) {
            chain.remove(*hash, |v| v.eq_key(item));
        }
        let mut hashbrown = hashbrown_table_of(&hash_and_item);
        for (hash, item) in hash_and_item.iter().step_by(4) {
            if let Ok(entry) = hashbrown.find_entry(*hash, |v| v.eq_key(item)) {
                entry.remove();
            }
        }

        group.throughput(Throughput::Elements(chain.len() as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                for item in chain.iter() {
                    black_box(item);
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for item in hashbrown.iter() {
                    black_box(item);
                }
            })
        });
    }

    group.finish();
}

fn bench_churn<T: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("churn_{}", core::any::type_name::<T>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let insertions_and_removals = (0..size)
            .flat_map(|i| {
                let item = T::new(i as u64);
                let hash = item.hash_key();
                [(hash, item.clone()), (hash, item)]
            })
            .collect::<Vec<(u64, T)>>();

        group.throughput(Throughput::Elements(insertions_and_removals.len() as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || shuffled(&insertions_and_removals),
                |hash_and_item| {
                    let mut table = ChainHashTable::<T>::with_capacity(0);
                    for (hash, item) in hash_and_item {
                        match table.entry(hash, |v| v.eq_key(&item)) {
                            ChainEntry::Vacant(entry) => {
                                entry.insert(item);
                            }
                            ChainEntry::Occupied(entry) => {
                                black_box(entry.remove());
                            }
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || shuffled(&insertions_and_removals),
                |hash_and_item| {
                    let mut table = HashbrownHashTable::<T>::with_capacity(0);
                    for (hash, item) in hash_and_item {
                        match table.entry(hash, |v| v.eq_key(&item), |v| v.hash_key()) {
                            HashbrownEntry::Vacant(entry) => {
                                black_box(entry.insert(item));
                            }
                            HashbrownEntry::Occupied(entry) => {
                                black_box(entry.remove().0);
                            }
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_mixed_zipf<const MAX_SIZE: usize>(c: &mut Criterion) {
    const OPS: usize = 10_000;

    let mut group = c.benchmark_group("mixed_zipf_map");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        // 0: put, 1: get, 2: remove. Skewed keys keep hot chains busy.
        let mut rng = SmallRng::from_os_rng();
        let key_distr = Zipf::new(size as f32 * 2.0, 1.0).unwrap();
        let ops = (0..OPS)
            .map(|_| {
                let op: f64 = rng.sample(distr::Uniform::new(0.0, 1.0).unwrap());
                let key = rng.sample(key_distr) as u64;
                let kind = if op < 0.4 {
                    0u8
                } else if op < 0.9 {
                    1
                } else {
                    2
                };
                (kind, key)
            })
            .collect::<Vec<_>>();

        group.throughput(Throughput::Elements(OPS as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || ChainHashMap::<u64, u64, SipBuilder>::with_capacity_and_hasher(size, SipBuilder),
                |mut map| {
                    for &(kind, key) in &ops {
                        match kind {
                            0 => {
                                black_box(map.put(key, key));
                            }
                            1 => {
                                black_box(map.get(&key));
                            }
                            _ => {
                                black_box(map.remove(&key));
                            }
                        }
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || std::collections::HashMap::<u64, u64, SipBuilder>::with_capacity_and_hasher(size, SipBuilder),
                |mut map| {
                    for &(kind, key) in &ops {
                        match kind {
                            0 => {
                                black_box(map.insert(key, key));
                            }
                            1 => {
                                black_box(map.get(&key));
                            }
                            _ => {
                                black_box(map.remove(&key));
                            }
                        }
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_pipeline<const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_sum_of_even_values");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let map: ChainHashMap<u64, u64> = (0..size as u64).map(|k| (k, k * 3)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("pipeline/{size}"), |b| {
            b.iter(|| {
                black_box(terminal::sum(transform::filter(
                    |v: &u64| v % 2 == 0,
                    map.values().copied(),
                )))
            })
        });

        group.bench_function(format!("iterator/{size}"), |b| {
            b.iter(|| black_box(map.values().copied().filter(|v| v % 2 == 0).sum::<u64>()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random::<SmallTestItem, 4>,
    bench_insert_random::<TestItem, 4>,
    bench_find_hit_miss::<SmallTestItem, 4>,
    bench_find_hit_miss::<TestItem, 4>,
    bench_remove::<SmallTestItem, 4>,
    bench_remove::<TestItem, 4>,
    bench_iteration::<SmallTestItem, 4>,
    bench_iteration::<TestItem, 4>,
    bench_churn::<SmallTestItem, 4>,
    bench_churn::<TestItem, 4>,
    bench_mixed_zipf::<3>,
    bench_pipeline::<4>,
);

criterion_main!(benches);
