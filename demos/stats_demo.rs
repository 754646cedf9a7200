use chain_hash::HashMap;
use chain_hash::hasher::HashFn;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "target_capacity", default_value_t = 1000)]
    target_capacity: usize,

    #[arg(short = 'l', long = "load_factor", default_value_t = chain_hash::hash_table::DEFAULT_LOAD_FACTOR)]
    load_factor: f64,

    /// Fraction of keys to remove (and replace) after filling.
    #[arg(short = 'r', long = "churn", default_value_t = 0.25)]
    churn: f64,

    /// Keep only this many low bits of each hash, to force long chains.
    #[arg(short = 'b', long = "hash_bits")]
    hash_bits: Option<u32>,
}

fn main() {
    let args = Args::parse();

    let mask = match args.hash_bits {
        Some(bits) if bits < 64 => (1u64 << bits) - 1,
        _ => u64::MAX,
    };
    let hash = HashFn(move |k: &u64| k.wrapping_mul(0x9E37_79B9_7F4A_7C15).rotate_left(29) & mask);

    println!(
        "Creating HashMap with target capacity {} and load factor {}",
        args.target_capacity, args.load_factor
    );
    let mut map = HashMap::with_capacity_load_factor_and_hasher(
        args.target_capacity,
        args.load_factor,
        hash,
    );
    println!(
        "Initial arena capacity: {}, buckets: {}",
        map.capacity(),
        map.bucket_count()
    );

    let n = args.target_capacity as u64;
    for k in 0..n {
        map.put(k, k * 2);
    }
    println!("Inserted {} entries", map.len());

    let removed = ((n as f64) * args.churn.clamp(0.0, 1.0)) as u64;
    for k in 0..removed {
        map.remove(&k);
    }
    println!("Removed {} entries", removed);
    map.debug_stats().print();

    for k in n..n + removed {
        map.put(k, k * 2);
    }
    println!("Reinserted {} fresh entries", removed);

    map.print_chain_histogram();
    map.debug_stats().print();
}
