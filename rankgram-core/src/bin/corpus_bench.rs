//! Corpus Profiling Benchmark
//!
//! Measures the throughput of the profile pipeline on a large UTF-8 text file,
//! such as a Wikipedia dump or a concatenated training corpus for one language.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalization**: stripping punctuation, digits and newlines
//! 2. **Tokenization**: splitting normalized text on spaces
//! 3. **Occurrences**: normalize + tokenize + gram counting
//! 4. **Full Profile**: everything above plus ranking and truncation
//!
//! ## Usage
//!
//! ```bash
//! # Default gram depth
//! ./target/release/corpus_bench /path/to/corpus.txt
//!
//! # Explicit gram depth
//! ./target/release/corpus_bench /path/to/corpus.txt 3
//!
//! # Show pipeline statistics
//! RUST_LOG=rankgram_core=debug ./target/release/corpus_bench /path/to/corpus.txt
//! ```
//!
//! Build in release mode and use inputs of a few MiB or more for stable numbers.

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use rankgram_core::analyzer::normalizer::TextNormalizer;
use rankgram_core::analyzer::tokenizer::Tokenizer;
use rankgram_core::{ProfileAnalyzer, ProfileConfig, DEFAULT_GRAM_DEPTH};
use tracing::info;
use tracing_subscriber::EnvFilter;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path> [depth]");
        std::process::exit(1);
    }

    let path = &args[1];

    let depth = match args.get(2).map(|s| s.parse::<usize>()) {
        Some(Ok(depth)) => depth,
        Some(Err(e)) => {
            eprintln!("invalid depth {:?}: {}", args[2], e);
            std::process::exit(1);
        }
        None => DEFAULT_GRAM_DEPTH,
    };

    let analyzer = match ProfileAnalyzer::try_new(ProfileConfig::new().with_gram_depth(depth)) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input = std::str::from_utf8(&bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Depth:     {}\n", depth);
    info!(path = %path, bytes = input.len(), depth, "benchmark input loaded");

    bench_normalize(input);
    bench_tokenize(input);
    bench_occurrences(input, &analyzer);
    bench_profile(input, &analyzer);

    Ok(())
}

fn bench_normalize(input: &str) {
    let normalizer = TextNormalizer::default();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| {
        normalizer.normalize_into(input, &mut out);
    });

    let elapsed = measure(|| {
        normalizer.normalize_into(input, &mut out);
    });

    print_perf("Normalize", input.len(), elapsed, 0, "Tokens");
}

fn bench_tokenize(input: &str) {
    let normalizer = TextNormalizer::default();
    let tokenizer = Tokenizer::new();
    let normalized = normalizer.normalize(input);

    println!("=== Tokenize ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenizer.tokenize(&normalized, |_t, _p| {
            sink += 1;
        });
        std::hint::black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenizer.tokenize(&normalized, |_t, _p| {
            local += 1;
        });
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", normalized.len(), elapsed, tokens, "Tokens");
}

fn bench_occurrences(input: &str, analyzer: &ProfileAnalyzer) {
    println!("=== Occurrences ===");

    warmup(|| {
        std::hint::black_box(analyzer.occurrences(input));
    });

    let mut grams = 0u64;
    let elapsed = measure(|| {
        let occurrences = analyzer.occurrences(input);
        grams = occurrences.len() as u64;
        std::hint::black_box(occurrences);
    });

    print_perf("Occurrences", input.len(), elapsed, grams, "Grams");
}

fn bench_profile(input: &str, analyzer: &ProfileAnalyzer) {
    println!("=== Full Profile ===");

    warmup(|| {
        std::hint::black_box(analyzer.analyze(input, "bench"));
    });

    let mut last = None;
    let elapsed = measure(|| {
        let (profile, stats) = analyzer.analyze_with_stats(input, "bench");
        std::hint::black_box(profile);
        last = Some(stats);
    });

    print_perf("Profile", input.len(), elapsed, 0, "Grams");

    if let Some(stats) = last {
        println!("Stats       : {}", stats);
        println!("Rank map    : {}\n", fmt_bytes(stats.rank_map_bytes() as u64));
    }
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, items: u64, unit: &str) {
    let secs = elapsed.as_secs_f64();
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.2} MiB/s", mib / secs);

    if items > 0 {
        println!("{:<12}: {}", unit, fmt_count(items));
        println!("{:<12}: {}", format!("{unit}/sec"), fmt_count((items as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
