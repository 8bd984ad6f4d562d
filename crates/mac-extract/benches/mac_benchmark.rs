use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mac_extract::{AddressFormat, Matcher};
use rand::Rng;

// Helper function to generate a random MAC address in the given layout
fn random_mac(format: AddressFormat) -> String {
    let mut rng = rand::thread_rng();
    let octets: [u8; 6] = rng.gen();
    match format {
        AddressFormat::Delimited => octets
            .iter()
            .map(|o| format!("{:02X}", o))
            .collect::<Vec<_>>()
            .join(if rng.gen_bool(0.5) { ":" } else { "-" }),
        AddressFormat::Dotted => format!(
            "{:02x}{:02x}.{:02x}{:02x}.{:02x}{:02x}",
            octets[0], octets[1], octets[2], octets[3], octets[4], octets[5]
        ),
        AddressFormat::Bare => octets.iter().map(|o| format!("{:02X}", o)).collect(),
    }
}

// Generate a dense string of MACs (just MACs separated by spaces/newlines)
fn generate_dense_macs(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        s.push_str(&random_mac(AddressFormat::ALL[i % 3]));
        s.push_str(if i % 10 == 0 { "\n" } else { " " });
    }
    s
}

// Generate a sparse string of MACs (simulating switch logs)
fn generate_log_data(n_macs: usize, bytes_per_mac: usize) -> String {
    let mut rng = rand::thread_rng();
    let noise_chars: Vec<char> =
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_-:[]/. "
            .chars()
            .collect();

    let mut s = String::new();
    for i in 0..n_macs {
        let noise_len = rng.gen_range(bytes_per_mac / 2..bytes_per_mac * 2);
        for _ in 0..noise_len {
            s.push(noise_chars[rng.gen_range(0..noise_chars.len())]);
        }
        s.push(' ');
        s.push_str(&random_mac(AddressFormat::ALL[i % 3]));
        s.push(' ');
    }
    s
}

// Generate text with NO MACs at all, to measure pure scanning overhead
fn generate_no_macs(size: usize) -> String {
    let mut rng = rand::thread_rng();
    let words = ["interface", "up", "down", "vlan", "10", "port", "link", "state"];
    let mut s = String::with_capacity(size);
    while s.len() < size {
        s.push_str(words[rng.gen_range(0..words.len())]);
        s.push(' ');
    }
    s
}

fn bench_extraction(c: &mut Criterion) {
    let matcher = Matcher::new();
    let mut group = c.benchmark_group("mac_extraction");

    let dense_input = generate_dense_macs(1000);
    group.throughput(Throughput::Bytes(dense_input.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("dense_macs", dense_input.len()),
        &dense_input,
        |b, input| {
            b.iter(|| matcher.find_iter(input).count());
        },
    );

    let log_input = generate_log_data(1000, 100);
    group.throughput(Throughput::Bytes(log_input.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("sparse_logs", log_input.len()),
        &log_input,
        |b, input| {
            b.iter(|| matcher.extract(input));
        },
    );

    let clean_input = generate_no_macs(100_000);
    group.throughput(Throughput::Bytes(clean_input.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("no_macs", clean_input.len()),
        &clean_input,
        |b, input| {
            b.iter(|| matcher.find_iter(input).count());
        },
    );

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let matcher = Matcher::new();
    let mut group = c.benchmark_group("mac_validation");

    let tokens = [
        "00:1B:44:11:3A:B8",
        "00-1B-44-11-3A-B8",
        "BC4F.19C1.7A6E",
        "0123456789AB",
        "00:1B:44:11:3A:GG",
        "  0123456789AB  ",
    ];

    group.bench_function("is_valid", |b| {
        b.iter(|| tokens.iter().filter(|t| matcher.is_valid(t)).count());
    });

    group.bench_function("classify", |b| {
        b.iter(|| tokens.iter().filter_map(|t| matcher.classify(t)).count());
    });

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_validation);
criterion_main!(benches);
