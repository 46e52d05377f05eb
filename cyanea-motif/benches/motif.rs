use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cyanea_motif::{
    gibbs_sampler, greedy_motif_search, profile_most_probable_kmer, randomized_motif_search,
    DnaSet, MotifSet,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_dna(len: usize, state: &mut u64) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    for _ in 0..len {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((*state >> 33) % 4) as usize]);
    }
    seq
}

/// `t` random sequences of length `len`, each with `motif` planted once.
fn planted_set(t: usize, len: usize, motif: &[u8]) -> DnaSet {
    let mut state: u64 = 42;
    let seqs: Vec<Vec<u8>> = (0..t)
        .map(|i| {
            let mut seq = random_dna(len, &mut state);
            let at = (i * 7) % (len - motif.len());
            seq[at..at + motif.len()].copy_from_slice(motif);
            seq
        })
        .collect();
    DnaSet::new(seqs).unwrap()
}

fn bench_most_probable(c: &mut Criterion) {
    let mut state = 7;
    let text = random_dna(10_000, &mut state);
    let motifs = MotifSet::new((0..20).map(|_| random_dna(12, &mut state))).unwrap();
    let profile = motifs.profile_with_pseudocounts();
    c.bench_function("most_probable_kmer_10kb", |b| {
        b.iter(|| profile_most_probable_kmer(black_box(&text), 12, &profile))
    });
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    for &len in &[100usize, 500] {
        let dna = planted_set(10, len, b"ATGCGTACCA");
        group.bench_with_input(BenchmarkId::from_parameter(len), &dna, |b, dna| {
            b.iter(|| greedy_motif_search(black_box(dna), 10))
        });
    }
    group.finish();
}

fn bench_randomized(c: &mut Criterion) {
    let dna = planted_set(10, 200, b"ATGCGTACCA");
    c.bench_function("randomized_100_restarts", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| randomized_motif_search(black_box(&dna), 10, 100, &mut rng))
    });
}

fn bench_gibbs(c: &mut Criterion) {
    let dna = planted_set(10, 200, b"ATGCGTACCA");
    c.bench_function("gibbs_1000_steps", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| gibbs_sampler(black_box(&dna), 10, 1000, &mut rng))
    });
}

criterion_group!(
    benches,
    bench_most_probable,
    bench_greedy,
    bench_randomized,
    bench_gibbs
);
criterion_main!(benches);
