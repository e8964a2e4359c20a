// Benchmarks for one generation request: chain construction and the full
// draw/dedup/filter/score/brand pass over the embedded dataset.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use slogan_gen::markov::chain_for_industry;
use slogan_gen::{GenerationOptions, GeneratorConfig, LengthPref, generate_slogans};
use slogan_lexicon::{default_corpus, default_word_bank};
use slogan_prng::SloganRng;

fn bench_generation(c: &mut Criterion) {
    let bank = default_word_bank();
    let corpus = default_corpus();
    let config = GeneratorConfig::default();
    let opts = GenerationOptions {
        brand: "Aurora Coffee".to_string(),
        description: "small-batch coffee roasted fresh".to_string(),
        industry_id: "coffee".to_string(),
        tones: vec!["bold".to_string(), "playful".to_string()],
        length: LengthPref::Medium,
        count: 12,
        ..GenerationOptions::default()
    };

    c.bench_function("chain_for_industry", |b| {
        b.iter(|| chain_for_industry(black_box(&corpus), "coffee", config.min_scoped_rows))
    });

    let chain = chain_for_industry(&corpus, "coffee", config.min_scoped_rows);
    let mut seed = 0u64;
    c.bench_function("generate_slogans", |b| {
        b.iter(|| {
            seed += 1;
            let mut rng = SloganRng::new(seed);
            generate_slogans(black_box(&bank), &chain, black_box(&opts), &config, &mut rng)
        })
    });
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
