// End-to-end generation scenarios through the public API.

use slogan_gen::export::{export_csv, parse_export};
use slogan_gen::markov::{MarkovChain, chain_for_industry};
use slogan_gen::scoring::round_one_decimal;
use slogan_gen::{GenerationOptions, GeneratorConfig, LengthPref, Session, generate_from_corpus};
use slogan_lexicon::text::{normalize, token_count};
use slogan_lexicon::{Corpus, WordBank, default_corpus, default_word_bank};
use slogan_prng::SloganRng;

const COFFEE_BANK: &str = r#"{
    "power_words": ["bold", "fresh", "smart", "pure", "bright", "real"],
    "verbs": ["brew", "sip", "taste", "savor", "wake"],
    "outcomes": ["every single day", "made for more", "start strong"],
    "negatives": ["bitterness", "fuss", "waiting"],
    "industries": [
        {
            "id": "coffee",
            "name": "Coffee",
            "keywords": ["bold", "roast", "brew", "bean"],
            "benefits": ["rich flavor", "smooth finish", "fresh aroma"],
            "audience": ["early risers", "night owls", "coffee lovers"]
        }
    ]
}"#;

const COFFEE_CORPUS: &str = "slogan,industry
Wake up to bold coffee,coffee
Fresh roast every morning,coffee
Sip the smooth life,coffee
Brewed for early risers,coffee
Every cup a small escape,coffee
Bold beans better mornings,coffee
";

fn coffee_session() -> Session {
    let bank = WordBank::from_json(COFFEE_BANK).unwrap();
    Session::new(bank, Corpus::from_csv(COFFEE_CORPUS), GeneratorConfig::default())
}

fn has_one_decimal(score: f64) -> bool {
    round_one_decimal(score) == score
}

#[test]
fn test_scenario_short_coffee_slogans() {
    let mut session = coffee_session();
    assert_eq!(session.corpus().len(), 6);
    let opts = GenerationOptions {
        industry_id: "coffee".to_string(),
        length: LengthPref::Short,
        count: 5,
        ..GenerationOptions::default()
    };
    for seed in [1, 2, 3, 99, 2024] {
        let results = session.generate(&opts, &mut SloganRng::new(seed)).to_vec();
        assert_eq!(results.len(), 5, "seed {seed}");
        for (i, c) in results.iter().enumerate() {
            let n = token_count(&c.text);
            assert!((2..=4).contains(&n), "{:?} has {n} tokens", c.text);
            assert!(c.score >= 0.0);
            assert!(has_one_decimal(c.score), "score {} not rounded", c.score);
            assert!(results[..i].iter().all(|prev| prev.text != c.text), "duplicate {:?}", c.text);
        }
    }
}

#[test]
fn test_scenario_must_include_secure() {
    let bank = default_word_bank();
    let corpus = default_corpus();
    let config = GeneratorConfig::default();
    let opts = GenerationOptions {
        industry_id: "tech".to_string(),
        length: LengthPref::Any,
        must_include: vec!["secure".to_string()],
        count: 10,
        ..GenerationOptions::default()
    };
    let mut total = 0;
    for seed in 0..5 {
        let results = generate_from_corpus(&bank, &corpus, &opts, &config, &mut SloganRng::new(seed));
        for c in &results {
            assert!(normalize(&c.text).contains("secure"), "{:?}", c.text);
        }
        total += results.len();
    }
    assert!(total > 0);
}

#[test]
fn test_scenario_brand_placement() {
    let bank = default_word_bank();
    let corpus = default_corpus();
    let config = GeneratorConfig::default();
    let opts = GenerationOptions {
        brand: "Acme".to_string(),
        industry_id: "coffee".to_string(),
        length: LengthPref::Any,
        count: 20,
        ..GenerationOptions::default()
    };
    let results = generate_from_corpus(&bank, &corpus, &opts, &config, &mut SloganRng::new(7));
    assert_eq!(results.len(), 20);
    assert!(
        results
            .iter()
            .all(|c| c.text.starts_with("Acme: ") || c.text.ends_with(" — Acme"))
    );
}

#[test]
fn test_same_seed_same_results() {
    let opts = GenerationOptions {
        brand: "Nova Solar".to_string(),
        industry_id: "solar".to_string(),
        tones: vec!["bold".to_string(), "playful".to_string()],
        description: "affordable rooftop solar systems".to_string(),
        ..GenerationOptions::default()
    };
    let mut a = Session::new(default_word_bank(), default_corpus(), GeneratorConfig::default());
    let mut b = Session::new(default_word_bank(), default_corpus(), GeneratorConfig::default());
    assert_eq!(
        a.generate(&opts, &mut SloganRng::new(314)),
        b.generate(&opts, &mut SloganRng::new(314))
    );
}

#[test]
fn test_export_round_trip() {
    let mut session = Session::new(default_word_bank(), default_corpus(), GeneratorConfig::default());
    let opts = GenerationOptions {
        brand: "Quote \"Co\"".to_string(),
        industry_id: "fitness".to_string(),
        length: LengthPref::Any,
        count: 15,
        ..GenerationOptions::default()
    };
    let results = session.generate(&opts, &mut SloganRng::new(5)).to_vec();
    let csv = export_csv(&results).unwrap();
    assert_eq!(csv.lines().count(), results.len() + 1);
    assert_eq!(parse_export(&csv).unwrap(), results);

    assert_eq!(session.export(), Some(csv));
}

#[test]
fn test_sparse_industry_uses_full_corpus_chain() {
    let corpus = Corpus::from_csv(
        "slogan,industry
Brew bold,coffee
Code faster,tech
Ship it today,tech
Run further,fitness
Lift more,fitness
Think big,generic
",
    );
    let scoped = chain_for_industry(&corpus, "coffee", 5);
    assert_eq!(scoped, MarkovChain::build(corpus.all_slogans()));

    let rich = chain_for_industry(&corpus, "coffee", 2);
    assert_ne!(rich, MarkovChain::build(corpus.all_slogans()));
}

#[test]
fn test_imported_rows_feed_later_generations() {
    let mut session = coffee_session();
    let added = session.import_corpus("slogan,industry\nZesty zebra zeal,coffee\nZoom zoom zing,coffee\n");
    assert_eq!(added, 2);
    let opts = GenerationOptions {
        industry_id: "coffee".to_string(),
        length: LengthPref::Any,
        alliteration: Some('z'),
        count: 5,
        ..GenerationOptions::default()
    };
    let results = session.generate(&opts, &mut SloganRng::new(11));
    assert!(!results.is_empty());
    assert!(results.iter().all(|c| c.text.to_lowercase().starts_with('z')));
}
