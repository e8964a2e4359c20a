// "Surprise me" preset: a randomized but sensible generation request.
//
// Fields are drawn independently, in field order, from small built-in
// lists, so the brand and description need not belong together. The
// industry comes from the loaded word bank.

use slogan_lexicon::{GENERIC_INDUSTRY, WordBank};
use slogan_prng::RandomSource;

use crate::options::{GenerationOptions, LengthPref, normalize_rhyme_tail, parse_alliteration, split_phrases};

const SAMPLE_BRANDS: [&str; 6] = [
    "Nimbus Shoes",
    "Aurora Coffee",
    "Quanta Cloud",
    "Evergreen Clean",
    "Pulse Fitness",
    "Nova Solar",
];

const SAMPLE_DESCRIPTIONS: [&str; 6] = [
    "breathable running shoes with adaptive cushioning",
    "small-batch coffee roasted fresh",
    "cloud platform for growing startups",
    "eco-friendly household cleaning",
    "smart workouts that fit your day",
    "affordable rooftop solar systems",
];

const SURPRISE_TONES: [&str; 3] = ["bold", "playful", "innovative"];
const LENGTHS: [LengthPref; 3] = [LengthPref::Short, LengthPref::Medium, LengthPref::Long];
const MUST_INCLUDE: [&str; 6] = ["", "fast, light", "clean", "secure", "green", "coffee"];
const AVOID: [&str; 4] = ["", "cheap", "boring", "slow"];
const ALLITERATION: [&str; 5] = ["", "F", "S", "N", "C"];
const RHYME_TAILS: [&str; 4] = ["", "-ow", "-ite", "-een"];
const COUNTS: [usize; 4] = [8, 12, 16, 20];

/// Fill a request with random presets.
pub fn surprise_options<R: RandomSource>(bank: &WordBank, rng: &mut R) -> GenerationOptions {
    let brand = pick_str(rng, &SAMPLE_BRANDS);
    let description = pick_str(rng, &SAMPLE_DESCRIPTIONS);
    let industry_id = rng
        .pick(bank.industries())
        .map(|i| i.id.clone())
        .unwrap_or_else(|| GENERIC_INDUSTRY.to_string());
    let length = rng.pick(&LENGTHS).copied().unwrap_or_default();
    let must_include = split_phrases(pick_str(rng, &MUST_INCLUDE));
    let avoid = split_phrases(pick_str(rng, &AVOID));
    let alliteration = parse_alliteration(pick_str(rng, &ALLITERATION));
    let rhyme_tail = normalize_rhyme_tail(pick_str(rng, &RHYME_TAILS));
    let count = rng.pick(&COUNTS).copied().unwrap_or(12);

    tracing::debug!(%brand, industry = %industry_id, ?length, count, "surprise preset drawn");
    GenerationOptions {
        brand: brand.to_string(),
        description: description.to_string(),
        industry_id,
        tones: SURPRISE_TONES.iter().map(|t| t.to_string()).collect(),
        length,
        must_include,
        avoid,
        alliteration,
        rhyme_tail,
        count,
    }
}

fn pick_str<R: RandomSource>(rng: &mut R, items: &[&'static str]) -> &'static str {
    rng.pick(items).copied().unwrap_or("")
}
