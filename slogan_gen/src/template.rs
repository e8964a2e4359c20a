// Template combiner: slogans assembled from word-bank slots.
//
// A template is a fixed sentence shape whose slots are filled with uniform
// picks from the word bank (power words, verbs, outcomes, negatives) and the
// resolved industry (keywords, benefits, audience). After rendering:
//
// 1. With `description_probability`, a ` for <first description words>`
//    phrase is appended (a trailing period is dropped first). A description
//    with no normalized words adds nothing, rather than a bare trailing `for`.
// 2. With `tone_probability`, a tone word and a `•` separator are prefixed.
// 3. Output longer than the length preference's target word count is cut to
//    its leading normalized words. Shorter output is left alone.
// 4. Every token is title-cased.
//
// Random draws happen in a fixed order (tone word, template, slots, then the
// two coin flips) so scripted random sources can steer individual branches.

use slogan_lexicon::text::{title_case, tokenize};
use slogan_lexicon::{Industry, WordBank};
use slogan_prng::RandomSource;

use crate::config::GeneratorConfig;
use crate::options::LengthPref;

/// The sentence shapes the combiner chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// `<power> <benefit>. <outcome>`
    PowerBenefitOutcome,
    /// `<verb> <benefit> <power>`
    VerbBenefitPower,
    /// `<benefit> without the <negative>`
    BenefitWithoutNegative,
    /// `<power> <keyword>. <benefit>`
    PowerKeywordBenefit,
    /// `<power> results for <audience>`
    PowerResultsForAudience,
    /// `<verb> more, <verb> smarter, <verb> <keyword>`
    VerbTriplet,
    /// `<power> <benefit> for <audience>`
    PowerBenefitForAudience,
}

pub const ALL_TEMPLATES: [Template; 7] = [
    Template::PowerBenefitOutcome,
    Template::VerbBenefitPower,
    Template::BenefitWithoutNegative,
    Template::PowerKeywordBenefit,
    Template::PowerResultsForAudience,
    Template::VerbTriplet,
    Template::PowerBenefitForAudience,
];

impl Template {
    /// Fill this template's slots. Picks are drawn left to right.
    pub fn render<R: RandomSource>(self, bank: &WordBank, industry: &Industry, rng: &mut R) -> String {
        match self {
            Template::PowerBenefitOutcome => {
                let power = pick_word(rng, bank.power_words());
                let benefit = pick_word(rng, &industry.benefits);
                let outcome = pick_word(rng, bank.outcomes());
                format!("{power} {benefit}. {outcome}")
            }
            Template::VerbBenefitPower => {
                let verb = pick_word(rng, bank.verbs());
                let benefit = pick_word(rng, &industry.benefits);
                let power = pick_word(rng, bank.power_words());
                format!("{verb} {benefit} {power}")
            }
            Template::BenefitWithoutNegative => {
                let benefit = pick_word(rng, &industry.benefits);
                let negative = pick_word(rng, bank.negatives());
                format!("{benefit} without the {negative}")
            }
            Template::PowerKeywordBenefit => {
                let power = pick_word(rng, bank.power_words());
                let keyword = pick_word(rng, &industry.keywords);
                let benefit = pick_word(rng, &industry.benefits);
                format!("{power} {keyword}. {benefit}")
            }
            Template::PowerResultsForAudience => {
                let power = pick_word(rng, bank.power_words());
                let audience = pick_word(rng, &industry.audience);
                format!("{power} results for {audience}")
            }
            Template::VerbTriplet => {
                let first = pick_word(rng, bank.verbs());
                let second = pick_word(rng, bank.verbs());
                let third = pick_word(rng, bank.verbs());
                let keyword = pick_word(rng, &industry.keywords);
                format!("{first} more, {second} smarter, {third} {keyword}")
            }
            Template::PowerBenefitForAudience => {
                let power = pick_word(rng, bank.power_words());
                let benefit = pick_word(rng, &industry.benefits);
                let audience = pick_word(rng, &industry.audience);
                format!("{power} {benefit} for {audience}")
            }
        }
    }
}

/// The user inputs the combiner reads.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRequest<'a> {
    pub industry_id: &'a str,
    pub description: &'a str,
    pub tones: &'a [String],
    pub length: LengthPref,
}

/// Produce one title-cased template slogan.
pub fn combine_template<R: RandomSource>(
    bank: &WordBank,
    request: &TemplateRequest<'_>,
    config: &GeneratorConfig,
    rng: &mut R,
) -> String {
    let industry = bank.industry_or_first(request.industry_id);
    let tone_word = rng.pick(request.tones);
    let template = rng.pick(&ALL_TEMPLATES).copied().unwrap_or(Template::PowerBenefitOutcome);
    let mut base = template.render(bank, industry, rng);

    if !request.description.trim().is_empty() && rng.chance(config.description_probability) {
        let key: Vec<String> = tokenize(request.description)
            .into_iter()
            .take(config.description_words)
            .collect();
        if !key.is_empty() {
            let trimmed = base.strip_suffix('.').unwrap_or(&base);
            base = format!("{trimmed} for {}", key.join(" "));
        }
    }

    if let Some(tone) = tone_word {
        if rng.chance(config.tone_probability) {
            base = format!("{tone} • {base}");
        }
    }

    let words = tokenize(&base);
    let target = request.length.template_target();
    if words.len() > target {
        base = words[..target].join(" ");
    }
    title_case(&base)
}

/// Uniform pick that yields `""` for an empty list. `WordBank` validation
/// keeps every slot non-empty, so the fallback only guards hand-built data.
fn pick_word<'a, R: RandomSource>(rng: &mut R, items: &'a [String]) -> &'a str {
    rng.pick(items).map(String::as_str).unwrap_or("")
}
