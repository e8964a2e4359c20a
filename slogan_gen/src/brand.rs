// Brand injection: the presentation step that attaches the brand name.
//
// Applied only to the ranked, truncated result subset, never to the
// candidate pool, since it changes the text the filter and scorer saw.
// With `prefix_probability` the result reads `Brand: Title Cased Text`,
// otherwise `Title Cased Text — Brand`. An empty brand leaves the text
// untouched.

use slogan_lexicon::text::title_case;
use slogan_prng::RandomSource;

/// Decorate `text` with `brand`.
pub fn inject_brand<R: RandomSource>(text: &str, brand: &str, prefix_probability: f64, rng: &mut R) -> String {
    if brand.is_empty() {
        return text.to_string();
    }
    if rng.chance(prefix_probability) {
        format!("{brand}: {}", title_case(text))
    } else {
        format!("{} — {brand}", title_case(text))
    }
}
