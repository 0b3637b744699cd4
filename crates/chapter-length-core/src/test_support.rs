//! Deterministic text generators shared by unit tests.

/// Linear congruential generator; good enough to vary test inputs.
pub struct Lcg(u64);

impl Lcg {
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn below(&mut self, n: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) % n as u64) as usize
    }
}

/// Character soup over an alphabet that hits every tokenizer boundary.
pub fn noise(seed: u64, len: usize) -> String {
    const ALPHABET: &[char] = &[
        'a', 'b', 'c', 'Z', '1', '_', ' ', ' ', ' ', '.', '!', '?', '\n', '\n', '\t', '-', '\'',
        ',', '\r',
    ];
    let mut rng = Lcg::new(seed);
    (0..len)
        .map(|_| ALPHABET[rng.below(ALPHABET.len())])
        .collect()
}

/// Prose-shaped text: words, punctuation, hyphenated compounds, and
/// occasional paragraph breaks.
pub fn prose(seed: u64, words: usize) -> String {
    const VOCAB: &[&str] = &[
        "the", "lantern", "flickered", "as", "Mira", "crossed", "old", "bridge", "river",
        "below", "whispered", "half-forgotten", "names", "she", "didn't", "stop", "wind",
        "carried", "smoke", "from", "village", "fires", "42", "ember_glow",
    ];
    const AFTER: &[&str] = &[
        " ", " ", " ", " ", " ", " ", ", ", ". ", ". ", "! ", "? ", "... ", ".\n\n", "\n",
        " \u{2014} ", "?!\n \n",
    ];
    let mut rng = Lcg::new(seed);
    let mut out = String::new();
    for _ in 0..words {
        out.push_str(VOCAB[rng.below(VOCAB.len())]);
        out.push_str(AFTER[rng.below(AFTER.len())]);
    }
    out
}

/// A mixed corpus of generated and hand-picked edge-case inputs.
pub fn corpus() -> Vec<String> {
    let mut texts: Vec<String> = [
        "",
        "   ",
        "\n\n\n",
        "Short.",
        "...",
        "?!?!",
        "no terminators anywhere in this one",
        "This is a perfect sentence.",
        "This is a valid sentence with fifteen words in total.",
        "Mr. Smith paid 3.50 for a well-known, half-price map.",
        "One.\n\nTwo.\n\nThree.\n\nFour.\n\nFive.",
        "  leading and trailing space.  ",
        "word-word-word-word-word-word-word-word-word-word-word-word-word-word-word-word-word-word-word-word-word-word",
        "The storm broke. and then the rain kept falling over every roof in the quiet town while nobody at all went outside to see it",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    for seed in 0..40 {
        texts.push(noise(seed, 40 + (seed as usize * 17) % 400));
        texts.push(prose(seed, 5 + (seed as usize * 23) % 420));
    }
    texts
}
