// WordBuffer: the mutable working state of the rule cascade.
//
// The word lives in a character vector that is never reallocated while
// stemming; `end` marks how many characters are live and only ever
// shrinks between stages. Suffix rewrites overwrite characters in place
// starting at the cursor `j`, which the matcher sets to the length of the
// stem preceding the matched suffix. Replacements always fit inside the
// original allocation.

use porter_core::character::is_vowel_letter;

pub struct WordBuffer {
    /// Characters of the word under transformation. Rewrites stay within
    /// the original length; dead characters past `end` are left in place.
    pub(super) b: Vec<char>,
    /// Number of live characters.
    pub(super) end: usize,
    /// Length of the stem preceding the most recently matched suffix.
    /// Set by [`WordBuffer::ends_with`], consumed by the measure and
    /// rewrite operations of the same rule.
    pub(super) j: usize,
}

impl WordBuffer {
    pub fn new(chars: Vec<char>) -> Self {
        let end = chars.len();
        Self { b: chars, end, j: 0 }
    }

    /// Consume the buffer and return the live prefix as the stem.
    pub fn into_stem(mut self) -> String {
        self.b.truncate(self.end);
        self.b.into_iter().collect()
    }

    /// Check whether `b[i]` is a consonant.
    ///
    /// Literal vowels are never consonants. A `y` is a consonant at the
    /// start of the word and otherwise takes the opposite class of the
    /// character before it, so `y` acts as a vowel exactly when it follows
    /// a consonant ("syzygy", "happy"). Everything else, digits and
    /// punctuation included, is a consonant.
    pub fn is_consonant(&self, i: usize) -> bool {
        let c = self.b[i];
        if is_vowel_letter(c) {
            return false;
        }
        if c == 'y' {
            return if i == 0 { true } else { !self.is_consonant(i - 1) };
        }
        true
    }

    /// Measure the number of vowel-run/consonant-run pairs in the stem
    /// prefix `[0, j)`. With `c` a consonant sequence and `v` a vowel
    /// sequence and `<..>` optional presence:
    ///
    /// ```text
    /// <c><v>       gives 0
    /// <c>vc<v>     gives 1
    /// <c>vcvc<v>   gives 2
    /// <c>vcvcvc<v> gives 3
    /// ```
    pub fn measure(&self) -> usize {
        let j = self.j;
        let mut n = 0;
        let mut i = 0;

        // Skip an optional leading consonant run.
        loop {
            if i >= j {
                return n;
            }
            if !self.is_consonant(i) {
                break;
            }
            i += 1;
        }
        i += 1;

        loop {
            // Scan to the end of the current vowel run.
            loop {
                if i >= j {
                    return n;
                }
                if self.is_consonant(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
            n += 1;
            // Scan to the end of the consonant run that completes the pair.
            loop {
                if i >= j {
                    return n;
                }
                if !self.is_consonant(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
        }
    }

    /// True iff the stem prefix `[0, j)` contains a vowel.
    pub fn has_vowel_in_stem(&self) -> bool {
        (0..self.j).any(|i| !self.is_consonant(i))
    }

    /// True iff positions `i-1, i` hold the same consonant twice.
    pub fn has_double_consonant(&self, i: usize) -> bool {
        if i < 1 {
            return false;
        }
        if self.b[i] != self.b[i - 1] {
            return false;
        }
        self.is_consonant(i)
    }

    /// True iff positions `i-2, i-1, i` form consonant-vowel-consonant and
    /// the final consonant is not `w`, `x` or `y`. Used when deciding
    /// whether to restore a trailing `e` at the end of a short stem:
    /// cav(e), lov(e), hop(e), crim(e) -- but snow, box, tray.
    pub fn ends_cvc(&self, i: usize) -> bool {
        if i < 2 || !self.is_consonant(i) || self.is_consonant(i - 1) || !self.is_consonant(i - 2)
        {
            return false;
        }
        !matches!(self.b[i], 'w' | 'x' | 'y')
    }

    /// Check whether the live span ends with `suffix`. On success the
    /// cursor `j` is set to the length of the preceding stem; on failure
    /// the buffer is left untouched.
    pub fn ends_with(&mut self, suffix: &str) -> bool {
        let len = suffix.len();
        if len > self.end {
            return false;
        }
        let start = self.end - len;
        if !suffix.chars().eq(self.b[start..self.end].iter().copied()) {
            return false;
        }
        self.j = start;
        true
    }

    /// Overwrite the span after the cursor with `suffix` and adjust the
    /// live length. The replacement must fit within the original
    /// allocation, which every rule in the cascade guarantees.
    pub fn set_suffix(&mut self, suffix: &str) {
        let mut i = self.j;
        for ch in suffix.chars() {
            debug_assert!(i < self.b.len(), "suffix rewrite past buffer capacity");
            self.b[i] = ch;
            i += 1;
        }
        self.end = i;
    }

    /// Apply [`WordBuffer::set_suffix`] only when the stem before the
    /// matched suffix has measure greater than zero. This is the standard
    /// gate for the Step2/Step3 substitutions.
    pub fn replace_if_measure(&mut self, suffix: &str) {
        if self.measure() > 0 {
            self.set_suffix(suffix);
        }
    }
}
