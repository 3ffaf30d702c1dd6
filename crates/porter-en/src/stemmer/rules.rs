// Static suffix tables for Steps 2, 3 and 4.
//
// Each stage dispatches on a single character of the live word and then
// tries its rules strictly in table order; the first suffix that matches
// wins, whether or not the measure gate afterwards permits the rewrite.
// Rules for one dispatch character are kept contiguous so the table reads
// like the case arms it replaces.
//
// Step2 and Step3 rewrite when the stem measure is > 0; Step4 strips when
// it is > 1. Every Step2/Step3 replacement is at most as long as the
// suffix it replaces, so rewrites never grow the live span.

/// A measure-gated suffix substitution (Steps 2 and 3).
pub(super) struct RewriteRule {
    /// Character the stage dispatches on before scanning this group.
    pub dispatch: char,
    /// Literal suffix the live word must end with.
    pub suffix: &'static str,
    /// Replacement written in place over the suffix.
    pub replacement: &'static str,
}

const fn sub(dispatch: char, suffix: &'static str, replacement: &'static str) -> RewriteRule {
    RewriteRule {
        dispatch,
        suffix,
        replacement,
    }
}

/// Step2 maps double suffixes to single ones, so `-ization` (`-ize` plus
/// `-ation`) becomes `-ize`. Dispatches on the penultimate character.
pub(super) static STEP2_RULES: &[RewriteRule] = &[
    sub('a', "ational", "ate"),
    sub('a', "tional", "tion"),
    sub('c', "enci", "ence"),
    sub('c', "anci", "ance"),
    sub('e', "izer", "ize"),
    // The published algorithm has -abli -> -able here; -bli -> -ble is a
    // deliberate improvement and is kept as such.
    sub('l', "bli", "ble"),
    sub('l', "alli", "al"),
    sub('l', "entli", "ent"),
    sub('l', "eli", "e"),
    sub('l', "ousli", "ous"),
    sub('o', "ization", "ize"),
    sub('o', "ation", "ate"),
    sub('o', "ator", "ate"),
    sub('s', "alism", "al"),
    sub('s', "iveness", "ive"),
    sub('s', "fulness", "ful"),
    sub('s', "ousness", "ous"),
    sub('t', "aliti", "al"),
    sub('t', "iviti", "ive"),
    sub('t', "biliti", "ble"),
    // Not in the published algorithm; another deliberate improvement.
    sub('g', "logi", "log"),
];

/// Step3 deals with `-ic-`, `-full`, `-ness` and the like. Dispatches on
/// the final character.
pub(super) static STEP3_RULES: &[RewriteRule] = &[
    sub('e', "icate", "ic"),
    sub('e', "ative", ""),
    sub('e', "alize", "al"),
    sub('i', "iciti", "ic"),
    sub('l', "ical", "ic"),
    sub('l', "ful", ""),
    sub('s', "ness", ""),
];

/// Extra shape constraint a Step4 rule may impose on the stem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum StripCondition {
    Always,
    /// The character immediately before the suffix must be `s` or `t`
    /// (the `-ion` rule, so "adoption" strips but "cushion" does not).
    AfterSOrT,
}

/// A bare suffix removal in context `<c>vcvc<v>` (Step4). Dispatches on
/// the penultimate character.
pub(super) struct StripRule {
    pub dispatch: char,
    pub suffix: &'static str,
    pub condition: StripCondition,
}

const fn strip(dispatch: char, suffix: &'static str) -> StripRule {
    StripRule {
        dispatch,
        suffix,
        condition: StripCondition::Always,
    }
}

pub(super) static STEP4_RULES: &[StripRule] = &[
    strip('a', "al"),
    strip('c', "ance"),
    strip('c', "ence"),
    strip('e', "er"),
    strip('i', "ic"),
    strip('l', "able"),
    strip('l', "ible"),
    strip('n', "ant"),
    strip('n', "ement"),
    strip('n', "ment"),
    strip('n', "ent"),
    // -ion only after s/t; the unconditional -ou that follows takes care
    // of -ous via Step4's measure gate.
    StripRule {
        dispatch: 'o',
        suffix: "ion",
        condition: StripCondition::AfterSOrT,
    },
    strip('o', "ou"),
    strip('s', "ism"),
    strip('t', "ate"),
    strip('t', "iti"),
    strip('u', "ous"),
    strip('v', "ive"),
    strip('z', "ize"),
];
