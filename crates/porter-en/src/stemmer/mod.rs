// The Porter rule cascade.
//
// A strict linear pipeline over the mutable WordBuffer; no stage ever
// branches back. Step1a always runs; in plurals-only mode control jumps
// straight to the Step5 cleanup, otherwise Steps 1b through 5 run in
// sequence. Words of one or two characters are returned unchanged, a
// deliberate improvement over the published algorithm.

mod buffer;
mod rules;

pub use buffer::WordBuffer;

use porter_core::enums::StemMode;
use rules::{StripCondition, StripRule};

/// Reduce `word` to its stem.
///
/// The caller is responsible for lowercasing; characters outside the
/// vowel tables (digits, punctuation) are classified as consonants and
/// flow through the rules unspecially. Stemming never grows a word.
pub fn stem(word: &str, mode: StemMode) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 2 {
        return word.to_owned();
    }
    let mut buf = WordBuffer::new(chars);

    step1a(&mut buf);
    match mode {
        StemMode::PluralsOnly => step5(&mut buf),
        StemMode::Full => {
            step1b(&mut buf);
            step1c(&mut buf);
            step2(&mut buf);
            step3(&mut buf);
            step4(&mut buf);
            step5(&mut buf);
        }
    }

    buf.into_stem()
}

/// Step1a strips plurals:
///
/// ```text
/// caresses -> caress    caress -> caress
/// ponies   -> poni      cats   -> cat
/// ties     -> ti        meetings -> meeting
/// ```
fn step1a(buf: &mut WordBuffer) {
    if buf.b[buf.end - 1] != 's' {
        return;
    }
    if buf.ends_with("sses") {
        buf.end -= 2;
    } else if buf.ends_with("ies") {
        buf.set_suffix("i");
    } else if buf.b[buf.end - 2] != 's' {
        buf.end -= 1;
    }
}

/// Step1b strips verb endings `-ed` and `-ing`:
///
/// ```text
/// feed    -> feed       matting -> mat
/// agreed  -> agree      mating  -> mate
/// disabled -> disable   messing -> mess
/// ```
fn step1b(buf: &mut WordBuffer) {
    if buf.ends_with("eed") {
        if buf.measure() > 0 {
            buf.end -= 1;
        }
    } else if (buf.ends_with("ed") || buf.ends_with("ing")) && buf.has_vowel_in_stem() {
        buf.end = buf.j;
        if buf.ends_with("at") {
            buf.set_suffix("ate");
        } else if buf.ends_with("bl") {
            buf.set_suffix("ble");
        } else if buf.ends_with("iz") {
            buf.set_suffix("ize");
        } else if buf.has_double_consonant(buf.end - 1) {
            // Undouble the final consonant, except for l, s and z.
            buf.end -= 1;
            if matches!(buf.b[buf.end - 1], 'l' | 's' | 'z') {
                buf.end += 1;
            }
        } else if buf.measure() == 1 && buf.ends_cvc(buf.end - 1) {
            // Short CVC residual: restore the e (hop+ing stays hop, but
            // fil+ing becomes file).
            buf.set_suffix("e");
        }
    }
}

/// Step1c rewrites a terminal `y` to `i` when the stem contains a vowel.
fn step1c(buf: &mut WordBuffer) {
    if buf.ends_with("y") && buf.has_vowel_in_stem() {
        buf.b[buf.end - 1] = 'i';
    }
}

/// Step2 collapses double suffixes to single ones, gated on measure > 0.
fn step2(buf: &mut WordBuffer) {
    if buf.end < 2 {
        return;
    }
    let dispatch = buf.b[buf.end - 2];
    for rule in rules::STEP2_RULES {
        if rule.dispatch != dispatch {
            continue;
        }
        if buf.ends_with(rule.suffix) {
            buf.replace_if_measure(rule.replacement);
            return;
        }
    }
}

/// Step3 handles `-icate`, `-ful`, `-ness` and friends, gated on
/// measure > 0.
fn step3(buf: &mut WordBuffer) {
    let dispatch = buf.b[buf.end - 1];
    for rule in rules::STEP3_RULES {
        if rule.dispatch != dispatch {
            continue;
        }
        if buf.ends_with(rule.suffix) {
            buf.replace_if_measure(rule.replacement);
            return;
        }
    }
}

fn strip_condition_holds(rule: &StripRule, buf: &WordBuffer) -> bool {
    match rule.condition {
        StripCondition::Always => true,
        StripCondition::AfterSOrT => buf.j >= 1 && matches!(buf.b[buf.j - 1], 's' | 't'),
    }
}

/// Step4 removes `-ant`, `-ence` and the rest in context `<c>vcvc<v>`:
/// the first matching suffix is stripped only when the remaining stem has
/// measure strictly greater than 1.
fn step4(buf: &mut WordBuffer) {
    if buf.end < 2 {
        return;
    }
    let dispatch = buf.b[buf.end - 2];
    for rule in rules::STEP4_RULES {
        if rule.dispatch != dispatch {
            continue;
        }
        if buf.ends_with(rule.suffix) && strip_condition_holds(rule, buf) {
            if buf.measure() > 1 {
                buf.end = buf.j;
            }
            return;
        }
    }
}

/// Step5 removes a final `-e` when the measure allows it (keeping the e
/// of short CVC stems like "rate"), then undoubles a final `-ll` of
/// longer words ("controll" -> "control", but "roll" stays).
fn step5(buf: &mut WordBuffer) {
    buf.j = buf.end;
    if buf.b[buf.end - 1] == 'e' {
        let a = buf.measure();
        if a > 1 || (a == 1 && !buf.ends_cvc(buf.end - 2)) {
            buf.end -= 1;
        }
    }
    if buf.b[buf.end - 1] == 'l' && buf.has_double_consonant(buf.end - 1) && buf.measure() > 1 {
        buf.end -= 1;
    }
}
