// src/utils/text.rs

/// Title-cases `text`: the first letter of every alphabetic word is upper-cased
/// and the rest of the word lower-cased. A "word" restarts after any
/// non-alphabetic character, so `"o'neil"` becomes `"O'Neil"` and `"1st"`
/// becomes `"1St"`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_was_letter = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_was_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_was_letter = true;
        } else {
            result.push(ch);
            previous_was_letter = false;
        }
    }

    result
}
