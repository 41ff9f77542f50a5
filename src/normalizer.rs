/// Characters stripped before counting: ASCII digits plus the punctuation
/// set the corpus treats as noise.
const STRIPPED: &str = "0123456789`~!@#$%^&*()_+-=[]{}|'\";:/.,><";

/// Normalizes one text run into countable phrases.
///
/// Strips the fixed punctuation/digit set, lowercases, then folds Polish
/// diacritics onto their base letters. Every other character passes through
/// unchanged. Pure and idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !STRIPPED.contains(*c))
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

/// Folds the lowercase Polish diacritics onto their base letters.
/// The table is intentionally small; anything not listed passes through.
fn fold_diacritic(c: char) -> char {
    match c {
        'ą' => 'a',
        'ć' => 'c',
        'ę' => 'e',
        'ł' => 'l',
        'ó' => 'o',
        'ś' => 's',
        'ż' | 'ź' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_digits() {
        assert_eq!(normalize("abc123!@#def"), "abcdef");
        assert_eq!(normalize("half-open [range]"), "halfopen range");
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("CamelCase WORDS"), "camelcase words");
    }

    #[test]
    fn test_folds_polish_diacritics() {
        assert_eq!(normalize("zażółć gęślą jaźń"), "zazolc gesla jazń");
        assert_eq!(normalize("Łąka, ŻYWA!"), "laka zywa");
    }

    #[test]
    fn test_uppercase_diacritics_fold_after_lowercasing() {
        assert_eq!(normalize("ŁÓDŹ"), "lodz");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["Łąka, ŻYWA!", "plain words", "Mieszko I. (960-992)"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_whitespace_preserved() {
        assert_eq!(normalize("one  two\tthree"), "one  two\tthree");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }
}
