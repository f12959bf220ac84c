use crate::utils::letters::letter_score;

pub struct Scorer;

impl Scorer {
    /// Calculate the score for a word.
    ///
    /// Case-insensitive sum of per-letter values; characters outside A-Z
    /// contribute 0. Pure function, no failure cases.
    pub fn calculate_score(word: &str) -> i32 {
        word.chars().map(|ch| letter_score(ch) as i32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_score_calculation() {
        // C(3) + A(1) + T(1) = 5
        assert_eq!(Scorer::calculate_score("CAT"), 5);
        // Q(10) + U(1) + I(1) + Z(10) = 22
        assert_eq!(Scorer::calculate_score("QUIZ"), 22);
    }

    #[test]
    fn test_score_is_case_insensitive() {
        assert_eq!(
            Scorer::calculate_score("cat"),
            Scorer::calculate_score("CAT")
        );
        assert_eq!(Scorer::calculate_score("CaT"), 5);
    }

    #[test]
    fn test_non_letters_contribute_zero() {
        assert_eq!(Scorer::calculate_score("C-A-T"), 5);
        assert_eq!(Scorer::calculate_score("123"), 0);
        assert_eq!(Scorer::calculate_score(""), 0);
    }
}
