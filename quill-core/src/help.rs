/// The trivia question gating the help dialog.
pub const QUESTION: &str = "What is 846 * 14593?";

const CORRECT_ANSWER: &str = "12345678";

pub const KNOWS_THE_ANSWER: &str = "You don't need help.";
pub const NO_HELP_FOR_YOU: &str = "I can't help you.";

/// Grade the user's answer. Whoever can multiply clearly needs no help;
/// everyone else gets none either.
pub fn evaluate_answer(answer: &str) -> &'static str {
    if answer.trim() == CORRECT_ANSWER {
        KNOWS_THE_ANSWER
    } else {
        NO_HELP_FOR_YOU
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_product_is_dismissed() {
        assert_eq!(evaluate_answer("12345678"), KNOWS_THE_ANSWER);
        assert_eq!(evaluate_answer("  12345678  "), KNOWS_THE_ANSWER);
    }

    #[test]
    fn anything_else_gets_no_help() {
        assert_eq!(evaluate_answer("12345679"), NO_HELP_FOR_YOU);
        assert_eq!(evaluate_answer("i give up"), NO_HELP_FOR_YOU);
        assert_eq!(evaluate_answer(""), NO_HELP_FOR_YOU);
    }
}
