//! Prompt normalization.

/// Substituted for prompts that are empty after trimming.
pub const DEFAULT_PROMPT: &str =
    "A mysterious object radiating faint electric-blue light on the far side of the Moon.";

/// Trim surrounding whitespace, falling back to [`DEFAULT_PROMPT`] when
/// nothing is left.
///
/// The returned prompt is never empty.
pub fn normalize_prompt(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_PROMPT.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_uses_default() {
        assert_eq!(normalize_prompt(""), DEFAULT_PROMPT);
    }

    #[test]
    fn whitespace_prompt_uses_default() {
        assert_eq!(normalize_prompt(" \t\n  "), DEFAULT_PROMPT);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize_prompt("  a glowing cube \n"), "a glowing cube");
    }

    #[test]
    fn inner_whitespace_is_preserved() {
        assert_eq!(normalize_prompt("two  spaces"), "two  spaces");
    }
}
