use super::types::{ModeChoice, UrlInput};
use tubeq_core::Mode;

pub fn parse_mode_choice(raw: &str) -> ModeChoice {
    match raw.trim() {
        "f" => ModeChoice::Pick(Mode::Full),
        "a" => ModeChoice::Pick(Mode::Audio),
        "q" => ModeChoice::Quit,
        other => ModeChoice::Invalid(other.to_string()),
    }
}

/// Classifies a URL prompt answer. `https` is covered by the `http` prefix.
pub fn classify_url_input(raw: &str) -> UrlInput {
    let input = raw.trim();
    if input.eq_ignore_ascii_case("q") {
        UrlInput::Quit
    } else if input.is_empty() {
        UrlInput::Blank
    } else if input.starts_with("http") {
        UrlInput::Url(input.to_string())
    } else {
        UrlInput::Invalid(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_letters() {
        assert_eq!(parse_mode_choice("f"), ModeChoice::Pick(Mode::Full));
        assert_eq!(parse_mode_choice(" a \n"), ModeChoice::Pick(Mode::Audio));
        assert_eq!(parse_mode_choice("q"), ModeChoice::Quit);
        assert_eq!(parse_mode_choice("x"), ModeChoice::Invalid("x".into()));
        assert_eq!(parse_mode_choice(""), ModeChoice::Invalid(String::new()));
    }

    #[test]
    fn quit_is_case_insensitive() {
        assert_eq!(classify_url_input("q"), UrlInput::Quit);
        assert_eq!(classify_url_input("  Q "), UrlInput::Quit);
    }

    #[test]
    fn blank_and_whitespace_are_blank() {
        assert_eq!(classify_url_input(""), UrlInput::Blank);
        assert_eq!(classify_url_input("   \t"), UrlInput::Blank);
    }

    #[test]
    fn urls_are_trimmed() {
        assert_eq!(
            classify_url_input("  https://youtu.be/abc  "),
            UrlInput::Url("https://youtu.be/abc".into())
        );
        assert_eq!(
            classify_url_input("http://example.com/v"),
            UrlInput::Url("http://example.com/v".into())
        );
    }

    #[test]
    fn everything_else_is_rejected() {
        assert_eq!(
            classify_url_input("youtube.com/watch?v=1"),
            UrlInput::Invalid("youtube.com/watch?v=1".into())
        );
        assert_eq!(classify_url_input("quit"), UrlInput::Invalid("quit".into()));
    }
}
