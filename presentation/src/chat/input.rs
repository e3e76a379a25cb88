//! Line classification for the interactive loop

use resolver_domain::ResolutionStrategy;

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// `/strategy` alone shows the current strategy
    ShowStrategy,
    SetStrategy(ResolutionStrategy),
    Unknown(String),
}

/// What a line typed at the prompt means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// Blank line, ignored
    Empty,
    Exit,
    Command(ReplCommand),
    /// Anything else is resolved verbatim
    Prompt(String),
}

/// Classify one input line
///
/// `exit` and `quit` end the session in any case; surrounding whitespace
/// is ignored for sentinels and commands, but a prompt is passed on
/// untouched so its cache key is exactly what was typed.
pub fn parse_input(line: &str) -> ReplInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplInput::Empty;
    }

    let lowered = trimmed.to_lowercase();
    if lowered == "exit" || lowered == "quit" {
        return ReplInput::Exit;
    }

    if let Some(rest) = trimmed.strip_prefix('/') {
        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        return match (name, arg) {
            ("quit" | "exit" | "q", _) => ReplInput::Exit,
            ("help" | "h" | "?", _) => ReplInput::Command(ReplCommand::Help),
            ("strategy", None) => ReplInput::Command(ReplCommand::ShowStrategy),
            ("strategy", Some(value)) => match value.parse() {
                Ok(strategy) => ReplInput::Command(ReplCommand::SetStrategy(strategy)),
                Err(_) => ReplInput::Command(ReplCommand::Unknown(trimmed.to_string())),
            },
            _ => ReplInput::Command(ReplCommand::Unknown(trimmed.to_string())),
        };
    }

    ReplInput::Prompt(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(parse_input(""), ReplInput::Empty);
        assert_eq!(parse_input("   \t"), ReplInput::Empty);
    }

    #[test]
    fn test_exit_sentinels_any_case() {
        for line in ["exit", "QUIT", "Exit", "  quit  ", "/q", "/exit", "/quit"] {
            assert_eq!(parse_input(line), ReplInput::Exit, "{}", line);
        }
    }

    #[test]
    fn test_sentinel_inside_sentence_is_a_prompt() {
        assert_eq!(
            parse_input("how do I exit vim"),
            ReplInput::Prompt("how do I exit vim".to_string())
        );
    }

    #[test]
    fn test_prompt_is_not_trimmed() {
        assert_eq!(parse_input(" hi "), ReplInput::Prompt(" hi ".to_string()));
    }

    #[test]
    fn test_strategy_commands() {
        assert_eq!(
            parse_input("/strategy"),
            ReplInput::Command(ReplCommand::ShowStrategy)
        );
        assert_eq!(
            parse_input("/strategy routed"),
            ReplInput::Command(ReplCommand::SetStrategy(ResolutionStrategy::Routed))
        );
        assert!(matches!(
            parse_input("/strategy fastest"),
            ReplInput::Command(ReplCommand::Unknown(_))
        ));
    }

    #[test]
    fn test_help_and_unknown() {
        assert_eq!(parse_input("/help"), ReplInput::Command(ReplCommand::Help));
        assert_eq!(
            parse_input("/models"),
            ReplInput::Command(ReplCommand::Unknown("/models".to_string()))
        );
    }
}
