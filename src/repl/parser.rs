use super::ReplCommand;

/// Parse a prompt line into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - `@filename` → Load file command
/// - `@@` or a bare `@` → Load clipboard command
/// - Any other text → Tokenize command
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return ReplCommand::Empty;
    }

    if let Some(cmd) = trimmed.strip_prefix(':') {
        match cmd {
            "q" | "quit" => ReplCommand::Quit,
            "h" | "help" => ReplCommand::Help,
            _ => ReplCommand::Unknown(trimmed.to_string()),
        }
    } else if let Some(rest) = trimmed.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            ReplCommand::LoadClipboard
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        ReplCommand::Tokenize(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_repl_input(":q"), ReplCommand::Quit);
        assert_eq!(parse_repl_input(":quit"), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_repl_input(":h"), ReplCommand::Help);
        assert_eq!(parse_repl_input(":help"), ReplCommand::Help);
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_repl_input("@test.txt"),
            ReplCommand::LoadFile("test.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_repl_input("@  test.txt  "),
            ReplCommand::LoadFile("test.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_repl_input("@@"), ReplCommand::LoadClipboard);
        assert_eq!(parse_repl_input("@"), ReplCommand::LoadClipboard);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_repl_input(""), ReplCommand::Empty);
        assert_eq!(parse_repl_input("   "), ReplCommand::Empty);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_repl_input(":wq"),
            ReplCommand::Unknown(":wq".to_string())
        );
    }

    #[test]
    fn test_parse_text_is_tokenized() {
        assert_eq!(
            parse_repl_input("Hello world."),
            ReplCommand::Tokenize("Hello world.".to_string())
        );
    }
}
