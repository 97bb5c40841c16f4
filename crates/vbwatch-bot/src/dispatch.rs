//! Command recognition for incoming messages.

/// Greeting sent before the mission list on `/start`.
pub const WELCOME_TEXT: &str = "Welcome to the Fortnite V-Bucks Missions Bot!\n\n\
This bot will notify you of daily V-Bucks missions in Fortnite Save the World.\n\n\
Here are today's missions:";

/// Reply to `/help`.
pub const HELP_TEXT: &str = "Available commands:\n\
/vbucks - Show today's V-Bucks missions\n\
/help - Show this help message";

/// Fallback reply for unrecognized commands.
pub const UNKNOWN_TEXT: &str = "Unknown command. Try /help";

/// A recognized (or explicitly unrecognized) bot command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start` — welcome message followed by today's missions.
    Start,
    /// `/vbucks` — today's missions.
    Vbucks,
    /// `/help` — the command list.
    Help,
    /// Any other `/command`; gets the fallback reply.
    Unknown,
}

impl Command {
    /// Parses the command out of a message text.
    ///
    /// Returns `None` for plain (non-command) messages, which the bot
    /// ignores entirely. `@botname` suffixes from group chats are
    /// stripped before matching.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.trim_start().split_whitespace().next()?;
        let name = first.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name);

        Some(match name {
            "start" => Self::Start,
            "vbucks" => Self::Vbucks,
            "help" => Self::Help,
            _ => Self::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_start() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
    }

    #[test]
    fn recognizes_vbucks() {
        assert_eq!(Command::parse("/vbucks"), Some(Command::Vbucks));
    }

    #[test]
    fn recognizes_help() {
        assert_eq!(Command::parse("/help"), Some(Command::Help));
    }

    #[test]
    fn unrecognized_command_is_unknown() {
        assert_eq!(Command::parse("/missions"), Some(Command::Unknown));
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(Command::parse("hello there"), None);
    }

    #[test]
    fn empty_text_is_not_a_command() {
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn strips_botname_suffix() {
        assert_eq!(Command::parse("/vbucks@vbwatch_bot"), Some(Command::Vbucks));
    }

    #[test]
    fn ignores_trailing_arguments() {
        assert_eq!(Command::parse("/vbucks today please"), Some(Command::Vbucks));
    }

    #[test]
    fn command_is_case_sensitive() {
        assert_eq!(Command::parse("/VBUCKS"), Some(Command::Unknown));
    }
}
