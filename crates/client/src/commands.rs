//! Chat command parsing.
//!
//! Accepts slash commands as typed in a chat (`/rest 1h30m`, `/hunt@SomeBot`),
//! bare battle words (`attack`), and the `hunt:<action>` tokens carried by
//! inline keyboard callbacks.

use std::str::FromStr;

use hunt_core::QuestId;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Explore,
    /// Raw action token, validated by the runtime.
    Battle(String),
    /// Duration text; empty means the default rest.
    Rest(String),
    Status,
    Follow,
    Quests,
    Accept(QuestId),
    Profile,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command, try /help")]
    Empty,

    #[error("unknown command `{0}`, try /help")]
    Unknown(String),

    #[error("usage: /accept <quest id>")]
    MissingQuestId,

    #[error("`{0}` is not a quest id")]
    InvalidQuestId(String),
}

const BATTLE_WORDS: [&str; 3] = ["attack", "defend", "flee"];

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        if let Some(action) = line.strip_prefix("hunt:") {
            return Ok(Command::Battle(action.trim().to_string()));
        }

        let (head, args) = match line.split_once(char::is_whitespace) {
            Some((head, args)) => (head, args.trim()),
            None => (line, ""),
        };
        // `/hunt@SomeBot` in group chats
        let head = head.split('@').next().unwrap_or(head).to_ascii_lowercase();
        let name = head.strip_prefix('/').unwrap_or(&head);

        match name {
            "hunt" | "explore" => Ok(Command::Explore),
            "rest" => Ok(Command::Rest(args.to_string())),
            "status" => Ok(Command::Status),
            "follow" => Ok(Command::Follow),
            "quests" => Ok(Command::Quests),
            "accept" => {
                if args.is_empty() {
                    return Err(CommandError::MissingQuestId);
                }
                args.trim_start_matches('#')
                    .parse()
                    .map(Command::Accept)
                    .map_err(|_| CommandError::InvalidQuestId(args.to_string()))
            }
            "profile" | "start" => Ok(Command::Profile),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            word if BATTLE_WORDS.contains(&word) => Ok(Command::Battle(word.to_string())),
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}

pub const HELP: &str = "\
/hunt or /explore  explore the territory
attack | defend | flee  act in battle
/rest [1h30m]      rest (default 1h)
/status            check on your rest
/follow            follow the tracks you found
/quests            show the quest board
/accept <id>       take a quest
/profile           show your character
/quit              leave";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, CommandError> {
        line.parse()
    }

    #[test]
    fn slash_commands() {
        assert_eq!(parse("/hunt"), Ok(Command::Explore));
        assert_eq!(parse("/explore@HuntBot"), Ok(Command::Explore));
        assert_eq!(parse("/rest 1h30m"), Ok(Command::Rest("1h30m".into())));
        assert_eq!(parse("/rest"), Ok(Command::Rest(String::new())));
        assert_eq!(parse("  /STATUS "), Ok(Command::Status));
        assert_eq!(parse("/accept #2"), Ok(Command::Accept(2)));
        assert_eq!(parse("/quit"), Ok(Command::Quit));
    }

    #[test]
    fn battle_words_and_callback_tokens() {
        assert_eq!(parse("Attack"), Ok(Command::Battle("attack".into())));
        assert_eq!(parse("hunt:flee"), Ok(Command::Battle("flee".into())));
        // validated later, by the runtime
        assert_eq!(parse("hunt:dance"), Ok(Command::Battle("dance".into())));
    }

    #[test]
    fn bad_input() {
        assert_eq!(parse("   "), Err(CommandError::Empty));
        assert_eq!(parse("/accept"), Err(CommandError::MissingQuestId));
        assert_eq!(
            parse("/accept first"),
            Err(CommandError::InvalidQuestId("first".into()))
        );
        assert!(matches!(parse("/dance"), Err(CommandError::Unknown(_))));
    }
}
