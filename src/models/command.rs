//! The closed set of slash commands and modal submissions.

use serde_json::{json, Value};
use validator::Validate;

use crate::config::MAX_RECENT_MATCHES;

/// `custom_id` of the registration modal.
pub const REGISTER_MODAL_ID: &str = "register_modal";
/// `custom_id` of the player-name text input inside the registration modal.
pub const PLAYER_NAME_INPUT_ID: &str = "player_name";
/// Name of the `matches` command's count option.
pub const MATCH_COUNT_OPTION: &str = "count";

/// Slash commands handled by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Register,
    Profile,
    Matches,
    Clan,
    Unregister,
    BotStats,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Register,
        Command::Profile,
        Command::Matches,
        Command::Clan,
        Command::Unregister,
        Command::BotStats,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Register => "register",
            Command::Profile => "profile",
            Command::Matches => "matches",
            Command::Clan => "clan",
            Command::Unregister => "unregister",
            Command::BotStats => "botstats",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Register => "Link your PUBG account",
            Command::Profile => "Show your linked PUBG account",
            Command::Matches => "Show stats from your recent matches",
            Command::Clan => "Show your clan",
            Command::Unregister => "Unlink your PUBG account",
            Command::BotStats => "Show how many players are registered",
        }
    }

    /// Registration payload for Discord's bulk-overwrite endpoint.
    pub fn definitions() -> Vec<Value> {
        Self::ALL
            .into_iter()
            .map(|command| {
                let mut definition = json!({
                    "name": command.name(),
                    "description": command.description(),
                    "type": 1,
                });
                if command == Command::Matches {
                    definition["options"] = json!([{
                        "type": 4,
                        "name": MATCH_COUNT_OPTION,
                        "description": "Number of matches",
                        "required": false,
                        "min_value": 1,
                        "max_value": MAX_RECENT_MATCHES,
                    }]);
                }
                definition
            })
            .collect()
    }
}

/// Modal forms the bot can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalSubmission {
    Register,
}

impl ModalSubmission {
    pub fn parse(custom_id: &str) -> Option<Self> {
        match custom_id {
            REGISTER_MODAL_ID => Some(ModalSubmission::Register),
            _ => None,
        }
    }
}

/// Submitted registration form.
#[derive(Debug, Clone, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, max = 32), does_not_contain(pattern = ","))]
    pub player_name: String,
}

impl RegisterForm {
    pub fn new(player_name: &str) -> Self {
        Self {
            player_name: player_name.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for command in Command::ALL {
            assert_eq!(Command::parse(command.name()), Some(command));
        }
        assert_eq!(Command::parse("dance"), None);
    }

    #[test]
    fn test_matches_definition_has_count_option() {
        let definitions = Command::definitions();
        let matches = definitions
            .iter()
            .find(|d| d["name"] == "matches")
            .unwrap();
        assert_eq!(matches["options"][0]["name"], MATCH_COUNT_OPTION);
        assert_eq!(matches["options"][0]["max_value"], MAX_RECENT_MATCHES);
        assert_eq!(definitions.len(), Command::ALL.len());
    }

    #[test]
    fn test_modal_parse() {
        assert_eq!(
            ModalSubmission::parse(REGISTER_MODAL_ID),
            Some(ModalSubmission::Register)
        );
        assert_eq!(ModalSubmission::parse("other_modal"), None);
    }

    #[test]
    fn test_register_form_validation() {
        assert!(RegisterForm::new("  Alice ").validate().is_ok());
        assert_eq!(RegisterForm::new("  Alice ").player_name, "Alice");
        assert!(RegisterForm::new("   ").validate().is_err());
        assert!(RegisterForm::new(&"x".repeat(33)).validate().is_err());
        assert!(RegisterForm::new("Ghost,Alice").validate().is_err());
    }
}
