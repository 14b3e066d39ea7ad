// AI module for computer opponents

mod bot;
mod scripted_bot;

pub use bot::Bot;
pub use scripted_bot::{ScriptedBot, ScriptedBotConfig};

/// Bot type selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BotType {
    /// Wide aim error, gives up on placement quickly
    Easy,
    /// The classic computer opponent
    Medium,
    /// Tight aim, patient placement
    Hard,
}

impl BotType {
    /// Get display name for bot type
    pub fn display_name(&self) -> &'static str {
        match self {
            BotType::Easy => "Easy",
            BotType::Medium => "Medium",
            BotType::Hard => "Hard",
        }
    }

    /// Get description for bot type
    pub fn description(&self) -> &'static str {
        match self {
            BotType::Easy => "Beginner-friendly - sprays shots around",
            BotType::Medium => "Goes for the queen, aims roughly",
            BotType::Hard => "Goes for the queen, rarely misses the line",
        }
    }

    /// Get all available bot types
    pub fn all() -> Vec<BotType> {
        vec![BotType::Easy, BotType::Medium, BotType::Hard]
    }

    /// Parse the difficulty name used in the config file
    pub fn from_name(name: &str) -> Option<BotType> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Some(BotType::Easy),
            "medium" => Some(BotType::Medium),
            "hard" => Some(BotType::Hard),
            _ => None,
        }
    }
}

/// Create a bot instance from a bot type
///
/// `think_frames` overrides the preset's pause (from the config file).
pub fn create_bot(bot_type: BotType, think_frames: Option<u32>) -> Box<dyn Bot> {
    let mut config = match bot_type {
        BotType::Easy => ScriptedBot::easy(),
        BotType::Medium => ScriptedBot::medium(),
        BotType::Hard => ScriptedBot::hard(),
    };
    if let Some(frames) = think_frames {
        config.think_frames = frames;
    }
    Box::new(ScriptedBot::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_type_from_name() {
        assert_eq!(BotType::from_name("HARD"), Some(BotType::Hard));
        assert_eq!(BotType::from_name("medium"), Some(BotType::Medium));
        assert_eq!(BotType::from_name("impossible"), None);
    }

    #[test]
    fn test_create_bot_names() {
        for bot_type in BotType::all() {
            let bot = create_bot(bot_type, Some(0));
            assert_eq!(bot.name(), bot_type.display_name());
        }
    }
}
