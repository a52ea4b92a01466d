//! Scripted FAQ replies for the home page assistant widget.
//!
//! Replies are chosen by keyword rules evaluated in order; the first rule with a keyword
//! contained in the lower-cased message wins.

use crate::{
    model::assistant::{AssistantIntroDto, AssistantTopicDto},
    server::error::AppError,
};

const GREETING: &str =
    "Selam! 👋 I’m your VisitEthiopia assistant. Ask me about cities, culture, food, or trip ideas.";

const TOPICS: &[(&str, &str)] = &[
    ("🎉", "Festivals & culture"),
    ("🏰", "Historical sites"),
    ("🚌", "Transport info"),
];

const FALLBACK_REPLY: &str = "I can help with travel tips, food recommendations, site information, or booking guides. What would you like to know?";

const RULES: &[(&[&str], &str)] = &[
    (
        &["hello", "hi", "selam"],
        "Selam! I'm here to help you plan your Ethiopian adventure. Try asking about 'Gondar', 'Lalibela', or 'local food'.",
    ),
    (
        &["food", "injera", "eat"],
        "Ethiopian cuisine is famous! You must try Injera with Doro Wat (spicy chicken stew). We also have amazing vegetarian dishes like Shiro and Misir Wat.",
    ),
    (
        &["culture", "festival", "timket"],
        "Ethiopia has a rich cultural heritage. Key festivals include Timket (Epiphany) in Jan and Meskel in Sept. Coffee ceremonies are also a must-experience tradition!",
    ),
    (
        &["site", "place", "visit", "lalibela"],
        "Top destinations include the rock-hewn churches of Lalibela, the castles of Gondar, and the Simien Mountains. You can book guides for these sites here!",
    ),
    (
        &["login", "sign in"],
        "To Log In: Click the 'Sign In' button at the top right. You need an account to book visits.",
    ),
    (
        &["book", "reservation"],
        "To Book: Login > 'Explore Sites' > Select a site > 'Request Visit'. Simple as that!",
    ),
];

pub struct AssistantService;

impl AssistantService {
    /// Opening message and suggested topics shown when the widget opens.
    pub fn intro() -> AssistantIntroDto {
        AssistantIntroDto {
            greeting: GREETING.to_string(),
            topics: TOPICS
                .iter()
                .map(|(icon, text)| AssistantTopicDto {
                    icon: icon.to_string(),
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    /// Picks the reply for a visitor message.
    ///
    /// # Returns
    /// - `Ok(&str)` - Reply of the first matching rule, or the fallback reply
    /// - `Err(AppError::BadRequest)` - Message is empty or whitespace only
    pub fn reply(message: &str) -> Result<&'static str, AppError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::BadRequest("Message must not be empty".to_string()));
        }

        let lower = message.to_lowercase();

        let reply = RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
            .map(|(_, reply)| *reply)
            .unwrap_or(FALLBACK_REPLY);

        Ok(reply)
    }
}
