//! Typed interaction events and the map-trigger wire format.
//!
//! Map objects carry trigger strings in the form `"<key>"` or
//! `"<key>-<arg1>;<arg2>;..."`. Those strings are resolved into a closed
//! [`GameEvent`] exactly once, here, at the trigger boundary; everything past
//! this point works with typed payloads.
use std::fmt;

/// Where a study session takes place; both venues share the study handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyVenue {
    CompSci,
    Hub,
}

impl StudyVenue {
    /// Catalog key the venue's prompt and energy cost are filed under.
    pub fn catalog_key(self) -> &'static str {
        match self {
            Self::CompSci => "comp_sci",
            Self::Hub => "rch",
        }
    }
}

/// Every interaction the dispatcher understands.
///
/// Unknown keys deliberately map to [`GameEvent::Flavor`] rather than an
/// error so map authors can sprinkle described-only props around.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    FadeToBlack,
    FadeFromBlack,
    GameOver,
    /// Close the dialogue without doing anything.
    Exit,
    Tree,
    Chest,
    Sleep,
    Chat { topic: Option<String> },
    Study { venue: StudyVenue, hours: Option<u32> },
    Eat,
    Cook,
    Basketball,
    FeedDucks,
    /// Fallback for props without a dedicated handler.
    Flavor { name: String },
}

/// Raised when a trigger string carries an argument its event cannot use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterError {
    pub key: String,
    pub detail: String,
}

impl ParameterError {
    pub fn new(key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad parameter for '{}': {}", self.key, self.detail)
    }
}

impl std::error::Error for ParameterError {}

impl GameEvent {
    /// Resolves a raw map-authored trigger string.
    ///
    /// The key is everything before the first `-`; the remainder is a
    /// `;`-separated positional argument list (an empty remainder means no
    /// arguments).
    pub fn parse_trigger(raw: &str) -> Result<Self, ParameterError> {
        let (key, params) = match raw.split_once('-') {
            Some((key, params)) => (key, params),
            None => (raw, ""),
        };
        let args: Vec<&str> = if params.is_empty() {
            Vec::new()
        } else {
            params.split(';').collect()
        };
        Self::from_key_args(key, &args)
    }

    /// Builds an event from an already-split key and argument list.
    pub fn from_key_args(key: &str, args: &[&str]) -> Result<Self, ParameterError> {
        let event = match key {
            "fadetoblack" => Self::FadeToBlack,
            "fadefromblack" => Self::FadeFromBlack,
            "gameover" => Self::GameOver,
            "exit" => Self::Exit,
            "tree" => Self::Tree,
            "chest" => Self::Chest,
            // Key as authored in the shipped maps.
            "accomodation" => Self::Sleep,
            "chat" => Self::Chat {
                topic: args.first().map(|topic| (*topic).to_string()),
            },
            "comp_sci" => Self::Study {
                venue: StudyVenue::CompSci,
                hours: parse_hours(key, args)?,
            },
            "rch" => Self::Study {
                venue: StudyVenue::Hub,
                hours: parse_hours(key, args)?,
            },
            "eat" => Self::Eat,
            "cook" => Self::Cook,
            "basketball" => Self::Basketball,
            "ducks" => Self::FeedDucks,
            other => Self::Flavor {
                name: other.to_string(),
            },
        };
        Ok(event)
    }
}

fn parse_hours(key: &str, args: &[&str]) -> Result<Option<u32>, ParameterError> {
    match args.first() {
        None => Ok(None),
        Some(raw) => raw.parse::<u32>().map(Some).map_err(|_| {
            ParameterError::new(key, format!("expected a whole number of hours, got '{raw}'"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_keys_resolve_without_arguments() {
        assert_eq!(GameEvent::parse_trigger("tree"), Ok(GameEvent::Tree));
        assert_eq!(GameEvent::parse_trigger("accomodation"), Ok(GameEvent::Sleep));
        assert_eq!(
            GameEvent::parse_trigger("chat"),
            Ok(GameEvent::Chat { topic: None })
        );
    }

    #[test]
    fn dashed_arguments_become_typed_payloads() {
        assert_eq!(
            GameEvent::parse_trigger("comp_sci-2"),
            Ok(GameEvent::Study {
                venue: StudyVenue::CompSci,
                hours: Some(2),
            })
        );
        assert_eq!(
            GameEvent::parse_trigger("chat-Dogs"),
            Ok(GameEvent::Chat {
                topic: Some("Dogs".to_string()),
            })
        );
    }

    #[test]
    fn only_the_first_dash_splits_key_from_params() {
        assert_eq!(
            GameEvent::parse_trigger("chat-dogs-and-cats"),
            Ok(GameEvent::Chat {
                topic: Some("dogs-and-cats".to_string()),
            })
        );
    }

    #[test]
    fn unknown_keys_fall_back_to_flavor() {
        assert_eq!(
            GameEvent::parse_trigger("fountain"),
            Ok(GameEvent::Flavor {
                name: "fountain".to_string(),
            })
        );
    }

    #[test]
    fn malformed_hours_raise_a_parameter_error() {
        let error = GameEvent::parse_trigger("comp_sci-lots").unwrap_err();
        assert_eq!(error.key, "comp_sci");
        assert!(error.detail.contains("lots"));
    }

    #[test]
    fn semicolons_split_positional_arguments() {
        // Extra positional arguments beyond the first are tolerated.
        assert_eq!(
            GameEvent::parse_trigger("rch-3;ignored"),
            Ok(GameEvent::Study {
                venue: StudyVenue::Hub,
                hours: Some(3),
            })
        );
    }
}
