//! The closed enumeration of generatable content kinds.

use serde::Serialize;

/// One of the sixteen fixed categories of narrative material that can be
/// generated from a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    ThemeSelection,
    SettingTimePeriod,
    MainPlotOutline,
    CharacterCreation,
    CharacterSheets,
    SecretInformation,
    HostsGuide,
    IntroductionSetup,
    ClueDesign,
    CostumePropSuggestions,
    GameFlowTiming,
    ResolutionReveal,
    DebriefDiscussion,
    FeedbackMechanism,
    AdaptationGroupSize,
    SafetyComfortGuidelines,
}

impl ContentKind {
    /// Every kind, in route order.
    pub const ALL: [Self; 16] = [
        Self::ThemeSelection,
        Self::SettingTimePeriod,
        Self::MainPlotOutline,
        Self::CharacterCreation,
        Self::CharacterSheets,
        Self::SecretInformation,
        Self::HostsGuide,
        Self::IntroductionSetup,
        Self::ClueDesign,
        Self::CostumePropSuggestions,
        Self::GameFlowTiming,
        Self::ResolutionReveal,
        Self::DebriefDiscussion,
        Self::FeedbackMechanism,
        Self::AdaptationGroupSize,
        Self::SafetyComfortGuidelines,
    ];

    /// The URL path segment this kind is served under.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::ThemeSelection => "theme-selection",
            Self::SettingTimePeriod => "setting-time-period",
            Self::MainPlotOutline => "main-plot-outline",
            Self::CharacterCreation => "character-creation",
            Self::CharacterSheets => "character-sheets",
            Self::SecretInformation => "secret-information",
            Self::HostsGuide => "hosts-guide",
            Self::IntroductionSetup => "introduction-setup",
            Self::ClueDesign => "clue-design",
            Self::CostumePropSuggestions => "costume-prop-suggestions",
            Self::GameFlowTiming => "game-flow-timing",
            Self::ResolutionReveal => "resolution-reveal",
            Self::DebriefDiscussion => "debrief-discussion",
            Self::FeedbackMechanism => "feedback-mechanism",
            Self::AdaptationGroupSize => "adaptation-group-size",
            Self::SafetyComfortGuidelines => "safety-comfort-guidelines",
        }
    }

    /// The key under which the generated text is returned in the response
    /// body. Kept exactly as callers already depend on, including the odd
    /// ones (`details`, `characters`, `plot_outline`).
    #[must_use]
    pub const fn response_key(self) -> &'static str {
        match self {
            Self::ThemeSelection => "details",
            Self::SettingTimePeriod => "setting_time_period",
            Self::MainPlotOutline => "plot_outline",
            Self::CharacterCreation => "characters",
            Self::CharacterSheets => "character_sheets",
            Self::SecretInformation => "secret_information",
            Self::HostsGuide => "hosts_guide",
            Self::IntroductionSetup => "introduction_setup",
            Self::ClueDesign => "clue_design",
            Self::CostumePropSuggestions => "costume_prop_suggestions",
            Self::GameFlowTiming => "game_flow_timing",
            Self::ResolutionReveal => "resolution_reveal",
            Self::DebriefDiscussion => "debrief_discussion",
            Self::FeedbackMechanism => "feedback_mechanism",
            Self::AdaptationGroupSize => "adaptation_group_size",
            Self::SafetyComfortGuidelines => "safety_comfort_guidelines",
        }
    }

    /// The inline instruction template for this kind, with a `{theme}`
    /// placeholder, or `None` for the one kind whose template lives in the
    /// template store.
    #[must_use]
    pub const fn instruction(self) -> Option<&'static str> {
        match self {
            Self::ThemeSelection => None,
            Self::SettingTimePeriod => Some(
                "Describe the setting and time period for a murder mystery game based on the theme '{theme}'. Include details about the environment, cultural context, and historical elements relevant to this theme.",
            ),
            Self::MainPlotOutline => Some(
                "Create a basic plot outline for a murder mystery game with the theme '{theme}'. Detail the central event, the reason for the gathering, and the victim's role in the story.",
            ),
            Self::CharacterCreation => Some(
                "Develop a list of characters for a murder mystery game with the theme '{theme}'. Provide diverse personalities, backgrounds, and connections to the victim, including potential motives for each character.",
            ),
            Self::CharacterSheets => Some(
                "Generate character sheets for a murder mystery game with the theme '{theme}'. For each character, include a backstory, personality traits, relationships, and any public knowledge or rumors.",
            ),
            Self::SecretInformation => Some(
                "Create secret information for each character in a murder mystery game with the theme '{theme}'. Divide this information into three acts, ensuring each piece of information adds depth to the mystery and character motives.",
            ),
            Self::HostsGuide => Some(
                "Compile a detailed master guide for the host of a murder mystery game with the theme '{theme}'. Include a plot summary, the real sequence of events of the murder, hidden clues, and tips for guiding the game.",
            ),
            Self::IntroductionSetup => Some(
                "Write an introduction script for the host of a murder mystery game with the theme '{theme}'. This should set the scene, introduce characters, and explain the basic premise and rules of the game.",
            ),
            Self::ClueDesign => Some(
                "Design a series of clues for a murder mystery game with the theme '{theme}'. Describe each clue, how it can be discovered, and its relevance to the mystery.",
            ),
            Self::CostumePropSuggestions => Some(
                "Provide costume and prop suggestions for each character in a murder mystery game with the theme '{theme}', enhancing the game's immersion and thematic feel.",
            ),
            Self::GameFlowTiming => Some(
                "Plan the timing and flow for a murder mystery game with the theme '{theme}'. Include the duration of each act, key events, and transitions.",
            ),
            Self::ResolutionReveal => Some(
                "Outline the resolution for a murder mystery game with the theme '{theme}'. Explain how the murderer is revealed, their method, and how this ties into the overall story.",
            ),
            Self::DebriefDiscussion => Some(
                "Create a debrief structure for after a murder mystery game with the theme '{theme}'. Include points for discussion about player strategies, experiences, and the unraveling of the mystery.",
            ),
            Self::FeedbackMechanism => Some(
                "Develop a feedback form for players to complete after participating in a murder mystery game with the theme '{theme}', focusing on areas of enjoyment and improvement.",
            ),
            Self::AdaptationGroupSize => Some(
                "Provide strategies for adapting a murder mystery game with the theme '{theme}' for different group sizes, including modifications for character roles and plot elements.",
            ),
            Self::SafetyComfortGuidelines => Some(
                "Draft guidelines to ensure safety, comfort, and respectful participation for players in a murder mystery game with the theme '{theme}', addressing potential sensitive topics and group dynamics.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_sixteen_distinct_routes() {
        let routes: std::collections::HashSet<&str> =
            ContentKind::ALL.iter().map(|k| k.route()).collect();
        assert_eq!(routes.len(), 16);
    }

    #[test]
    fn test_only_theme_selection_is_file_backed() {
        for kind in ContentKind::ALL {
            assert_eq!(
                kind.instruction().is_none(),
                kind == ContentKind::ThemeSelection,
                "unexpected template source for {kind:?}"
            );
        }
    }

    #[test]
    fn test_inline_instructions_carry_the_theme_placeholder() {
        for kind in ContentKind::ALL {
            if let Some(template) = kind.instruction() {
                assert!(
                    template.contains("'{theme}'"),
                    "missing placeholder in {kind:?}"
                );
            }
        }
    }
}
