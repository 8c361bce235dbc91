//! Closed language and platform sets.
//!
//! Wire format uses the bare variant name ("Chinese"); prompts and UIs use
//! the display label ("Chinese (Mandarin)"). The label is what the model
//! sees, so it carries the disambiguating detail.

use serde::{Deserialize, Serialize};

/// Language the rewrite should be produced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLanguage {
    English,
    Chinese,
    Spanish,
    Japanese,
    Korean,
    French,
    German,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 7] = [
        TargetLanguage::English,
        TargetLanguage::Chinese,
        TargetLanguage::Spanish,
        TargetLanguage::Japanese,
        TargetLanguage::Korean,
        TargetLanguage::French,
        TargetLanguage::German,
    ];

    /// Display label, used verbatim in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            TargetLanguage::English => "English",
            TargetLanguage::Chinese => "Chinese (Mandarin)",
            TargetLanguage::Spanish => "Spanish",
            TargetLanguage::Japanese => "Japanese",
            TargetLanguage::Korean => "Korean",
            TargetLanguage::French => "French",
            TargetLanguage::German => "German",
        }
    }

    /// Platforms a UI would offer for this language. Choice population only:
    /// the generator accepts any language/platform pairing.
    pub fn relevant_platforms(&self) -> &'static [SocialPlatform] {
        use SocialPlatform::*;
        match self {
            TargetLanguage::English => &[Twitter, Reddit, Instagram, LinkedIn],
            TargetLanguage::Chinese => &[RedNote, Weibo, WeChat],
            TargetLanguage::Spanish => &[Twitter, Instagram, General],
            TargetLanguage::Japanese => &[Twitter, Line, General],
            TargetLanguage::Korean => &[KakaoTalk, Instagram, General],
            TargetLanguage::French => &[Twitter, Instagram, General],
            TargetLanguage::German => &[Twitter, Instagram, General],
        }
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Social or messaging context whose conventions shape the rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialPlatform {
    Twitter,
    Reddit,
    LinkedIn,
    Instagram,
    RedNote,
    Weibo,
    WeChat,
    Line,
    KakaoTalk,
    General,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 10] = [
        SocialPlatform::Twitter,
        SocialPlatform::Reddit,
        SocialPlatform::LinkedIn,
        SocialPlatform::Instagram,
        SocialPlatform::RedNote,
        SocialPlatform::Weibo,
        SocialPlatform::WeChat,
        SocialPlatform::Line,
        SocialPlatform::KakaoTalk,
        SocialPlatform::General,
    ];

    /// Display label, used verbatim in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "X (Twitter)",
            SocialPlatform::Reddit => "Reddit",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::RedNote => "RedNote (Xiaohongshu)",
            SocialPlatform::Weibo => "Weibo",
            SocialPlatform::WeChat => "WeChat",
            SocialPlatform::Line => "Line",
            SocialPlatform::KakaoTalk => "KakaoTalk",
            SocialPlatform::General => "General / No Specific Platform",
        }
    }
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Language explanations (and other user-facing text) are rendered in.
/// Labels are the languages' own names, as a language picker shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemLanguage {
    English,
    Chinese,
    Spanish,
    Japanese,
    Korean,
    French,
    German,
}

impl SystemLanguage {
    pub const ALL: [SystemLanguage; 7] = [
        SystemLanguage::English,
        SystemLanguage::Chinese,
        SystemLanguage::Spanish,
        SystemLanguage::Japanese,
        SystemLanguage::Korean,
        SystemLanguage::French,
        SystemLanguage::German,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SystemLanguage::English => "English",
            SystemLanguage::Chinese => "简体中文",
            SystemLanguage::Spanish => "Español",
            SystemLanguage::Japanese => "日本語",
            SystemLanguage::Korean => "한국어",
            SystemLanguage::French => "Français",
            SystemLanguage::German => "Deutsch",
        }
    }
}

impl std::fmt::Display for SystemLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Canned personas offered by the UI. Free-text personas are equally valid;
/// this list only seeds the picker.
pub const PREDEFINED_PERSONAS: [&str; 8] = [
    "Average Native Speaker",
    "Professional Expert",
    "Gen Z / Internet Native",
    "Witty & Sarcastic",
    "Warm & Empathetic",
    "Academic Professor",
    "Hype Influencer",
    "Poetic & Romantic",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_language_labels_carry_disambiguation() {
        assert_eq!(TargetLanguage::Chinese.label(), "Chinese (Mandarin)");
        assert_eq!(TargetLanguage::English.label(), "English");
    }

    #[test]
    fn test_platform_labels_match_display_names() {
        assert_eq!(SocialPlatform::Twitter.label(), "X (Twitter)");
        assert_eq!(SocialPlatform::RedNote.label(), "RedNote (Xiaohongshu)");
        assert_eq!(
            SocialPlatform::General.label(),
            "General / No Specific Platform"
        );
    }

    #[test]
    fn test_wire_format_uses_variant_names() {
        let lang: TargetLanguage = serde_json::from_str(r#""Chinese""#).unwrap();
        assert_eq!(lang, TargetLanguage::Chinese);
        assert_eq!(
            serde_json::to_string(&SocialPlatform::RedNote).unwrap(),
            r#""RedNote""#
        );
    }

    #[test]
    fn test_unknown_wire_value_is_rejected() {
        let result: Result<SocialPlatform, _> = serde_json::from_str(r#""Myspace""#);
        assert!(result.is_err(), "platforms are a closed set");
    }

    #[test]
    fn test_every_language_has_relevant_platforms() {
        for lang in TargetLanguage::ALL {
            assert!(
                !lang.relevant_platforms().is_empty(),
                "{lang} must offer at least one platform"
            );
        }
    }

    #[test]
    fn test_chinese_platforms_are_the_domestic_networks() {
        let platforms = TargetLanguage::Chinese.relevant_platforms();
        assert!(platforms.contains(&SocialPlatform::RedNote));
        assert!(platforms.contains(&SocialPlatform::Weibo));
        assert!(platforms.contains(&SocialPlatform::WeChat));
        assert!(!platforms.contains(&SocialPlatform::Twitter));
    }

    #[test]
    fn test_system_language_labels_are_native_names() {
        assert_eq!(SystemLanguage::Chinese.label(), "简体中文");
        assert_eq!(SystemLanguage::German.label(), "Deutsch");
    }

    #[test]
    fn test_default_persona_is_first_predefined() {
        assert_eq!(PREDEFINED_PERSONAS[0], "Average Native Speaker");
    }
}
