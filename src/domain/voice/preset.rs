use std::path::PathBuf;

/// Language a catalog voice speaks, which also picks the phrase book it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Japanese,
    French,
}

impl Language {
    /// Short code used in preset keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::French => "fr",
        }
    }

    /// Directory name under the audio root
    pub fn dir_name(&self) -> &'static str {
        match self {
            Language::Japanese => "Japanese",
            Language::French => "French",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "ja" => Some(Language::Japanese),
            "fr" => Some(Language::French),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "m",
            Gender::Female => "f",
        }
    }

    pub fn dir_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code {
            'm' => Some(Gender::Male),
            'f' => Some(Gender::Female),
            _ => None,
        }
    }
}

/// A named ElevenLabs voice from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoicePreset {
    pub language: Language,
    pub gender: Gender,
    pub index: u8,
    pub voice_id: &'static str,
}

const fn preset(language: Language, gender: Gender, index: u8, voice_id: &'static str) -> VoicePreset {
    VoicePreset {
        language,
        gender,
        index,
        voice_id,
    }
}

pub const VOICE_PRESETS: [VoicePreset; 12] = [
    preset(Language::Japanese, Gender::Male, 1, "3JDquces8E8bkmvbh6Bc"),
    preset(Language::Japanese, Gender::Male, 2, "LIisRj2veIKEBdr6KZ5y"),
    preset(Language::Japanese, Gender::Male, 3, "6wdSVG3CMjPfAthsnMv9"),
    preset(Language::Japanese, Gender::Female, 1, "wcs09USXSN5Bl7FXohVZ"),
    preset(Language::Japanese, Gender::Female, 2, "GxhGYQesaQaYKePCZDEC"),
    preset(Language::Japanese, Gender::Female, 3, "8kgj5469z1URcH4MB2G4"),
    preset(Language::French, Gender::Male, 1, "MIuhjMla9d1GsjEn0qCp"),
    preset(Language::French, Gender::Male, 2, "zNijNwkR2nhHrbrmJITT"),
    preset(Language::French, Gender::Male, 3, "w4FDa0ya9UrortMOEDXi"),
    preset(Language::French, Gender::Female, 1, "Da9VfudgKUvFOKayCiue"),
    preset(Language::French, Gender::Female, 2, "YxrwjAKoUKULGd0g8K9Y"),
    preset(Language::French, Gender::Female, 3, "12CHcREbuPdJY02VY7zT"),
];

pub const DEFAULT_PRESET_KEY: &str = "fr-f3";

impl VoicePreset {
    /// Look up a preset by its key, e.g. `fr-f3` or `ja-m1`
    pub fn from_key(key: &str) -> Option<VoicePreset> {
        let key = key.trim().to_lowercase();
        let (language, voice) = key.split_once('-')?;
        let language = Language::from_code(language)?;

        let mut chars = voice.chars();
        let gender = Gender::from_code(chars.next()?)?;
        let index: u8 = chars.as_str().parse().ok()?;

        VOICE_PRESETS
            .iter()
            .copied()
            .find(|p| p.language == language && p.gender == gender && p.index == index)
    }

    pub fn key(&self) -> String {
        format!("{}-{}{}", self.language.as_str(), self.gender.as_str(), self.index)
    }

    /// Conventional sub-directory for this voice, e.g. `French/Female3`
    pub fn output_subdir(&self) -> PathBuf {
        PathBuf::from(self.language.dir_name())
            .join(format!("{}{}", self.gender.dir_name(), self.index))
    }
}

impl std::fmt::Display for VoicePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
