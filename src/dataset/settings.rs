/// A system-wide configuration record
#[derive(Debug, Clone, Copy)]
pub struct SettingRecord {
    pub key: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

/// Natural key of the API key setting.
pub const API_KEY_SETTING: &str = "ANTHROPIC_API_KEY";

/// Seeded in place of a real secret; an administrator replaces it after seeding.
pub const API_KEY_PLACEHOLDER: &str = "your-api-key-here";

pub const SYSTEM_SETTINGS: &[SettingRecord] = &[
    SettingRecord {
        key: API_KEY_SETTING,
        value: API_KEY_PLACEHOLDER,
        description: "Anthropic Claude API key for AI responses (replace after seeding)",
    },
    SettingRecord {
        key: "UNIVERSITY_NAME",
        value: "Murang'a University of Technology",
        description: "Official university name",
    },
    SettingRecord {
        key: "UNIVERSITY_ACRONYM",
        value: "MUT",
        description: "University acronym",
    },
    SettingRecord {
        key: "SUPPORT_EMAIL",
        value: "support@mut.ac.ke",
        description: "Support email address",
    },
    SettingRecord {
        key: "SUPPORT_PHONE",
        value: "+254 712 345 678",
        description: "Support phone number",
    },
];
