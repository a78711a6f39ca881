//! Application settings types.

use serde::{Deserialize, Serialize};

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Returns the CSS class applied to the shell root for this theme.
    #[must_use]
    pub fn as_class(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite theme.
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Company identity shown on the sidebar and on printed documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetails {
    /// Company display name.
    pub name: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Tax registration number.
    #[serde(default)]
    pub tax_id: String,
}

impl Default for CompanyDetails {
    fn default() -> Self {
        Self {
            name: "My Company".to_string(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            tax_id: String::new(),
        }
    }
}

/// Application settings.
///
/// Persisted twice: locally (the settings file under the user config
/// directory) and remotely (`data/settings.json` in the configured
/// repository). The GitHub credential pair gates every remote operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// UI theme.
    #[serde(default)]
    pub theme: Theme,
    /// Company identity.
    #[serde(default)]
    pub company_details: CompanyDetails,
    /// Base64-encoded logo image, if one was uploaded.
    #[serde(default)]
    pub logo_base64: Option<String>,
    /// GitHub personal access token.
    #[serde(default)]
    pub github_token: String,
    /// Target repository as `owner/name`.
    #[serde(default)]
    pub github_repo: String,
}

impl AppSettings {
    /// Whether a remote credential pair is present.
    ///
    /// Until this returns true no remote read or write is attempted and
    /// the shell routes to the setup screen.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.github_token.is_empty() && !self.github_repo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_unconfigured() {
        let settings = AppSettings::default();
        assert!(!settings.is_configured());
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.company_details.name, "My Company");
    }

    #[test]
    fn test_configured_requires_both_token_and_repo() {
        let mut settings = AppSettings {
            github_token: "t".to_string(),
            ..Default::default()
        };
        assert!(!settings.is_configured());

        settings.github_repo = "owner/name".to_string();
        assert!(settings.is_configured());
    }

    #[test]
    fn test_theme_class_and_toggle() {
        assert_eq!(Theme::Light.as_class(), "light");
        assert_eq!(Theme::Dark.as_class(), "dark");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_settings_keep_camel_case_field_names() {
        // Existing data repositories use camelCase keys.
        let json = r#"{"githubToken":"t","githubRepo":"o/r","theme":"dark"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.github_token, "t");
        assert_eq!(settings.github_repo, "o/r");
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.is_configured());

        let out = serde_json::to_string(&settings).unwrap();
        assert!(out.contains("\"githubToken\""));
        assert!(out.contains("\"companyDetails\""));
        assert!(out.contains("\"logoBase64\""));
    }
}
