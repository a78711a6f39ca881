//! # Settings Form Component
//!
//! Form for the company identity and the GitHub connection. Shared by
//! the setup screen and the settings view.

use dioxus::prelude::*;

use khata_types::{AppSettings, CompanyDetails};

use crate::state::AppState;

/// Settings form component.
///
/// Seeds its fields from the current settings and submits through
/// [`AppState::save_settings`], which writes the remote document before
/// committing anything.
#[component]
pub fn SettingsForm() -> Element {
    let mut state = use_context::<AppState>();

    // Form state
    let mut name_input = use_signal(|| state.settings.read().company_details.name.clone());
    let mut address_input = use_signal(|| state.settings.read().company_details.address.clone());
    let mut phone_input = use_signal(|| state.settings.read().company_details.phone.clone());
    let mut email_input = use_signal(|| state.settings.read().company_details.email.clone());
    let mut tax_id_input = use_signal(|| state.settings.read().company_details.tax_id.clone());
    let mut logo_input =
        use_signal(|| state.settings.read().logo_base64.clone().unwrap_or_default());
    let mut token_input = use_signal(|| state.settings.read().github_token.clone());
    let mut repo_input = use_signal(|| state.settings.read().github_repo.clone());
    let mut form_error = use_signal(|| Option::<String>::None);

    let saving = *state.syncing.read();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let token = token_input.read().trim().to_string();
        let repo = repo_input.read().trim().to_string();

        // Client-side validation
        if token.is_empty() {
            form_error.set(Some("GitHub token is required".to_string()));
            return;
        }
        if repo.is_empty() || !repo.contains('/') {
            form_error.set(Some("Repository must be in 'owner/name' format".to_string()));
            return;
        }

        let name = name_input.read().trim().to_string();
        let logo = logo_input.read().trim().to_string();
        let new_settings = AppSettings {
            theme: state.settings.read().theme,
            company_details: CompanyDetails {
                name: if name.is_empty() {
                    CompanyDetails::default().name
                } else {
                    name
                },
                address: address_input.read().trim().to_string(),
                phone: phone_input.read().trim().to_string(),
                email: email_input.read().trim().to_string(),
                tax_id: tax_id_input.read().trim().to_string(),
            },
            logo_base64: if logo.is_empty() { None } else { Some(logo) },
            github_token: token,
            github_repo: repo,
        };

        form_error.set(None);
        state.save_settings(new_settings);
    };

    rsx! {
        form {
            class: "settings-form",
            onsubmit: on_submit,

            h3 { class: "mb-md", "Company" }

            div {
                class: "form-field mb-md",

                label { r#for: "company-name", "Company Name" }
                input {
                    id: "company-name",
                    r#type: "text",
                    value: "{name_input}",
                    oninput: move |evt| name_input.set(evt.value().clone()),
                    disabled: saving,
                }
            }

            div {
                class: "form-field mb-md",

                label { r#for: "company-address", "Address" }
                input {
                    id: "company-address",
                    r#type: "text",
                    value: "{address_input}",
                    oninput: move |evt| address_input.set(evt.value().clone()),
                    disabled: saving,
                }
            }

            div {
                class: "form-row mb-md",

                div {
                    class: "form-field",

                    label { r#for: "company-phone", "Phone" }
                    input {
                        id: "company-phone",
                        r#type: "text",
                        value: "{phone_input}",
                        oninput: move |evt| phone_input.set(evt.value().clone()),
                        disabled: saving,
                    }
                }

                div {
                    class: "form-field",

                    label { r#for: "company-email", "Email" }
                    input {
                        id: "company-email",
                        r#type: "text",
                        value: "{email_input}",
                        oninput: move |evt| email_input.set(evt.value().clone()),
                        disabled: saving,
                    }
                }
            }

            div {
                class: "form-row mb-md",

                div {
                    class: "form-field",

                    label { r#for: "company-tax-id", "Tax ID" }
                    input {
                        id: "company-tax-id",
                        r#type: "text",
                        value: "{tax_id_input}",
                        oninput: move |evt| tax_id_input.set(evt.value().clone()),
                        disabled: saving,
                    }
                }

                div {
                    class: "form-field",

                    label { r#for: "company-logo", "Logo (data URL, optional)" }
                    input {
                        id: "company-logo",
                        r#type: "text",
                        value: "{logo_input}",
                        placeholder: "data:image/png;base64,...",
                        oninput: move |evt| logo_input.set(evt.value().clone()),
                        disabled: saving,
                    }
                }
            }

            h3 { class: "mb-md", "GitHub Connection" }

            div {
                class: "form-field mb-md",

                label { r#for: "github-token", "Personal Access Token" }
                input {
                    id: "github-token",
                    r#type: "password",
                    value: "{token_input}",
                    placeholder: "ghp_...",
                    oninput: move |evt| token_input.set(evt.value().clone()),
                    disabled: saving,
                }
            }

            div {
                class: "form-field mb-md",

                label { r#for: "github-repo", "Data Repository" }
                input {
                    id: "github-repo",
                    r#type: "text",
                    value: "{repo_input}",
                    placeholder: "owner/repository",
                    oninput: move |evt| repo_input.set(evt.value().clone()),
                    disabled: saving,
                }
            }

            // Validation error
            if let Some(err) = form_error.read().as_ref() {
                div {
                    class: "alert alert-error mb-md",
                    "{err}"
                }
            }

            button {
                class: "btn-primary",
                r#type: "submit",
                disabled: saving,
                if saving { "Saving..." } else { "Save Settings" }
            }
        }
    }
}
