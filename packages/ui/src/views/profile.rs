//! User profile page: shows the profile and lets the user edit contact and
//! body details.

use api::{ApiError, ApiResponse, UserInfo, UserUpdate};
use dioxus::prelude::*;

use crate::client::use_api;
use crate::format::parse_and_format_date;
use crate::PageLayout;

/// Editable profile fields as typed into the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub nickname: String,
    pub phone: String,
    pub email: String,
    pub age: String,
    pub height: String,
    pub weight: String,
}

impl ProfileForm {
    pub fn from_user(user: &UserInfo) -> Self {
        Self {
            nickname: user.nickname.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            age: user.age.map(|a| a.to_string()).unwrap_or_default(),
            height: user.height.map(|h| h.to_string()).unwrap_or_default(),
            weight: user.weight.map(|w| w.to_string()).unwrap_or_default(),
        }
    }

    /// Build an update holding only the fields that differ from `original`.
    /// Cleared fields are left untouched.
    pub fn to_update(&self, original: &UserInfo) -> Result<UserUpdate, String> {
        let age = parse_field::<i32>(&self.age, "Age")?;
        let height = parse_field::<f64>(&self.height, "Height")?;
        let weight = parse_field::<f64>(&self.weight, "Weight")?;

        Ok(UserUpdate {
            nickname: changed_text(&self.nickname, &original.nickname),
            phone: changed_text(&self.phone, &original.phone),
            email: changed_text(&self.email, &original.email),
            age: age.filter(|a| Some(*a) != original.age),
            height: height.filter(|h| Some(*h) != original.height),
            weight: weight.filter(|w| Some(*w) != original.weight),
            ..Default::default()
        })
    }
}

/// Load state of the profile page. A new load always starts from
/// [`ProfileLoad::Loading`], so a previous user or error is never shown while
/// another user is being fetched.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProfileLoad {
    #[default]
    Loading,
    Ready(UserInfo),
    Failed(String),
}

impl ProfileLoad {
    pub fn from_result(result: Result<UserInfo, ApiError>) -> Self {
        match result {
            Ok(info) => ProfileLoad::Ready(info),
            Err(e) => ProfileLoad::Failed(e.to_string()),
        }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            ProfileLoad::Ready(info) => Some(info),
            _ => None,
        }
    }
}

fn changed_text(value: &str, original: &Option<String>) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || original.as_deref() == Some(value) {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_field<T: std::str::FromStr>(value: &str, label: &str) -> Result<Option<T>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| format!("{label} must be a number"))
}

fn gender_label(gender: Option<i32>) -> &'static str {
    match gender {
        Some(1) => "Male",
        Some(2) => "Female",
        _ => "Unspecified",
    }
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

/// Profile page for a single user.
#[component]
pub fn ProfileView(user_id: i64) -> Element {
    let api = use_api();
    let mut load = use_signal(ProfileLoad::default);
    let mut form = use_signal(ProfileForm::default);
    let mut editing = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut save_error = use_signal(|| Option::<String>::None);
    let mut phone_taken = use_signal(|| false);
    let mut email_taken = use_signal(|| false);

    let load_api = api.clone();
    let _loader = use_resource(use_reactive!(|(user_id,)| {
        let api = load_api.clone();
        async move {
            load.set(ProfileLoad::Loading);
            let result = api.get_user_info(user_id).await.and_then(ApiResponse::into_result);
            match result {
                Ok(ref info) => form.set(ProfileForm::from_user(info)),
                Err(ref e) => tracing::error!("Failed to load user {}: {}", user_id, e),
            }
            load.set(ProfileLoad::from_result(result));
        }
    }));

    let phone_api = api.clone();
    let check_phone = move |_| {
        let api = phone_api.clone();
        async move {
            let phone = form().phone.trim().to_string();
            let original = load().user().and_then(|u| u.phone.clone());
            if phone.is_empty() || original.as_deref() == Some(phone.as_str()) {
                phone_taken.set(false);
                return;
            }
            match api.check_phone(&phone).await {
                Ok(response) => phone_taken.set(response.data.unwrap_or(false)),
                Err(e) => tracing::warn!("Phone check failed: {}", e),
            }
        }
    };

    let email_api = api.clone();
    let check_email = move |_| {
        let api = email_api.clone();
        async move {
            let email = form().email.trim().to_string();
            let original = load().user().and_then(|u| u.email.clone());
            if email.is_empty() || original.as_deref() == Some(email.as_str()) {
                email_taken.set(false);
                return;
            }
            match api.check_email(&email).await {
                Ok(response) => email_taken.set(response.data.unwrap_or(false)),
                Err(e) => tracing::warn!("Email check failed: {}", e),
            }
        }
    };

    let save_api = api.clone();
    let on_save = move |_| {
        let api = save_api.clone();
        async move {
            let Some(original) = load().user().cloned() else {
                return;
            };
            let update = match form().to_update(&original) {
                Ok(update) => update,
                Err(e) => {
                    save_error.set(Some(e));
                    return;
                }
            };
            if update.is_empty() {
                editing.set(false);
                return;
            }

            saving.set(true);
            match api
                .update_user_info(original.id, &update)
                .await
                .and_then(ApiResponse::into_result)
            {
                Ok(info) => {
                    form.set(ProfileForm::from_user(&info));
                    load.set(ProfileLoad::Ready(info));
                    save_error.set(None);
                    editing.set(false);
                }
                Err(e) => {
                    tracing::error!("Failed to update user {}: {}", original.id, e);
                    save_error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        }
    };

    let on_cancel = move |_| {
        if let Some(info) = load().user() {
            form.set(ProfileForm::from_user(info));
        }
        phone_taken.set(false);
        email_taken.set(false);
        save_error.set(None);
        editing.set(false);
    };

    let info = match load() {
        ProfileLoad::Ready(info) => info,
        ProfileLoad::Loading => {
            return rsx! {
                PageLayout {
                    title: "Profile",
                    p { "Loading..." }
                }
            };
        }
        ProfileLoad::Failed(e) => {
            return rsx! {
                PageLayout {
                    title: "Profile",
                    p { class: "page-error", "Could not load profile: {e}" }
                }
            };
        }
    };

    let title = info.display_name().to_string();
    let created = info
        .create_time
        .as_deref()
        .map(parse_and_format_date)
        .unwrap_or_else(|| "-".to_string());
    let goal = or_dash(info.fitness_goal.map(|g| g.to_string()));
    let status = if info.is_active() { "Active" } else { "Disabled" };

    rsx! {
        PageLayout {
            title: "{title}",
            extra: rsx! {
                if !editing() {
                    button {
                        class: "btn",
                        onclick: move |_| editing.set(true),
                        "Edit"
                    }
                }
            },

            if editing() {
                div {
                    class: "profile-form",

                    label {
                        "Nickname"
                        input {
                            value: "{form().nickname}",
                            oninput: move |evt| form.write().nickname = evt.value(),
                        }
                    }
                    label {
                        "Phone"
                        input {
                            value: "{form().phone}",
                            oninput: move |evt| form.write().phone = evt.value(),
                            onblur: check_phone,
                        }
                        if phone_taken() {
                            span { class: "field-hint", "This phone number is already in use" }
                        }
                    }
                    label {
                        "Email"
                        input {
                            r#type: "email",
                            value: "{form().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                            onblur: check_email,
                        }
                        if email_taken() {
                            span { class: "field-hint", "This email is already in use" }
                        }
                    }
                    label {
                        "Age"
                        input {
                            r#type: "number",
                            value: "{form().age}",
                            oninput: move |evt| form.write().age = evt.value(),
                        }
                    }
                    label {
                        "Height (cm)"
                        input {
                            r#type: "number",
                            value: "{form().height}",
                            oninput: move |evt| form.write().height = evt.value(),
                        }
                    }
                    label {
                        "Weight (kg)"
                        input {
                            r#type: "number",
                            value: "{form().weight}",
                            oninput: move |evt| form.write().weight = evt.value(),
                        }
                    }

                    if let Some(e) = save_error() {
                        p { class: "page-error", "{e}" }
                    }

                    div {
                        style: "display: flex; gap: 0.5rem;",
                        button {
                            class: "btn",
                            disabled: saving() || phone_taken() || email_taken(),
                            onclick: on_save,
                            if saving() { "Saving..." } else { "Save" }
                        }
                        button {
                            class: "btn btn--secondary",
                            onclick: on_cancel,
                            "Cancel"
                        }
                    }
                }
            } else {
                dl {
                    class: "profile-fields",
                    dt { "Username" }
                    dd { "{info.username}" }
                    dt { "Phone" }
                    dd { {or_dash(info.phone.clone())} }
                    dt { "Email" }
                    dd { {or_dash(info.email.clone())} }
                    dt { "Gender" }
                    dd { {gender_label(info.gender)} }
                    dt { "Age" }
                    dd { {or_dash(info.age.map(|a| a.to_string()))} }
                    dt { "Height" }
                    dd { {or_dash(info.height.map(|h| format!("{h} cm")))} }
                    dt { "Weight" }
                    dd { {or_dash(info.weight.map(|w| format!("{w} kg")))} }
                    dt { "Fitness goal" }
                    dd { "{goal}" }
                    dt { "Status" }
                    dd { "{status}" }
                    dt { "Member since" }
                    dd { "{created}" }
                }
            }
        }
    }
}
