//! Landing page.

use dioxus::prelude::*;
use ui::{format::today, PageLayout};

use crate::Route;

/// Welcome page with a shortcut to a profile.
#[component]
pub fn Home() -> Element {
    let mut user_id = use_signal(String::new);
    let nav = use_navigator();
    let date = today();

    let open_profile = move |_| {
        if let Ok(id) = user_id().trim().parse::<i64>() {
            nav.push(Route::Profile { id });
        }
    };

    rsx! {
        PageLayout {
            title: "FitTrack",
            extra: rsx! { span { class: "today", "{date}" } },

            p { "Track your training and diet plans." }

            div {
                class: "home-open-profile",
                input {
                    placeholder: "User ID",
                    value: "{user_id}",
                    oninput: move |evt| user_id.set(evt.value()),
                }
                button {
                    class: "btn",
                    disabled: user_id().trim().parse::<i64>().is_err(),
                    onclick: open_profile,
                    "Open profile"
                }
            }
        }
    }
}
