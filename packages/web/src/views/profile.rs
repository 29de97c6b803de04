use dioxus::prelude::*;
use ui::views::ProfileView;

use crate::Route;

#[component]
pub fn Profile(id: i64) -> Element {
    rsx! {
        nav {
            class: "top-nav",
            Link { to: Route::Home {}, "Home" }
        }
        ProfileView { user_id: id }
    }
}
