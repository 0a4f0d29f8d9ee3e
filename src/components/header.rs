use yew::prelude::*;

use crate::hooks::use_logout;
use crate::services::SessionService;

/// Top bar shown on every protected page: product title, the logged-in
/// user's name and an avatar with a logout dropdown.
#[function_component(HeaderComponent)]
pub fn header_component() -> Html {
    let user_icon_clicked = use_state(|| false);
    let logout = use_logout();

    let user_name = SessionService::new()
        .display_name()
        .unwrap_or_else(|| "User".to_string());

    let toggle_dropdown = {
        let user_icon_clicked = user_icon_clicked.clone();
        Callback::from(move |_: MouseEvent| {
            user_icon_clicked.set(!*user_icon_clicked);
        })
    };

    let on_logout = {
        let logout = logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    html! {
        <header class="app-header">
            <h1>{"Price Optimization Tool"}</h1>
            <div class="user-section">
                <span>{format!("Welcome, {}", user_name)}</span>
                <div class="avatar" onclick={toggle_dropdown}>{"👤"}</div>
                if *user_icon_clicked {
                    <div class="dropdown">
                        <button class="btn-logout" onclick={on_logout}>{"Logout"}</button>
                    </div>
                }
            </div>
        </header>
    }
}
