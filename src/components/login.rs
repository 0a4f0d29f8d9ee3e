use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::LoginRequest;
use crate::services::{auth_service, ApiError, SessionService};
use crate::utils::constants::{ROUTE_HOME, ROUTE_REGISTER};
use crate::utils::navigation;

#[function_component(Login)]
pub fn login() -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let username = username_input.value();
                let password = password_input.value();

                if username.is_empty() || password.is_empty() {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("Username and Password are required!");
                    }
                    return;
                }

                let error = error.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let request = LoginRequest { username, password };

                    match auth_service::login(&request).await {
                        Ok(success) => {
                            let session = SessionService::new();
                            session.set(&success.token, &success.user_id, &success.role);
                            session.set_display_name(&success.user_name);
                            navigation::redirect(ROUTE_HOME);
                        }
                        Err(ApiError::RequestFailed { status, .. }) => {
                            log::error!("❌ Login rejected with status {}", status);
                            error.set(Some(
                                "Login failed. Please check your credentials.".to_string(),
                            ));
                        }
                        Err(e) => {
                            log::error!("❌ Login error: {}", e);
                            error.set(Some(
                                "An error occurred during login. Please try again.".to_string(),
                            ));
                        }
                    }
                });
            }
        })
    };

    html! {
        <div class="auth-screen">
            <h2>{"Login"}</h2>
            <form class="auth-form" onsubmit={on_submit}>
                <input
                    type="text"
                    name="username"
                    placeholder="Username"
                    ref={username_ref}
                />
                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    ref={password_ref}
                />
                if let Some(message) = (*error).clone() {
                    <div class="auth-error">{message}</div>
                }
                <button type="submit" class="btn-submit">{"Login"}</button>
            </form>
            <p>
                {"Don't have an account? "}
                <a href={ROUTE_REGISTER}>{"Register here"}</a>
            </p>
        </div>
    }
}
