use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::RegisterRequest;
use crate::services::auth_service;
use crate::utils::constants::ROUTE_LOGIN;
use crate::utils::navigation;

#[function_component(Register)]
pub fn register() -> Html {
    let name_ref = use_node_ref();
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);

    let on_submit = {
        let name_ref = name_ref.clone();
        let username_ref = username_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let fields = (
                name_ref.cast::<HtmlInputElement>(),
                username_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            );

            if let (Some(name), Some(username), Some(email), Some(password)) = fields {
                let request = RegisterRequest {
                    username: username.value(),
                    password: password.value(),
                    name: name.value(),
                    email: email.value(),
                };

                if request.username.is_empty()
                    || request.password.is_empty()
                    || request.name.is_empty()
                    || request.email.is_empty()
                {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("All fields are required!");
                    }
                    return;
                }

                let error = error.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match auth_service::register(&request).await {
                        Ok(()) => navigation::redirect(ROUTE_LOGIN),
                        Err(e) => {
                            log::error!("❌ Registration error: {}", e);
                            error.set(Some(
                                "Registration failed. Please try again.".to_string(),
                            ));
                        }
                    }
                });
            }
        })
    };

    html! {
        <div class="auth-screen">
            <h2>{"Register"}</h2>
            <form class="auth-form" onsubmit={on_submit}>
                <input type="text" name="name" placeholder="Name" ref={name_ref} />
                <input type="text" name="username" placeholder="Username" ref={username_ref} />
                <input type="email" name="email" placeholder="Email" ref={email_ref} />
                <input type="password" name="password" placeholder="Password" ref={password_ref} />
                if let Some(message) = (*error).clone() {
                    <div class="auth-error">{message}</div>
                }
                <button type="submit" class="btn-submit">{"Register"}</button>
            </form>
            <p>
                {"Already have an account? "}
                <a href={ROUTE_LOGIN}>{"Login here"}</a>
            </p>
        </div>
    }
}
