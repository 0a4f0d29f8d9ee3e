use yew::prelude::*;

use crate::services::SessionService;
use crate::utils::navigation;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Html,
}

/// Gate for protected pages, checked when the page mounts. A session that
/// dies later is evicted by the request gateway's 401 path, not by this
/// wrapper re-checking.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    if SessionService::new().read().is_authenticated() {
        props.children.clone()
    } else {
        log::warn!("⚠️ Unauthenticated visit, redirecting to login");
        navigation::redirect_to_login();
        html! {}
    }
}
