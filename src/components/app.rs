use yew::prelude::*;

use crate::components::{Home, Login, ManageProducts, PriceOptimization, Register, RequireAuth};
use crate::utils::constants::{
    ROUTE_HOME, ROUTE_LOGIN, ROUTE_MANAGE_PRODUCTS, ROUTE_PRICE_OPTIMIZATION, ROUTE_REGISTER,
};
use crate::utils::navigation;

/// User-facing routes. Navigation between pages is a hard browser
/// navigation, so each route is resolved once per page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
    ManageProducts,
    PriceOptimization,
    /// `/` and anything unknown; redirects to the login entry point.
    Fallback,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            ROUTE_LOGIN => Route::Login,
            ROUTE_REGISTER => Route::Register,
            ROUTE_HOME => Route::Home,
            ROUTE_MANAGE_PRODUCTS => Route::ManageProducts,
            ROUTE_PRICE_OPTIMIZATION => Route::PriceOptimization,
            _ => Route::Fallback,
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let route = Route::from_path(&navigation::current_path());
    log::info!("📋 Rendering route {:?}", route);

    match route {
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Home => html! {
            <RequireAuth>
                <Home />
            </RequireAuth>
        },
        Route::ManageProducts => html! {
            <RequireAuth>
                <ManageProducts />
            </RequireAuth>
        },
        Route::PriceOptimization => html! {
            <RequireAuth>
                <PriceOptimization />
            </RequireAuth>
        },
        Route::Fallback => {
            navigation::redirect_to_login();
            html! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_to_their_routes() {
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/register"), Route::Register);
        assert_eq!(Route::from_path("/home"), Route::Home);
        assert_eq!(Route::from_path("/create-manage-product"), Route::ManageProducts);
        assert_eq!(Route::from_path("/page-optimization"), Route::PriceOptimization);
    }

    #[test]
    fn root_falls_back_to_login_redirect() {
        assert_eq!(Route::from_path("/"), Route::Fallback);
    }

    #[test]
    fn unknown_paths_fall_back_too() {
        assert_eq!(Route::from_path("/admin"), Route::Fallback);
        assert_eq!(Route::from_path(""), Route::Fallback);
    }
}
