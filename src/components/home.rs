use yew::prelude::*;

use crate::components::HeaderComponent;
use crate::utils::constants::{ROUTE_MANAGE_PRODUCTS, ROUTE_PRICE_OPTIMIZATION};

/// Landing page with the two tool entry points.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <HeaderComponent />
            <div class="home-container">
                <div class="home-title">{"Price Optimization Tool"}</div>
                <div class="home-cards">
                    <a href={ROUTE_MANAGE_PRODUCTS}>
                        <div class="home-card">
                            <div>
                                <h2>{"Create and Manage Product"}</h2>
                                <p>{"Create, edit and organize your product catalog, and run demand forecasts on selected products."}</p>
                            </div>
                            <span>{"→"}</span>
                        </div>
                    </a>
                    <a href={ROUTE_PRICE_OPTIMIZATION}>
                        <div class="home-card">
                            <div>
                                <h2>{"Pricing Optimization"}</h2>
                                <p>{"Review the optimized selling price computed for every product next to its current pricing."}</p>
                            </div>
                            <span>{"→"}</span>
                        </div>
                    </a>
                </div>
            </div>
        </>
    }
}
