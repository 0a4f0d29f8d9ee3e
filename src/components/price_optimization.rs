use yew::prelude::*;

use crate::components::{CategorySelect, HeaderComponent, SearchInput};
use crate::hooks::use_catalog;
use crate::utils::constants::ROUTE_HOME;

/// Read-only pricing view: every product with its current prices and the
/// optimized price the backend computed for it.
#[function_component(PriceOptimization)]
pub fn price_optimization() -> Html {
    let catalog = use_catalog();

    let on_search = catalog.set_search.clone();
    let on_category = catalog.set_category.clone();

    let category_options: Vec<String> = std::iter::once("All".to_string())
        .chain(catalog.categories.iter().cloned())
        .collect();

    let rows = catalog.visible.iter().map(|product| {
        html! {
            <tr key={product.id.to_string()}>
                <td>{&product.name}</td>
                <td>{&product.category.name}</td>
                <td class="cell-ellipsis">{&product.description}</td>
                <td>{format!("${}", product.cost_price)}</td>
                <td>{format!("${}", product.selling_price)}</td>
                <td>
                    <div class="optimized-price">
                        <span class="old-price">{format!("${}", product.cost_price)}</span>
                        <span class="new-price">{format!("${}", product.optimized_price)}</span>
                    </div>
                </td>
            </tr>
        }
    });

    html! {
        <>
            <HeaderComponent />
            <div>
                <div class="toolbar">
                    <div class="toolbar-left">
                        <a href={ROUTE_HOME}>{"‹ Back"}</a>
                        <div class="divider"></div>
                        {"Price Optimization"}
                    </div>
                    <div class="toolbar-right">
                        <SearchInput value={(*catalog.search_term).clone()} on_change={on_search} />
                        <CategorySelect
                            selected={(*catalog.selected_category).clone()}
                            categories={category_options}
                            on_change={on_category}
                        />
                    </div>
                </div>

                <div class="table-wrapper">
                    <table class="product-table">
                        <thead>
                            <tr>
                                <th>{"Product Name"}</th>
                                <th>{"Product Category"}</th>
                                <th>{"Description"}</th>
                                <th>{"Cost Price"}</th>
                                <th>{"Selling Price"}</th>
                                <th>{"Optimized Price"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            if catalog.visible.is_empty() {
                                <tr><td><span class="no-data">{"No Data available"}</span></td></tr>
                            } else {
                                { for rows }
                            }
                        </tbody>
                    </table>
                </div>
            </div>
        </>
    }
}
