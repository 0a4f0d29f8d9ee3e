use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategorySelectProps {
    pub selected: String,
    /// Full option list; the page prepends "All" before the fetched names.
    pub categories: Vec<String>,
    pub on_change: Callback<String>,
}

#[function_component(CategorySelect)]
pub fn category_select(props: &CategorySelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <select class="category-select" value={props.selected.clone()} {onchange}>
            { for props.categories.iter().map(|category| {
                html! {
                    <option value={category.clone()} selected={*category == props.selected}>
                        {category}
                    </option>
                }
            }) }
        </select>
    }
}
