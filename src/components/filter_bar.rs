use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryChipsProps {
    pub categories: Vec<&'static str>,
    pub selected: AttrValue,
    pub on_select: Callback<&'static str>,
}

/// One chip per category; the selected chip is highlighted.
#[function_component(CategoryChips)]
pub fn category_chips(props: &CategoryChipsProps) -> Html {
    html! {
        <div class="category-chips">
            { for props.categories.iter().copied().map(|category| {
                let active = props.selected.as_str() == category;
                let onclick = props.on_select.reform(move |_: MouseEvent| category);
                html! {
                    <button
                        class={classes!("chip", active.then_some("active"))}
                        {onclick}
                    >
                        {category}
                    </button>
                }
            }) }
            <style>
                {r#"
                .category-chips {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .chip {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    border: none;
                    cursor: pointer;
                    font-size: 0.9rem;
                    background: var(--chip-idle-bg);
                    color: var(--chip-idle-text);
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .chip:hover {
                    color: var(--text);
                }
                .chip.active {
                    background: var(--chip-active-bg);
                    color: var(--chip-active-text);
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub on_input: Callback<String>,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let oninput = props.on_input.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <div class="search-box">
            <span class="search-icon">{"⌕"}</span>
            <input
                type="text"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
            <style>
                {r#"
                .search-box {
                    position: relative;
                    max-width: 36rem;
                    margin: 0 auto 2rem;
                }
                .search-icon {
                    position: absolute;
                    left: 1rem;
                    top: 50%;
                    transform: translateY(-50%);
                    color: var(--text-muted);
                }
                .search-box input {
                    width: 100%;
                    padding: 0.9rem 1rem 0.9rem 2.75rem;
                    border-radius: 8px;
                    border: 1px solid var(--border);
                    background: var(--input-bg);
                    color: var(--text);
                    font-size: 1rem;
                }
                .search-box input:focus {
                    outline: none;
                    border-color: var(--accent);
                }
                "#}
            </style>
        </div>
    }
}
