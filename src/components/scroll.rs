use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Vertical scroll offset of the window, updated on every `scroll` event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(current_scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let callback = Closure::wrap(Box::new(move || {
                        scroll_y.set(current_scroll_y());
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *scroll_y
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Sets the tab title and jumps to the top whenever `page` changes.
#[hook]
pub fn use_page_title(page: String) {
    use_effect_with_deps(
        |page: &String| {
            crate::config::set_document_title(page);
            scroll_to_top();
            || ()
        },
        page,
    );
}
