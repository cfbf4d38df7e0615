use gloo::events::EventListener;
use web_sys::Element;
use yew::prelude::*;

/// Client width of the element behind `node_ref`, re-measured on window resize.
/// Reads 0 until the element has been laid out.
#[hook]
pub fn use_element_width(node_ref: &NodeRef) -> f64 {
    let width = use_state(|| 0.0f64);

    {
        let width = width.clone();
        let node_ref = node_ref.clone();

        use_effect_with((), move |_| {
            let measure = move || {
                if let Some(element) = node_ref.cast::<Element>() {
                    width.set(element.client_width() as f64);
                }
            };
            measure();

            let listener = EventListener::new(&gloo::utils::window(), "resize", move |_| measure());
            move || drop(listener)
        });
    }

    *width
}
