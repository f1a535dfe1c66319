use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    pub children: Children,
    /// Extra transition delay in milliseconds, for staggering sibling blocks.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps a block in a one-shot reveal: invisible and shifted down until 10%
/// of it scrolls into view (50px look-ahead), then faded in permanently.
/// The observer lets go of the element after the first hit, so scrolling
/// away and back never re-triggers the animation.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let element = node_ref
                    .cast::<web_sys::Element>()
                    .expect("fade-in wrapper not mounted");

                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                            if entry.is_intersecting() {
                                visible.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let mut options = IntersectionObserverInit::new();
                options.threshold(&JsValue::from(0.1));
                options.root_margin("50px");

                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .unwrap();
                observer.observe(&element);

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node_ref}
            class={classes!("fade-in", (*visible).then(|| "visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
