use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

/// Vertical scroll distance of the page in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScrollOffset(pub u32);

impl ScrollOffset {
    /// Overscroll (negative values) and garbage readings count as the top of the page.
    pub fn from_px(raw: f64) -> Self {
        if !raw.is_finite() || raw <= 0.0 {
            return ScrollOffset(0);
        }
        ScrollOffset(raw.round().min(f64::from(u32::MAX)) as u32)
    }

    pub fn px(self) -> f64 {
        f64::from(self.0)
    }
}

fn read_offset(window: &Window) -> ScrollOffset {
    window
        .scroll_y()
        .map(ScrollOffset::from_px)
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the page's scroll offset. The scroll listener is the only writer, every
/// descendant reads it through [`use_scroll_offset`].
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let offset = use_state_eq(ScrollOffset::default);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let target = window.clone();
                    let setter = offset.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        setter.set(read_offset(&target));
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        log::warn!("Could not attach scroll listener");
                    }

                    // Pick up a position restored by the browser before the first event.
                    offset.set(read_offset(&window));
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

    html! {
        <ContextProvider<ScrollOffset> context={*offset}>
            { for props.children.iter() }
        </ContextProvider<ScrollOffset>>
    }
}

/// Outside a [`ScrollProvider`] the page is treated as unscrolled.
#[hook]
pub fn use_scroll_offset() -> ScrollOffset {
    use_context::<ScrollOffset>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_whole_pixels() {
        assert_eq!(ScrollOffset::from_px(0.0), ScrollOffset(0));
        assert_eq!(ScrollOffset::from_px(412.4), ScrollOffset(412));
        assert_eq!(ScrollOffset::from_px(412.6), ScrollOffset(413));
    }

    #[test]
    fn overscroll_and_nan_read_as_top() {
        assert_eq!(ScrollOffset::from_px(-35.0), ScrollOffset(0));
        assert_eq!(ScrollOffset::from_px(f64::NAN), ScrollOffset(0));
        assert_eq!(ScrollOffset::from_px(f64::INFINITY), ScrollOffset(0));
    }

    #[test]
    fn px_is_lossless() {
        assert_eq!(ScrollOffset(5000).px(), 5000.0);
    }
}
