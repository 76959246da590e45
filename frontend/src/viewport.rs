use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, Window};
use yew::prelude::*;

/// Viewports narrower than this are phones; they get the burger menu and no scroll effects.
pub const NARROW_VIEWPORT_MAX_PX: f64 = 768.0;
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const FALLBACK_WIDTH_PX: f64 = 1280.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportClass {
    pub is_narrow: bool,
    pub prefers_reduced_motion: bool,
}

impl Default for ViewportClass {
    fn default() -> Self {
        ViewportClass::classify(FALLBACK_WIDTH_PX, false)
    }
}

impl ViewportClass {
    pub fn classify(width: f64, prefers_reduced_motion: bool) -> Self {
        ViewportClass {
            is_narrow: width < NARROW_VIEWPORT_MAX_PX,
            prefers_reduced_motion,
        }
    }

    /// Scroll-linked transforms are suppressed when this is set.
    pub fn reduced_motion(&self) -> bool {
        self.is_narrow || self.prefers_reduced_motion
    }
}

fn reduced_motion_query(window: &Window) -> Option<MediaQueryList> {
    window.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

fn measure(window: &Window) -> ViewportClass {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_WIDTH_PX);
    let prefers_reduced_motion = reduced_motion_query(window)
        .map(|query| query.matches())
        .unwrap_or(false);
    ViewportClass::classify(width, prefers_reduced_motion)
}

fn measure_current() -> ViewportClass {
    web_sys::window()
        .map(|window| measure(&window))
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ViewportProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Classifies the viewport on mount, on every resize and whenever the
/// reduced-motion preference flips.
#[function_component(ViewportProvider)]
pub fn viewport_provider(props: &ViewportProviderProps) -> Html {
    let class = use_state_eq(measure_current);

    {
        let class = class.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = web_sys::window().map(|window| {
                    let target = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        class.set(measure(&target));
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        log::warn!("Could not attach resize listener");
                    }

                    let query = reduced_motion_query(&window);
                    if let Some(query) = &query {
                        let _ = query.add_event_listener_with_callback(
                            "change",
                            callback.as_ref().unchecked_ref(),
                        );
                    }

                    (window, query, callback)
                });

                move || {
                    if let Some((window, query, callback)) = listeners {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        );
                        if let Some(query) = query {
                            let _ = query.remove_event_listener_with_callback(
                                "change",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            (),
        );
    }

    use_effect_with_deps(
        |class| {
            log::debug!(
                "Viewport class: narrow={} reduced_motion_pref={}",
                class.is_narrow,
                class.prefers_reduced_motion
            );
            || ()
        },
        *class,
    );

    html! {
        <ContextProvider<ViewportClass> context={*class}>
            { for props.children.iter() }
        </ContextProvider<ViewportClass>>
    }
}

#[hook]
pub fn use_viewport() -> ViewportClass {
    use_context::<ViewportClass>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(ViewportClass::classify(767.0, false).is_narrow);
        assert!(!ViewportClass::classify(768.0, false).is_narrow);
    }

    #[test]
    fn either_signal_reduces_motion() {
        assert!(!ViewportClass::classify(1200.0, false).reduced_motion());
        assert!(ViewportClass::classify(1200.0, true).reduced_motion());
        assert!(ViewportClass::classify(400.0, false).reduced_motion());
        assert!(ViewportClass::classify(400.0, true).reduced_motion());
    }

    #[test]
    fn shrinking_the_window_flips_the_class() {
        let before = ViewportClass::classify(1200.0, false);
        let after = ViewportClass::classify(400.0, false);
        assert!(!before.is_narrow);
        assert!(after.is_narrow);
        assert!(after.reduced_motion());
    }

    #[test]
    fn fallback_is_a_wide_animated_viewport() {
        let class = ViewportClass::default();
        assert!(!class.is_narrow);
        assert!(!class.reduced_motion());
    }
}
