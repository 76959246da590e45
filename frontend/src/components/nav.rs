use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::viewport::{use_viewport, ViewportClass};
use crate::Route;

/// A section counts as current while it spans this line below the top edge.
pub const ACTIVE_PROBE_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Destination {
    /// Element id on the current page.
    Anchor(&'static str),
    Page(Route),
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    ScrollTo(&'static str),
    Navigate(Route),
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Any selection closes the menu.
    pub fn select(self, destination: &Destination) -> (MenuState, NavAction) {
        let action = match destination {
            Destination::Anchor(id) => NavAction::ScrollTo(*id),
            Destination::Page(route) => NavAction::Navigate(route.clone()),
        };
        (MenuState::Closed, action)
    }

    /// The slide-out menu only exists on narrow viewports.
    pub fn reconcile(self, viewport: ViewportClass) -> Self {
        if viewport.is_narrow {
            self
        } else {
            MenuState::Closed
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub destination: Destination,
}

impl NavItem {
    pub const fn anchor(label: &'static str, id: &'static str) -> Self {
        NavItem {
            label,
            destination: Destination::Anchor(id),
        }
    }

    pub const fn page(label: &'static str, route: Route) -> Self {
        NavItem {
            label,
            destination: Destination::Page(route),
        }
    }
}

/// The logo scrolls back to the first section on pages that have anchors.
pub fn logo_destination(items: &[NavItem]) -> Destination {
    items
        .iter()
        .find(|item| matches!(item.destination, Destination::Anchor(_)))
        .map(|item| item.destination.clone())
        .unwrap_or(Destination::Page(Route::Home))
}

/// Picks the section under the probe line from `(id, top, bottom)` viewport rects.
/// Later sections win when several overlap the line.
pub fn active_section<'a, I>(bounds: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64, f64)>,
{
    bounds
        .into_iter()
        .filter(|&(_, top, bottom)| top <= ACTIVE_PROBE_PX && bottom >= ACTIVE_PROBE_PX)
        .map(|(id, _, _)| id)
        .last()
}

/// Reads the live rects of the given element ids.
pub fn measure_sections(ids: &[&'static str]) -> Option<&'static str> {
    let document = web_sys::window()?.document()?;
    let bounds = ids.iter().filter_map(|&id| {
        let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
        Some((id, rect.top(), rect.bottom()))
    });
    active_section(bounds)
}

fn scroll_to_anchor(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    let Some(element) = element else {
        log::warn!("No element with id '{}' to scroll to", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn perform(action: NavAction, navigator: Option<&Navigator>) {
    match action {
        NavAction::ScrollTo(id) => scroll_to_anchor(id),
        NavAction::Navigate(route) => match navigator {
            Some(navigator) => navigator.push(&route),
            None => log::warn!("Navigation requested outside of a router"),
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub items: Vec<NavItem>,
    /// Id of the section currently under the probe line, if the page tracks one.
    #[prop_or_default]
    pub active: Option<&'static str>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_state_eq(MenuState::default);
    let navigator = use_navigator();
    let current_route = use_route::<Route>();
    let viewport = use_viewport();

    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |viewport| {
                menu.set((*menu).reconcile(*viewport));
                || ()
            },
            viewport,
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set((*menu).toggled());
        })
    };

    let select = {
        let menu = menu.clone();
        Callback::from(move |destination: Destination| {
            let (next, action) = (*menu).select(&destination);
            menu.set(next);
            perform(action, navigator.as_ref());
        })
    };

    let is_active = |destination: &Destination| match destination {
        Destination::Anchor(id) => props.active == Some(*id),
        Destination::Page(route) => current_route.as_ref() == Some(route),
    };

    let link = |item: &NavItem, class: &'static str| {
        let select = select.clone();
        let destination = item.destination.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            select.emit(destination.clone());
        });
        html! {
            <button
                class={classes!(class, is_active(&item.destination).then(|| "active"))}
                {onclick}
            >
                {item.label}
            </button>
        }
    };

    let go_home = {
        let select = select.clone();
        let destination = logo_destination(&props.items);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            select.emit(destination.clone());
        })
    };

    html! {
        <nav class="site-nav">
            <div class="nav-content">
                <a href="/" class="nav-logo" onclick={go_home}>{"ZOOX"}</a>

                <div class="nav-links">
                    { for props.items.iter().map(|item| link(item, "nav-link")) }
                </div>

                <button
                    class="burger-menu"
                    aria-label="Menu"
                    aria-expanded={menu.is_open().to_string()}
                    onclick={toggle_menu}
                >
                    { if menu.is_open() { "✕" } else { "☰" } }
                </button>
            </div>

            if menu.is_open() {
                <div class="mobile-menu">
                    { for props.items.iter().map(|item| link(item, "mobile-link")) }
                </div>
            }

            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    color: #000;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link, .mobile-link {
                    background: none;
                    border: none;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    color: #000;
                    transition: color 0.2s ease;
                }

                .nav-link:hover, .mobile-link:hover {
                    color: #4b5563;
                }

                .nav-link.active, .mobile-link.active {
                    font-weight: 800;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: 2px solid #000;
                    border-radius: 0.5rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    font-size: 1.25rem;
                    cursor: pointer;
                }

                .mobile-menu {
                    display: none;
                    border-top: 1px solid #e5e7eb;
                    padding: 1rem 1.5rem;
                }

                .mobile-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    font-size: 1.5rem;
                    padding: 1rem 0;
                    border-bottom: 1px solid #e5e7eb;
                }

                @media (max-width: 767px) {
                    .nav-links {
                        display: none;
                    }

                    .burger-menu, .mobile-menu {
                        display: block;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow() -> ViewportClass {
        ViewportClass::classify(400.0, false)
    }

    fn wide() -> ViewportClass {
        ViewportClass::classify(1200.0, false)
    }

    #[test]
    fn toggle_flips_between_states() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
        assert_eq!(MenuState::Closed.toggled().toggled(), MenuState::Closed);
    }

    #[test]
    fn selecting_always_closes_the_menu() {
        let destinations = [
            Destination::Anchor("vehicle"),
            Destination::Anchor("no-such-section"),
            Destination::Page(Route::Home),
            Destination::Page(Route::Support),
        ];
        for state in [MenuState::Closed, MenuState::Open] {
            for destination in &destinations {
                let (next, _) = state.select(destination);
                assert_eq!(next, MenuState::Closed);
            }
        }
    }

    #[test]
    fn anchors_scroll_and_pages_navigate() {
        let (_, action) = MenuState::Open.select(&Destination::Anchor("technology"));
        assert_eq!(action, NavAction::ScrollTo("technology"));

        let (_, action) = MenuState::Open.select(&Destination::Page(Route::Support));
        assert_eq!(action, NavAction::Navigate(Route::Support));
    }

    #[test]
    fn widening_the_viewport_closes_the_menu() {
        assert_eq!(MenuState::Open.reconcile(narrow()), MenuState::Open);
        assert_eq!(MenuState::Open.reconcile(wide()), MenuState::Closed);
        assert_eq!(MenuState::Closed.reconcile(narrow()), MenuState::Closed);
    }

    #[test]
    fn logo_scrolls_to_the_first_anchor_when_there_is_one() {
        let anchors = [
            NavItem::anchor("Home", "hero"),
            NavItem::anchor("Vehicle", "vehicle"),
        ];
        assert_eq!(logo_destination(&anchors), Destination::Anchor("hero"));

        let pages = [
            NavItem::page("How to Ride", Route::Home),
            NavItem::page("Support", Route::Support),
        ];
        assert_eq!(logo_destination(&pages), Destination::Page(Route::Home));
        assert_eq!(logo_destination(&[]), Destination::Page(Route::Home));
    }

    #[test]
    fn active_section_uses_the_probe_line() {
        let bounds = [
            ("hero", -900.0, -100.0),
            ("vehicle", -100.0, 700.0),
            ("technology", 700.0, 1500.0),
        ];
        assert_eq!(active_section(bounds), Some("vehicle"));
    }

    #[test]
    fn active_section_prefers_the_later_overlap() {
        let bounds = [("hero", 0.0, 100.0), ("vehicle", 100.0, 900.0)];
        assert_eq!(active_section(bounds), Some("vehicle"));
    }

    #[test]
    fn no_section_under_the_probe() {
        let bounds = [("hero", 200.0, 900.0)];
        assert_eq!(active_section(bounds), None);
    }
}
