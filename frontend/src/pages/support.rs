use yew::prelude::*;

use crate::components::faq::{FaqAccordion, FaqEntry};
use crate::components::footer::Footer;
use crate::components::nav::{Nav, NavItem};
use crate::Route;

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I join the waitlist?",
        answer: "Download the Zoox app, create an account, and complete the survey we send you.",
    },
    FaqEntry {
        question: "How will I know when I can ride?",
        answer: "We’ll notify you via email and in the app when your account is activated.",
    },
    FaqEntry {
        question: "What are the ride rules?",
        answer: "No eating/drinking/smoking. Seatbelts required. Max 4 passengers.",
    },
    FaqEntry {
        question: "When will Zoox come to my city?",
        answer: "We’re currently in Las Vegas, San Francisco, and expanding soon. Join the newsletter for updates.",
    },
];

struct SupportOption {
    title: &'static str,
    desc: &'static str,
    action: &'static str,
}

const SUPPORT_OPTIONS: [SupportOption; 3] = [
    SupportOption {
        title: "Share your feedback",
        desc: "We’d love to hear about your experience.",
        action: "SHARE YOUR THOUGHTS",
    },
    SupportOption {
        title: "Lose an item?",
        desc: "Left something behind? We’re on it.",
        action: "REPORT LOST ITEM",
    },
    SupportOption {
        title: "Submit a complaint",
        desc: "Something went wrong? Let us help.",
        action: "REPORT AN ISSUE",
    },
];

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::page("How to Ride", Route::Home),
        NavItem::page("Where to Ride", Route::Home),
        NavItem::page("Know Your Ride", Route::Home),
        NavItem::page("Support", Route::Support),
    ]
}

#[function_component(Support)]
pub fn support() -> Html {
    html! {
        <div class="support-page">
            <Nav items={nav_items()} />

            <section class="support-hero">
                <p class="eyebrow">{"GET IN TOUCH"}</p>
                <h1>{"We’re here to help."}</h1>
                <p class="support-lead">{"Choose the issue you’d like us to address below."}</p>
            </section>

            <section class="support-options">
                { for SUPPORT_OPTIONS.iter().map(|option| html! {
                    <div class="support-option">
                        <h3>{option.title}</h3>
                        <p>{option.desc}</p>
                        <button class="pill-button">{option.action}</button>
                    </div>
                }) }
            </section>

            <section class="support-faq">
                <div class="support-faq-inner">
                    <p class="eyebrow">{"FIND OUT MORE"}</p>
                    <h2>{"Frequently Asked Questions"}</h2>
                    <FaqAccordion entries={FAQ_ENTRIES} />
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                .support-page {
                    background: #fff;
                    color: #000;
                    min-height: 100vh;
                }

                .eyebrow {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #4b5563;
                    margin-bottom: 1rem;
                    text-align: center;
                }

                .support-hero {
                    padding: 8rem 1.5rem 5rem;
                    text-align: center;
                }

                .support-hero h1 {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .support-lead {
                    font-size: 1.25rem;
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .support-options {
                    max-width: 80rem;
                    margin: 0 auto 5rem;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 4rem;
                }

                .support-option {
                    text-align: center;
                }

                .support-option h3 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .support-option p {
                    color: #4b5563;
                    margin-bottom: 2rem;
                }

                .pill-button {
                    padding: 0.75rem 2rem;
                    background: #1f2937;
                    color: #fff;
                    border: none;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    cursor: pointer;
                }

                .pill-button:hover {
                    background: #374151;
                }

                .support-faq {
                    background: #f3f4f6;
                    padding: 5rem 0;
                }

                .support-faq-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .support-faq h2 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 4rem;
                }

                @media (max-width: 767px) {
                    .support-options {
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::nav::Destination;

    #[test]
    fn faq_has_the_four_published_questions() {
        assert_eq!(FAQ_ENTRIES.len(), 4);
        assert!(FAQ_ENTRIES.iter().all(|entry| !entry.answer.is_empty()));
    }

    #[test]
    fn only_the_support_item_points_at_this_page() {
        let items = nav_items();
        let here: Vec<_> = items
            .iter()
            .filter(|item| item.destination == Destination::Page(Route::Support))
            .map(|item| item.label)
            .collect();
        assert_eq!(here, vec!["Support"]);
    }
}
