use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Single-open accordion: opening one entry closes the previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    #[cfg(test)]
    pub fn open_index(self) -> Option<usize> {
        self.open
    }

    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Accordion { open: None }
        } else {
            Accordion { open: Some(index) }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let accordion = use_state_eq(Accordion::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let is_open = accordion.is_open(index);
                let toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        accordion.set((*accordion).toggle(index));
                    })
                };
                html! {
                    <div class={classes!("faq-item", is_open.then(|| "open"))}>
                        <button class="faq-question" aria-expanded={is_open.to_string()} onclick={toggle}>
                            <span class="question-text">{entry.question}</span>
                            <span class="toggle-icon">{"⌄"}</span>
                        </button>
                        if is_open {
                            <div class="faq-answer">{entry.answer}</div>
                        }
                    </div>
                }
            }) }
            <style>
                {r#"
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    background: #1f2937;
                    color: #fff;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.125rem;
                    font-weight: 500;
                    text-align: left;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .faq-question:hover {
                    background: #374151;
                }

                .toggle-icon {
                    font-size: 1.75rem;
                    transition: transform 0.2s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    padding: 0 2rem 1.5rem;
                    color: #d1d5db;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let accordion = Accordion::default();
        assert_eq!(accordion.open_index(), None);
        assert!(!accordion.is_open(0));
    }

    #[test]
    fn double_toggle_restores_the_previous_state() {
        let closed = Accordion::default();
        for index in 0..4 {
            assert_eq!(closed.toggle(index).toggle(index), closed);
        }
        let open = closed.toggle(3);
        assert_eq!(open.toggle(3).toggle(3), open);
    }

    #[test]
    fn double_toggle_of_another_entry_leaves_everything_closed() {
        let open = Accordion::default().toggle(2);
        assert_eq!(open.toggle(0).toggle(0).open_index(), None);
    }

    #[test]
    fn opening_another_entry_closes_the_current_one() {
        let accordion = Accordion::default().toggle(2).toggle(0);
        assert!(accordion.is_open(0));
        assert!(!accordion.is_open(2));
        assert_eq!((0..4).filter(|&i| accordion.is_open(i)).count(), 1);
    }

    #[test]
    fn at_most_one_entry_is_ever_open() {
        let mut accordion = Accordion::default();
        for index in [0, 1, 1, 3, 2, 2, 2, 0, 3] {
            accordion = accordion.toggle(index);
            assert!((0..4).filter(|&i| accordion.is_open(i)).count() <= 1);
        }
    }
}
