use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::config;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NewsletterSignup {
    pub email: String,
    pub zip: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("subscription request failed: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("subscription service answered {status}")]
    Status { status: u16, message: Option<String> },
}

impl SubscribeError {
    /// Text shown under the form.
    pub fn user_message(&self) -> String {
        match self {
            SubscribeError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => "We couldn't sign you up right now. Please try again.".to_string(),
        }
    }
}

pub async fn submit_signup(signup: &NewsletterSignup) -> Result<(), SubscribeError> {
    let response = Request::post(config::get_newsletter_url())
        .json(signup)?
        .send()
        .await?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let message = response.json::<ErrorResponse>().await.ok().map(|e| e.error);
    Err(SubscribeError::Status { status, message })
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Succeeded,
    Failed(String),
}

impl SubmitStatus {
    /// `None` while a request is already in flight.
    pub fn begin(&self) -> Option<SubmitStatus> {
        match self {
            SubmitStatus::Sending => None,
            _ => Some(SubmitStatus::Sending),
        }
    }

    pub fn finish(result: &Result<(), SubscribeError>) -> SubmitStatus {
        match result {
            Ok(()) => SubmitStatus::Succeeded,
            Err(e) => SubmitStatus::Failed(e.user_message()),
        }
    }

    /// Message text and whether it reports a failure.
    pub fn notice(&self) -> Option<(String, bool)> {
        match self {
            SubmitStatus::Succeeded => {
                Some(("Thanks! You're on the list.".to_string(), false))
            }
            SubmitStatus::Failed(message) => Some((message.clone(), true)),
            SubmitStatus::Idle | SubmitStatus::Sending => None,
        }
    }

    /// Delay before a visible notice goes back to idle.
    pub fn dismiss_after_ms(&self) -> Option<u32> {
        self.notice().map(|_| config::NOTICE_DISMISS_MS)
    }
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let zip = use_state(String::new);
    let status = use_state(|| SubmitStatus::Idle);

    // Notices clear themselves; a newer status cancels the pending timer.
    {
        let current = (*status).clone();
        let status = status.clone();
        use_effect_with_deps(
            move |current: &SubmitStatus| {
                let timeout = current.dismiss_after_ms().map(|millis| {
                    Timeout::new(millis, move || {
                        status.set(SubmitStatus::Idle);
                    })
                });
                move || drop(timeout)
            },
            current,
        );
    }

    let onsubmit = {
        let email = email.clone();
        let zip = zip.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(sending) = status.begin() else {
                return;
            };
            status.set(sending);

            let signup = NewsletterSignup {
                email: (*email).clone(),
                zip: (*zip).clone(),
            };
            let email = email.clone();
            let zip = zip.clone();
            let status = status.clone();
            log::info!("Submitting newsletter signup");
            spawn_local(async move {
                let result = submit_signup(&signup).await;
                match &result {
                    Ok(()) => {
                        log::info!("Newsletter signup accepted");
                        email.set(String::new());
                        zip.set(String::new());
                    }
                    Err(SubscribeError::Status { status: code, .. }) => {
                        log::warn!("Newsletter signup rejected with status {}", code);
                    }
                    Err(e) => log::error!("Newsletter signup failed: {}", e),
                }
                status.set(SubmitStatus::finish(&result));
            });
        })
    };

    let dismiss = {
        let status = status.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            status.set(SubmitStatus::Idle);
        })
    };

    let sending = *status == SubmitStatus::Sending;

    html! {
        <form class="newsletter-form" {onsubmit}>
            <div class="newsletter-fields">
                <input
                    type="email"
                    required={true}
                    placeholder="Email Address *"
                    class="newsletter-input email"
                    value={(*email).clone()}
                    oninput={
                        let email = email.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        })
                    }
                />
                <input
                    type="text"
                    required={true}
                    placeholder="Zip Code *"
                    class="newsletter-input zip"
                    value={(*zip).clone()}
                    oninput={
                        let zip = zip.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            zip.set(input.value());
                        })
                    }
                />
            </div>
            <button type="submit" class="newsletter-button" disabled={sending}>
                { if sending { "SENDING..." } else { "JOIN THE NEWSLETTER" } }
            </button>
            {
                if let Some((message, is_error)) = status.notice() {
                    html! {
                        <div
                            class={classes!("newsletter-notice", is_error.then(|| "error"))}
                            role="status"
                        >
                            <span>{message}</span>
                            <button type="button" class="notice-dismiss" aria-label="Dismiss" onclick={dismiss}>{"✕"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .newsletter-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .newsletter-fields {
                    display: flex;
                    gap: 0.75rem;
                }

                .newsletter-input {
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                    font-size: 1rem;
                }

                .newsletter-input.email {
                    flex: 1;
                }

                .newsletter-input.zip {
                    width: 8rem;
                }

                .newsletter-button {
                    align-self: flex-start;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #fff;
                    font-weight: 500;
                    cursor: pointer;
                }

                .newsletter-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }

                .newsletter-notice {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    background: rgba(34, 197, 94, 0.2);
                    font-size: 0.875rem;
                }

                .newsletter-notice.error {
                    background: rgba(239, 68, 68, 0.25);
                }

                .notice-dismiss {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                }

                @media (max-width: 640px) {
                    .newsletter-fields {
                        flex-direction: column;
                    }

                    .newsletter-input.zip {
                        width: auto;
                    }
                }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_has_email_and_zip() {
        let signup = NewsletterSignup {
            email: "rider@example.com".to_string(),
            zip: "94107".to_string(),
        };
        let value = serde_json::to_value(&signup).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "email": "rider@example.com", "zip": "94107" })
        );
    }

    #[test]
    fn duplicate_submits_are_ignored_while_sending() {
        assert_eq!(SubmitStatus::Idle.begin(), Some(SubmitStatus::Sending));
        assert_eq!(SubmitStatus::Sending.begin(), None);
        assert_eq!(SubmitStatus::Succeeded.begin(), Some(SubmitStatus::Sending));
        assert_eq!(
            SubmitStatus::Failed("nope".to_string()).begin(),
            Some(SubmitStatus::Sending)
        );
    }

    #[test]
    fn outcome_maps_to_a_notice() {
        let ok = SubmitStatus::finish(&Ok(()));
        assert_eq!(ok, SubmitStatus::Succeeded);
        let (_, is_error) = ok.notice().unwrap();
        assert!(!is_error);

        let rejected = SubmitStatus::finish(&Err(SubscribeError::Status {
            status: 422,
            message: Some("That zip code isn't in our service area yet.".to_string()),
        }));
        assert_eq!(
            rejected.notice(),
            Some(("That zip code isn't in our service area yet.".to_string(), true))
        );
    }

    #[test]
    fn blank_server_messages_fall_back_to_generic_text() {
        let error = SubscribeError::Status {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(
            error.user_message(),
            "We couldn't sign you up right now. Please try again."
        );
        let error = SubscribeError::Status {
            status: 503,
            message: None,
        };
        assert!(error.to_string().contains("503"));
    }

    #[test]
    fn idle_and_sending_show_nothing() {
        assert_eq!(SubmitStatus::Idle.notice(), None);
        assert_eq!(SubmitStatus::Sending.notice(), None);
    }

    #[test]
    fn only_visible_notices_schedule_a_dismissal() {
        assert_eq!(SubmitStatus::Idle.dismiss_after_ms(), None);
        assert_eq!(SubmitStatus::Sending.dismiss_after_ms(), None);
        assert_eq!(
            SubmitStatus::Succeeded.dismiss_after_ms(),
            Some(config::NOTICE_DISMISS_MS)
        );
        assert_eq!(
            SubmitStatus::Failed("try again".to_string()).dismiss_after_ms(),
            Some(config::NOTICE_DISMISS_MS)
        );
    }
}
