use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::newsletter::NewsletterForm;
use crate::Route;

const WHERE_TO_RIDE: [&str; 4] = [
    "Las Vegas",
    "San Francisco",
    "Austin (Coming Soon)",
    "Miami (Coming Soon)",
];

const LEGAL_LINKS: [&str; 4] = [
    "Privacy Policy",
    "Supply Chain Standards",
    "Terms of Use",
    "Manage Cookies",
];

const SOCIALS: [(&str, &str); 4] = [
    ("YouTube", "YT"),
    ("LinkedIn", "in"),
    ("Instagram", "IG"),
    ("X", "X"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-background">
                <img src="/images/car image.png" alt="" />
                <div class="footer-shade"></div>
            </div>

            <div class="footer-content">
                <div class="footer-columns">
                    <div>
                        <h4>{"Site Map"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Home}>{"How To Ride"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Home}>{"Where to Ride"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Home}>{"Know Your Ride"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Support}>{"Support"}</Link<Route>></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Where to Ride"}</h4>
                        <ul>
                            { for WHERE_TO_RIDE.iter().map(|city| html! {
                                <li><a href="#">{*city}</a></li>
                            }) }
                        </ul>
                    </div>
                    <div class="footer-newsletter">
                        <h4>{"Get Up To Speed"}</h4>
                        <p>{"Sign up for our newsletter to see where we're headed next."}</p>
                        <NewsletterForm />
                        <p class="footer-fineprint">
                            {"By submitting, you give Zoox permission to store and process your personal information so we can provide you with the content you've requested. For more information, please see our "}
                            <a href="#">{"privacy policy"}</a>
                            {"."}
                        </p>
                    </div>
                </div>

                <div class="footer-bottom">
                    <div class="footer-legal">
                        { for LEGAL_LINKS.iter().map(|label| html! {
                            <a href="#">{*label}</a>
                        }) }
                    </div>
                    <div class="footer-socials">
                        <span>{"SOCIALS"}</span>
                        { for SOCIALS.iter().map(|(name, glyph)| html! {
                            <a href="#" class="social-link" aria-label={*name}>{*glyph}</a>
                        }) }
                    </div>
                </div>

                <div class="footer-signature">
                    <div class="footer-copyright">
                        <p>{format!("Copyright Zoox, Inc. {}", year)}</p>
                        <p>{"All Rights Reserved."}</p>
                    </div>
                    <div class="footer-wordmark">{"ZOOX"}</div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    background: #000;
                    color: #fff;
                    overflow: hidden;
                }

                .footer-background {
                    position: absolute;
                    inset: 0;
                    background: #111;
                }

                .footer-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .footer-shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                }

                .footer-content {
                    position: relative;
                    z-index: 1;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }

                .footer-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr 2fr;
                    gap: 3rem;
                    margin-bottom: 4rem;
                }

                .footer-columns h4 {
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1rem;
                }

                .footer-columns ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .site-footer a {
                    color: #d1d5db;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .site-footer a:hover {
                    color: #fff;
                }

                .footer-fineprint {
                    font-size: 0.75rem;
                    color: #9ca3af;
                    margin-top: 0.75rem;
                }

                .footer-fineprint a {
                    text-decoration: underline;
                }

                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    padding-top: 2rem;
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                }

                .footer-legal {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }

                .footer-socials {
                    display: flex;
                    gap: 1.25rem;
                    align-items: center;
                }

                .social-link {
                    font-weight: 700;
                }

                .footer-signature {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .footer-wordmark {
                    font-size: 3rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    color: #fff;
                }

                @media (max-width: 767px) {
                    .footer-columns {
                        grid-template-columns: 1fr 1fr;
                    }

                    .footer-newsletter {
                        grid-column: span 2;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
