use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"This road doesn't go anywhere."}</h1>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to the homepage"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    padding: 0 1.5rem;
                    text-align: center;
                }

                .not-found h1 {
                    font-size: 2.5rem;
                    font-weight: 700;
                }

                .not-found-link {
                    padding: 0.75rem 2rem;
                    background: #1f2937;
                    color: #fff;
                    border-radius: 9999px;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
