use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <style>{r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    color: #111827;
                }
                .not-found-page a {
                    border-radius: 0.75rem;
                    background: #111827;
                    color: #ffffff;
                    padding: 0.5rem 1rem;
                    text-decoration: none;
                }
            "#}</style>
            <h1>{"Nothing here"}</h1>
            <Link<Route> to={Route::Home}>{"Back to the homepage"}</Link<Route>>
        </div>
    }
}
