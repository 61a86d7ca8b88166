use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{Icon, NAV_LINKS, OWNER};
use crate::hooks::scroll::use_scroll_offset;

/// Offset past which the bar picks up its solid background.
const SCROLLED_AFTER_PX: f64 = 24.0;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scroll_offset().get() > SCROLLED_AFTER_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor links keep their default jump, only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">{ OWNER }</div>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} class="nav-link" onclick={close_menu.clone()}>
                            { link.label }
                        </a>
                    }) }
                </div>
                <a href="#contact" class="nav-cta" onclick={close_menu}>
                    { "Let’s talk " }{ Icon::ArrowRight.glyph() }
                </a>
            </div>
        </nav>
    }
}
