use chrono::Datelike;
use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::config::use_motion_config;
use crate::content::{
    Icon, CAPABILITIES, CASE_STUDIES, EXPERTISE, OWNER, ROLE, SOCIAL_LINKS, SPLINE_SCENE,
};
use crate::hooks::reveal::use_reveal;
use crate::hooks::scroll::use_scroll_offset;
use crate::motion::ParallaxFrame;

#[function_component(Home)]
pub fn home() -> Html {
    // Start at the top on mount, like a fresh page load.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                if window.location().hash().map(|h| h.is_empty()).unwrap_or(true) {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <style>{ HOME_CSS }</style>
            <Hero />
            <About />
            <Expertise />
            <Work />
            <Contact />
            <Footer />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let motion = use_motion_config();
    let offset = use_scroll_offset();
    let frame = motion
        .parallax
        .as_ref()
        .map(|parallax| parallax.frame(offset))
        .unwrap_or(ParallaxFrame::NEUTRAL);

    let (intro_ref, intro) = use_reveal(motion.reveal.hero_intro, 1);
    let (chips_ref, chips) = use_reveal(motion.reveal.hero_chips, CAPABILITIES.len());

    html! {
        <section class="hero" id="home">
            <div class="hero-scene">
                <spline-viewer url={SPLINE_SCENE}></spline-viewer>
            </div>
            <div class="hero-overlay">
                <div class="hero-overlay-wash"></div>
                <div class="hero-overlay-fade"></div>
            </div>

            <div class="hero-content" style={frame.style()}>
                <div class="hero-text">
                    <div ref={intro_ref} style={intro.item_style(0)}>
                        <span class="pill">{ Icon::Rocket.glyph() }{ " " }{ ROLE }</span>
                        <h1>{"I architect growth across product, marketing, and partnerships"}</h1>
                        <p class="hero-lead">
                            {format!("I’m {} — I help companies compound growth through product marketing, product management, sales, community development, and strategic partnerships.", OWNER)}
                        </p>
                        <div class="hero-actions">
                            <a href="#work" class="button button-dark">
                                {"Explore case studies "}{ Icon::ArrowRight.glyph() }
                            </a>
                            <a href="#contact" class="button button-light">{"Get in touch"}</a>
                        </div>
                    </div>

                    <div class="chips" ref={chips_ref}>
                        { for CAPABILITIES.iter().enumerate().map(|(i, chip)| html! {
                            <div key={chip.label} class="chip" style={chips.item_style(i)}>
                                { chip.icon.glyph() }{ " " }{ chip.label }
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section class="section" id="about">
            <div class="container narrow">
                <SectionHeader eyebrow="About" title="Operator with cross-functional range" />
                <div class="card card-large">
                    <p>{"Over the last several years I’ve operated across product marketing, product management, sales, community development, and partnerships. I thrive in ambiguous environments, turning signal into systems — and systems into repeatable growth."}</p>
                    <p>{"I collaborate tightly with product and go-to-market teams, connecting strategy to execution with clear metrics and fast feedback loops."}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Expertise)]
fn expertise() -> Html {
    let motion = use_motion_config();
    let (grid_ref, cards) = use_reveal(motion.reveal.expertise, EXPERTISE.len());

    html! {
        <section class="section expertise" id="expertise">
            <div class="expertise-glow"></div>
            <div class="container">
                <SectionHeader
                    eyebrow="What I Do"
                    title="Full-stack growth across the funnel"
                    subtitle="I operate at the intersection of product, marketing, sales, and community."
                />
                <div class="grid" ref={grid_ref}>
                    { for EXPERTISE.iter().enumerate().map(|(i, card)| html! {
                        <div key={card.title} class="card card-hover" style={cards.item_style(i)}>
                            <div class="card-icon">{ card.icon.glyph() }</div>
                            <h3>{ card.title }</h3>
                            <p>{ card.desc }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Work)]
fn work() -> Html {
    let motion = use_motion_config();
    let (grid_ref, cases) = use_reveal(motion.reveal.work, CASE_STUDIES.len());

    html! {
        <section class="section" id="work">
            <div class="container">
                <SectionHeader
                    eyebrow="Selected Work"
                    title="Case studies & outcomes"
                    subtitle="A snapshot of programs and systems I’ve led."
                />
                <div class="grid" ref={grid_ref}>
                    { for CASE_STUDIES.iter().enumerate().map(|(i, case)| html! {
                        <div key={case.title} class="card" style={cases.item_style(i)}>
                            <div class="metric">{ case.metric }</div>
                            <h3>{ case.title }</h3>
                            <ul>
                                { for case.bullets.iter().map(|bullet| html! {
                                    <li key={*bullet}>{ *bullet }</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section class="section contact" id="contact">
            <div class="container narrow">
                <SectionHeader
                    eyebrow="Let’s talk"
                    title="Ready to compound growth?"
                    subtitle="Tell me about your product, funnel, and goals — I’ll share where I can help most."
                />
                <div class="contact-links">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} target="_blank" rel="noreferrer" class="contact-link">
                            { link.icon.glyph() }{ " " }{ link.label }
                        </a>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                { format!("© {} {} — {}", year, OWNER, ROLE) }
            </div>
        </footer>
    }
}

const HOME_CSS: &str = r#"
    .home-page {
        min-height: 100vh;
        background: #ffffff;
        color: #111827;
    }
    .container {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        position: relative;
        z-index: 1;
    }
    .container.narrow {
        max-width: 56rem;
    }
    .section {
        position: relative;
        padding: 5rem 0;
    }
    .section.contact {
        padding: 6rem 0;
        text-align: center;
    }

    .hero {
        position: relative;
        height: 95vh;
        width: 100%;
        overflow: hidden;
    }
    .hero-scene, .hero-overlay {
        position: absolute;
        inset: 0;
    }
    .hero-scene spline-viewer {
        width: 100%;
        height: 100%;
    }
    .hero-overlay {
        pointer-events: none;
    }
    .hero-overlay-wash {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(255,255,255,0.4), rgba(255,255,255,0.2), rgba(255,255,255,0.8));
    }
    .hero-overlay-fade {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 0;
        height: 10rem;
        background: linear-gradient(to top, #ffffff, transparent);
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        height: 100%;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
        will-change: transform, opacity;
    }
    .hero-text {
        max-width: 42rem;
    }
    .hero h1 {
        margin-top: 1rem;
        font-size: clamp(2.25rem, 5vw, 3.75rem);
        font-weight: 800;
        line-height: 1.1;
    }
    .hero-lead {
        margin-top: 1rem;
        color: #4b5563;
        font-size: 1.125rem;
    }
    .hero-actions {
        margin-top: 2rem;
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
    }

    .pill, .eyebrow {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        border: 1px solid rgba(0,0,0,0.1);
        border-radius: 9999px;
        background: rgba(255,255,255,0.7);
        padding: 0.25rem 0.75rem;
        font-size: 0.75rem;
        font-weight: 500;
        color: #374151;
        backdrop-filter: blur(8px);
    }
    .button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        border-radius: 0.75rem;
        padding: 0.75rem 1.25rem;
        font-weight: 500;
        text-decoration: none;
        transition: background 0.2s ease, border-color 0.2s ease;
    }
    .button-dark {
        background: #111827;
        color: #ffffff;
    }
    .button-dark:hover {
        background: rgba(0,0,0,0.9);
    }
    .button-light {
        background: #ffffff;
        color: #111827;
        border: 1px solid #e5e7eb;
    }
    .button-light:hover {
        border-color: #d1d5db;
    }

    .chips {
        margin-top: 2.5rem;
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
    }
    .chip {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        border-radius: 9999px;
        border: 1px solid rgba(0,0,0,0.05);
        background: rgba(255,255,255,0.8);
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
        font-weight: 500;
        color: #374151;
        box-shadow: 0 1px 2px rgba(0,0,0,0.05);
        backdrop-filter: blur(8px);
    }

    .section-header {
        max-width: 48rem;
        margin: 0 auto 2.5rem;
        text-align: center;
    }
    .section-header h2 {
        margin-top: 1rem;
        font-size: clamp(1.875rem, 3vw, 2.25rem);
        font-weight: 700;
    }
    .section-header p {
        margin-top: 0.75rem;
        color: #4b5563;
    }

    .expertise-glow {
        position: absolute;
        inset: 0;
        opacity: 0.5;
        background: radial-gradient(ellipse at top, #f3e8ff, #ffffff 60%);
    }
    .grid {
        display: grid;
        gap: 1.5rem;
        grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
    }
    .card {
        border: 1px solid rgba(0,0,0,0.1);
        border-radius: 1rem;
        background: #ffffff;
        padding: 1.5rem;
        box-shadow: 0 10px 30px rgba(0,0,0,0.05);
    }
    .card-large {
        padding: 2rem;
        color: #374151;
        line-height: 1.7;
    }
    .card-large p + p {
        margin-top: 1rem;
    }
    .card-hover:hover {
        box-shadow: 0 20px 50px rgba(0,0,0,0.08);
    }
    .card-icon {
        display: inline-flex;
        margin-bottom: 1rem;
        border-radius: 0.75rem;
        background: #111827;
        color: #ffffff;
        padding: 0.75rem;
    }
    .card h3 {
        font-size: 1.25rem;
        font-weight: 600;
    }
    .card p, .card ul {
        margin-top: 0.5rem;
        color: #4b5563;
    }
    .card ul {
        list-style: disc inside;
    }
    .card li + li {
        margin-top: 0.5rem;
    }
    .metric {
        font-size: 0.875rem;
        font-weight: 500;
        color: #6b7280;
    }

    .contact-links {
        margin-top: 1.5rem;
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 0.75rem;
    }
    .contact-link {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        border: 1px solid rgba(0,0,0,0.1);
        border-radius: 0.75rem;
        background: #ffffff;
        padding: 0.5rem 1rem;
        color: #1f2937;
        text-decoration: none;
        box-shadow: 0 1px 2px rgba(0,0,0,0.05);
    }
    .contact-link:hover {
        border-color: rgba(0,0,0,0.2);
    }

    .footer {
        border-top: 1px solid rgba(0,0,0,0.1);
        padding: 2.5rem 0;
        font-size: 0.875rem;
        color: #6b7280;
    }
"#;
