use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::{measure_sections, Nav, NavItem};
use crate::motion::{use_frame, Region, TECH_CARD_COUNT};
use crate::scroll::ScrollProvider;

const SECTION_IDS: [&str; 4] = ["hero", "vehicle", "technology", "experience"];

struct TechFeature {
    title: &'static str,
    desc: &'static str,
}

const TECH_FEATURES: [TechFeature; TECH_CARD_COUNT] = [
    TechFeature {
        title: "Sensor Suite",
        desc: "Camera, lidar, and radar systems provide 360-degree awareness in all conditions.",
    },
    TechFeature {
        title: "AI Driving",
        desc: "Machine learning models trained on millions of miles of real-world driving data.",
    },
    TechFeature {
        title: "Redundancy",
        desc: "Multiple backup systems ensure safe operation even if primary systems fail.",
    },
];

const GALLERY_SQUARES: [(&str, &str); 2] = [
    ("/images/interior.webp", "Interior View"),
    ("/images/side.webp", "Seating Layout"),
];

const GALLERY_WIDE: [(&str, &str); 3] = [
    ("/images/Las.webp", "Las Vegas"),
    ("/images/san.webp", "San Francisco"),
    ("/images/out view.webp", "Exterior View"),
];

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::anchor("Home", "hero"),
        NavItem::anchor("Vehicle", "vehicle"),
        NavItem::anchor("Technology", "technology"),
        NavItem::anchor("Experience", "experience"),
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <ScrollProvider>
            <HomeSections />
        </ScrollProvider>
    }
}

#[function_component(HomeSections)]
fn home_sections() -> Html {
    let frame = use_frame();
    let active = use_state_eq(|| Some(SECTION_IDS[0]));
    let hero_video = use_node_ref();

    // Autoplay needs the muted property set, the attribute is not enough.
    {
        let hero_video = hero_video.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = hero_video.cast::<HtmlMediaElement>() {
                    video.set_muted(true);
                    if video.play().is_err() {
                        log::debug!("Hero video autoplay was refused");
                    }
                }
                || ()
            },
            (),
        );
    }

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(id) = measure_sections(&SECTION_IDS) {
                    active.set(Some(id));
                }
                || ()
            },
            frame.offset,
        );
    }

    html! {
        <div class="home-page">
            <Nav items={nav_items()} active={*active} />

            <section id="hero" class="hero">
                <video
                    ref={hero_video}
                    src="/videos/hero.mp4"
                    autoplay={true}
                    loop={true}
                    muted={true}
                    playsinline={true}
                    class="hero-video"
                />
                <div class="hero-text" style={frame.style(Region::HeroText)}>
                    <h1>{"It's not a car."}</h1>
                    <p>{"It's a robotaxi designed around you."}</p>
                    <div class="hero-chevron">{"⌄"}</div>
                </div>
            </section>

            <section class="full-image">
                <div class="full-image-frame" style={frame.style(Region::HeroImage)}>
                    <img src="/images/home.png" alt="Zoox Vehicle" />
                    <div class="full-image-caption" style={frame.style(Region::PurposeCaption)}>
                        <h2>{"Purpose-Built"}</h2>
                    </div>
                </div>
            </section>

            <section id="vehicle" class="vehicle">
                <div class="two-column">
                    <div class="column-text" style={frame.style(Region::VehicleText)}>
                        <h2>{"Symmetrical by design"}</h2>
                        <p>{"No front. No back. Our vehicle is bidirectional, allowing it to navigate city streets with unprecedented efficiency."}</p>
                        <p>{"Built from the ground up for autonomous driving, with no steering wheel or pedals. Every element serves the passenger experience."}</p>
                    </div>
                    <div class="column-media" style={frame.style(Region::VehicleImage)}>
                        <div class="media-frame square">
                            <img src="/images/side.webp" alt="Vehicle Side View" />
                        </div>
                    </div>
                </div>

                <div class="two-column reverse">
                    <div class="column-media" style={frame.style(Region::ComfortVideo)}>
                        <div class="media-frame wide">
                            <video src="/videos/video2.mp4" controls={true} />
                        </div>
                    </div>
                    <div class="column-text" style={frame.style(Region::ComfortText)}>
                        <h2>{"Designed for comfort"}</h2>
                        <p>{"Four seats facing each other create a social space for conversation and connection during your ride."}</p>
                        <p>{"Large sliding doors on both sides provide easy entry and exit, making every journey effortless."}</p>
                    </div>
                </div>
            </section>

            <section id="technology" class="technology">
                <div class="tech-background" style={frame.style(Region::TechBackground)}>
                    <img src="/images/side.webp" alt="" />
                    <div class="tech-shade"></div>
                </div>
                <div class="tech-content">
                    <h2 style={frame.style(Region::TechHeading)}>{"Built for autonomy"}</h2>
                    <div class="tech-grid">
                        { for TECH_FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <div class="tech-card" style={frame.style(Region::TechCard(index))}>
                                <div class="tech-icon"><div></div></div>
                                <h3>{feature.title}</h3>
                                <p>{feature.desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="in-action">
                <h2>{"See it in action"}</h2>
                <div class="media-frame wide dark">
                    <video src="/videos/video2.mp4" controls={true} />
                </div>
            </section>

            <section id="experience" class="experience">
                <h2>{"The ride experience"}</h2>
                <div class="gallery two-up">
                    { for GALLERY_SQUARES.iter().map(|(src, alt)| html! {
                        <div class="media-frame square light">
                            <img src={*src} alt={*alt} />
                        </div>
                    }) }
                </div>
                <div class="gallery three-up">
                    { for GALLERY_WIDE.iter().map(|(src, alt)| html! {
                        <div class="media-frame wide light">
                            <img src={*src} alt={*alt} />
                        </div>
                    }) }
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                .home-page {
                    background: #fff;
                    color: #000;
                    overflow-x: hidden;
                }

                .home-page h2 {
                    font-size: clamp(2rem, 5vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.1;
                }

                .hero {
                    min-height: 100vh;
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #f9fafb;
                }

                .hero-video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-text {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                    padding: 0 1.5rem;
                    color: #fff;
                    text-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
                }

                .hero-text h1 {
                    font-size: clamp(2.5rem, 8vw, 6rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .hero-text p {
                    font-size: clamp(1.25rem, 3.5vw, 3rem);
                    font-weight: 300;
                    margin-bottom: 3rem;
                }

                .hero-chevron {
                    font-size: 3rem;
                    animation: bounce 1s infinite;
                }

                @keyframes bounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: translateY(0); }
                }

                .full-image {
                    position: relative;
                    overflow: hidden;
                }

                .full-image-frame {
                    height: 100vh;
                    position: relative;
                    background: #e5e7eb;
                    transition: transform 0.1s ease-out;
                }

                .full-image-frame img, .media-frame img, .media-frame video,
                .tech-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                }

                .full-image-caption {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    pointer-events: none;
                }

                .full-image-caption h2 {
                    color: #fff;
                    background: rgba(0, 0, 0, 0.5);
                    padding: 1.5rem 2rem;
                    border-radius: 1rem;
                    backdrop-filter: blur(4px);
                }

                .vehicle, .in-action, .experience {
                    padding: 8rem 1.5rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .two-column {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    margin-bottom: 8rem;
                }

                .two-column:last-child {
                    margin-bottom: 0;
                }

                .column-text p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    line-height: 1.6;
                    margin-top: 1.5rem;
                }

                .media-frame {
                    background: #f3f4f6;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .media-frame.square {
                    aspect-ratio: 1 / 1;
                }

                .media-frame.wide {
                    aspect-ratio: 16 / 9;
                }

                .media-frame.dark {
                    background: #111827;
                }

                .media-frame.light {
                    background: #e5e7eb;
                    border-radius: 1rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .media-frame.light img {
                    transition: transform 0.5s ease;
                }

                .media-frame.light img:hover {
                    transform: scale(1.05);
                }

                .technology {
                    position: relative;
                    padding: 8rem 0;
                    overflow: hidden;
                }

                .tech-background {
                    position: absolute;
                    inset: 0;
                    background: #1f2937;
                }

                .tech-shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                }

                .tech-content {
                    position: relative;
                    z-index: 1;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    color: #fff;
                    text-align: center;
                }

                .tech-content h2 {
                    margin-bottom: 5rem;
                }

                .tech-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                }

                .tech-icon {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .tech-icon div {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #fff;
                }

                .tech-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .tech-card p {
                    color: #e5e7eb;
                    font-size: 1.125rem;
                    line-height: 1.6;
                }

                .in-action h2, .experience h2 {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .experience {
                    max-width: none;
                    background: #f9fafb;
                }

                .gallery {
                    display: grid;
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 0 auto 2rem;
                }

                .gallery.two-up {
                    grid-template-columns: repeat(2, 1fr);
                }

                .gallery.three-up {
                    grid-template-columns: repeat(3, 1fr);
                }

                @media (prefers-reduced-motion: reduce) {
                    .hero-chevron {
                        animation: none;
                    }
                }

                @media (max-width: 767px) {
                    .full-image-frame {
                        height: 60vh;
                    }

                    .vehicle, .in-action, .experience {
                        padding: 3rem 1rem;
                    }

                    .two-column, .tech-grid, .gallery.two-up, .gallery.three-up {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    .two-column {
                        margin-bottom: 3rem;
                    }

                    .two-column.reverse .column-media {
                        order: 2;
                    }
                }
                "#}
            </style>
        </div>
    }
}
