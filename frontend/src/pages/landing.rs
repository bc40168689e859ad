use std::rc::Rc;

use chrono::Datelike;
use log::info;
use yew::prelude::*;

use crate::components::carousel::CarouselVariant;
use crate::components::gallery::{GalleryTabs, ShowroomStrip};
use crate::components::icons::{icon, Icon};
use crate::components::lightbox::Lightbox;
use crate::contact;
use crate::content::{Brand, Differentiator, Hero, LandingContent, Location};
use crate::showroom::{Showroom, ShowroomAction, StripKey};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<LandingContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;
    let showroom = {
        let content = content.clone();
        use_reducer(move || Showroom::from_content(&content))
    };
    let dispatch = {
        let showroom = showroom.clone();
        Callback::from(move |action: ShowroomAction| showroom.dispatch(action))
    };

    let whatsapp = contact::whatsapp_url(&content.contact.whatsapp_number, &content.contact.whatsapp_message);

    let strip = |key: StripKey, label: &'static str, variant: CarouselVariant, zoomable: bool| {
        match showroom.strip(&key) {
            Some(state) => html! {
                <ShowroomStrip
                    strip={key}
                    state={state.clone()}
                    dispatch={dispatch.clone()}
                    {label}
                    {variant}
                    {zoomable}
                />
            },
            None => html! {},
        }
    };

    let gallery = match showroom.active_gallery_key() {
        Some(key) => strip(key, "Galeria de projetos", CarouselVariant::Landscape, true),
        None => html! {},
    };
    let on_category = dispatch.reform(ShowroomAction::SelectCategory);
    let tabs: Vec<_> = content
        .gallery
        .iter()
        .filter(|category| showroom.categories().contains(&category.key))
        .cloned()
        .collect();

    html! {
        <div class="landing-page">
            <HeroSection hero={content.hero.clone()} whatsapp={whatsapp.clone()} />
            <DifferentiatorsSection items={content.differentiators.clone()} whatsapp={whatsapp.clone()} />

            <section class="testimonials-section">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Clientes satisfeitos são nossa maior prova de qualidade."}</h2>
                        <p>
                            {"Ao longo de quase quatro décadas, entregamos centenas de projetos residenciais e corporativos, sempre com alta precisão, estética e pontualidade. Veja o que nossos clientes dizem sobre a experiência com a Nunes:"}
                        </p>
                        <div class="average-rating">
                            <span class="average-value">{ format!("{:.1}", content.average_rating) }</span>
                            <span class="stars">{ ("★".repeat(5)) }</span>
                            <span class="average-scale">{"/ 5"}</span>
                        </div>
                    </div>
                    { strip(StripKey::Testimonials, "Depoimentos de clientes", CarouselVariant::Testimonial, false) }
                </div>
            </section>

            <section id="projetos" class="gallery-section">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Projetos que saíram do papel"}</h2>
                        <p>{"Escolha um ambiente e clique na foto para ver em tela cheia."}</p>
                    </div>
                    <GalleryTabs
                        categories={tabs}
                        active={showroom.active_category().map(|key| AttrValue::from(key.to_string()))}
                        on_select={on_category}
                    />
                    { gallery }
                </div>
            </section>

            <section class="environments-section">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Vamos transformar seu ambiente?"}</h2>
                        <p>
                            {"Fale agora com uma de nossas designers de interiores e comece a planejar um espaço que reflete seu estilo, com qualidade, precisão e entrega garantida."}
                        </p>
                    </div>
                    { strip(StripKey::Environments, "Ambientes planejados", CarouselVariant::Portrait, true) }
                    <div class="section-cta">
                        <a href={whatsapp.clone()} target="_blank" rel="noopener noreferrer" class="cta-primary">
                            {"Comece seu projeto com a gente"}
                        </a>
                    </div>
                </div>
            </section>

            <LocationSection location={content.location.clone()} />
            <SiteFooter brand={content.brand.clone()} whatsapp={whatsapp.clone()} display_phone={content.contact.display_phone.clone()} />
            <FloatingContact href={whatsapp} />

            <Lightbox
                state={showroom.lightbox().clone()}
                on_close={dispatch.reform(|_: ()| ShowroomAction::CloseLightbox)}
                on_key={dispatch.reform(ShowroomAction::KeyPressed)}
                on_prev={dispatch.reform(|_: ()| ShowroomAction::LightboxPrev)}
                on_next={dispatch.reform(|_: ()| ShowroomAction::LightboxNext)}
                on_select={dispatch.reform(ShowroomAction::LightboxSelect)}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    hero: Hero,
    whatsapp: String,
}

#[function_component(HeroSection)]
fn hero_section(props: &HeroProps) -> Html {
    let hero = &props.hero;
    let badges = hero.badges.iter().map(|badge| {
        let badge_icon = Icon::from_key(&badge.icon).unwrap_or(Icon::Star);
        html! {
            <div class="hero-badge">
                <div class="badge-icon">{ icon(badge_icon, "icon") }</div>
                <p>{ &badge.text }</p>
            </div>
        }
    });

    html! {
        <header class="hero">
            <div class="hero-background">
                <img src={crate::config::asset_url(&hero.background)} alt={hero.background_alt.clone()} />
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <h1>
                    <span class="hero-highlight">{ &hero.title_highlight }</span>
                    <span class="hero-title">{ &hero.title }</span>
                </h1>
                <p class="hero-subtitle">{ &hero.subtitle }</p>
                <div class="hero-badges">
                    { for badges }
                </div>
                <div class="hero-cta-group">
                    <a href={props.whatsapp.clone()} target="_blank" rel="noopener noreferrer" class="cta-primary">
                        { icon(Icon::WhatsApp, "icon") }
                        { &hero.primary_cta }
                    </a>
                    <a href="#diferenciais" class="cta-secondary">
                        { &hero.secondary_cta }
                        { icon(Icon::ChevronRight, "icon-sm") }
                    </a>
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct DifferentiatorsProps {
    items: Vec<Differentiator>,
    whatsapp: String,
}

#[function_component(DifferentiatorsSection)]
fn differentiators_section(props: &DifferentiatorsProps) -> Html {
    // Cards whose icon is unknown are skipped rather than rendered bare.
    let cards = props.items.iter().filter_map(|item| {
        let card_icon = Icon::from_key(&item.icon)?;
        Some(html! {
            <div class="differentiator-card">
                <div class="differentiator-icon">{ icon(card_icon, "icon-lg") }</div>
                <h3>{ &item.title }</h3>
                <p>{ &item.description }</p>
            </div>
        })
    });

    html! {
        <section id="diferenciais" class="differentiators">
            <div class="section-inner">
                <div class="section-header">
                    <h2>
                        <span>{"Diferenciais que transformam"}</span>
                        <br />
                        <span class="accent">{"a Nunes na melhor escolha."}</span>
                    </h2>
                </div>
                <div class="differentiators-grid">
                    { for cards }
                </div>
                <div class="section-cta">
                    <a href={props.whatsapp.clone()} target="_blank" rel="noopener noreferrer" class="cta-primary">
                        {"Solicitar orçamento personalizado"}
                        { icon(Icon::ChevronRight, "icon-sm") }
                    </a>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct LocationProps {
    location: Location,
}

#[function_component(LocationSection)]
fn location_section(props: &LocationProps) -> Html {
    let location = &props.location;
    html! {
        <section class="location-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Venha nos visitar"}</h2>
                    <p>{"Estamos prontos para recebê-lo e apresentar nossos projetos de móveis planejados."}</p>
                </div>
                <div class="map-frame">
                    <iframe
                        src={location.embed_url.clone()}
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        allowfullscreen=true
                        title="Localização Nunes Móveis"
                    />
                    <a href={contact::maps_search_url(&location.query)} target="_blank" rel="noopener noreferrer" class="map-open">
                        { icon(Icon::MapPin, "icon") }
                        <span>{"Abrir no Google Maps"}</span>
                        { icon(Icon::ExternalLink, "icon-sm") }
                    </a>
                </div>
                <div class="map-address">
                    <p class="address">{ format!("📍 {}", location.display_address) }</p>
                    <p class="hint">{"Clique no mapa para ver a localização completa no Google Maps"}</p>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    brand: Brand,
    whatsapp: String,
    display_phone: String,
}

#[function_component(SiteFooter)]
fn site_footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{ &props.brand.name }</h3>
                    <p>{ &props.brand.tagline }</p>
                    <p class="footer-since">{ format!("{} anos de tradição", props.brand.years) }</p>
                </div>
                <div>
                    <h3>{"Contato"}</h3>
                    <a href={props.whatsapp.clone()} target="_blank" rel="noopener noreferrer" class="footer-contact">
                        { icon(Icon::WhatsApp, "icon-sm") }
                        { format!("WhatsApp: {}", props.display_phone) }
                    </a>
                </div>
                <div>
                    <h3>{"Atendimento"}</h3>
                    <p>{"Atendimento realizado por designers de interiores especializados."}</p>
                </div>
            </div>
            <div class="footer-copyright">
                <p>{ format!("© {} {}. Todos os direitos reservados.", year, props.brand.name) }</p>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
struct FloatingContactProps {
    href: String,
}

#[function_component(FloatingContact)]
fn floating_contact(props: &FloatingContactProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class="floating-whatsapp"
            aria-label="Fale conosco no WhatsApp"
        >
            { icon(Icon::WhatsApp, "icon-lg") }
            <span class="floating-tooltip">{"Fale conosco"}</span>
        </a>
    }
}

/// Shown when the bundled content cannot be loaded.
#[function_component(ContentUnavailable)]
pub fn content_unavailable() -> Html {
    info!("Rendering content fallback");
    html! {
        <div class="content-unavailable">
            <h1>{"Nunes Móveis"}</h1>
            <p>{"Estamos atualizando nossa página. Volte em instantes."}</p>
        </div>
    }
}
