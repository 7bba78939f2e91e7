//! Hero banner: 3D scene, readability overlay, parallax layers and the intro.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::hero_parallax::HeroParallax;
use crate::components::icon::{Icon, IconKind};
use crate::content::{CONTACT, HERO_LAYERS, PROFILE, PROJECTS};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <HeroParallax layers=&HERO_LAYERS>
                <div class="hero__scene">
                    <spline-viewer url=PROFILE.scene_url></spline-viewer>
                </div>
                <div class="hero__overlay"></div>
            </HeroParallax>

            <div class="hero__content">
                <div class="hero__inner">
                    <Badge>{PROFILE.badge}</Badge>
                    <h1 class="hero__title">
                        "Hi, I’m " <span class="gradient-text">{PROFILE.name}</span> ", "
                        {PROFILE.headline}
                    </h1>
                    <p class="hero__tagline">{PROFILE.tagline}</p>
                    <div class="hero__actions">
                        <a href=format!("#{}", PROJECTS.id) class="button button--dark">
                            "View Projects " <Icon kind=IconKind::ArrowRight size=16/>
                        </a>
                        <a href=format!("#{}", CONTACT.id) class="button button--glass">
                            "Contact Me"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
