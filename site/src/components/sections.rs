//! Content sections below the hero.
//!
//! ARCHITECTURE
//! ============
//! Every section goes through `PageSection`, which sets the anchor id and
//! attaches the section's floating decor (seeded by that id). The section
//! bodies only lay out static copy and cards.

use leptos::prelude::*;

use crate::components::floating_decor::FloatingDecor;
use crate::components::icon::{Icon, IconKind};
use crate::components::project_card::ProjectCard;
use crate::components::service_card::ServiceCard;
use crate::components::tilt_card::TiltCard;
use crate::components::timeline_item::TimelineItem;
use crate::content::{
    ABOUT, ABOUT_TEXT, CONTACT, EXPERIENCE, PROFILE, PROJECT_LIST, PROJECTS, ROLES, SERVICE_LIST, SERVICES,
    SKILL_GROUPS, SKILLS, Section,
};
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
use effects::consts::COPY_FEEDBACK_RESET;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

#[component]
fn PageSection(
    section: Section,
    #[prop(optional)] class: &'static str,
    #[prop(default = "container")] width: &'static str,
    children: Children,
) -> impl IntoView {
    let decor = section.decor.map(|(count, variant)| {
        view! { <FloatingDecor seed_key=section.id count=count variant=variant/> }
    });
    let classes = if class.is_empty() { "page-section".to_owned() } else { format!("page-section {class}") };
    view! {
        <section id=section.id class=classes>
            {decor}
            <div class=width>{children()}</div>
        </section>
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <h2 class="section-title">{title}</h2>
        <p class="section-subtitle">{subtitle}</p>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <PageSection section=SERVICES>
            <SectionHeading
                title="What I Do"
                subtitle="End-to-end development with a focus on UX and performance"
            />
            <div class="card-grid card-grid--3">
                {SERVICE_LIST.iter().map(|service| view! { <ServiceCard service=service/> }).collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <PageSection section=PROJECTS>
            <div class="section-head">
                <div>
                    <SectionHeading title="Featured Projects" subtitle="A selection of work I loved building"/>
                </div>
                <a href=format!("#{}", CONTACT.id) class="section-head__cta">
                    "Work with me " <Icon kind=IconKind::ArrowRight size=14/>
                </a>
            </div>
            <div class="card-grid card-grid--3">
                {PROJECT_LIST.iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <PageSection section=SKILLS class="page-section--frosted">
            <SectionHeading title="Skills & Toolbox" subtitle="What I use to bring ideas to life"/>
            <div class="card-grid card-grid--4">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <TiltCard>
                                <div class="card skill-card">
                                    <h3 class="card__title">{group.title}</h3>
                                    <p class="card__text">{group.items}</p>
                                </div>
                            </TiltCard>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <PageSection section=EXPERIENCE width="container container--narrow">
            <SectionHeading title="Experience" subtitle="Highlights from recent roles"/>
            <div class="timeline">
                {ROLES.iter().map(|role| view! { <TimelineItem role=role/> }).collect_view()}
            </div>
        </PageSection>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <PageSection section=ABOUT width="container container--narrow">
            <div class="panel">
                <h2 class="section-title">"About Me"</h2>
                <p class="panel__text">{ABOUT_TEXT}</p>
            </div>
        </PageSection>
    }
}

/// Contact panel with the copy-email button.
///
/// A successful copy sets `UiState::copy` and schedules its revert after
/// [`effects::consts::COPY_FEEDBACK_RESET`]. Copying again replaces the
/// pending timer, and the revert ticket keeps a superseded timer from
/// clearing a newer confirmation. Clipboard failures only reach the console.
#[component]
pub fn ContactSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let copied = move || ui.with(UiState::email_copied);

    #[cfg(feature = "hydrate")]
    let revert_timer = StoredValue::new_local(None::<Timeout>);

    let on_copy = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::clipboard::write_text(PROFILE.email).await {
                Ok(()) => {
                    let Some(ticket) = ui.try_update(UiState::confirm_copy) else {
                        return;
                    };
                    let delay_ms = u32::try_from(COPY_FEEDBACK_RESET.as_millis()).unwrap_or(u32::MAX);
                    let timer = Timeout::new(delay_ms, move || {
                        ui.maybe_update(|state| state.revert_copy(ticket));
                    });
                    revert_timer.try_set_value(Some(timer));
                }
                Err(err) => log::debug!("copy email failed: {err}"),
            }
        });
    };

    view! {
        <PageSection section=CONTACT width="container container--slim">
            <div class="panel">
                <h2 class="section-title">"Let’s build something great"</h2>
                <p class="section-subtitle">"Email me or connect on socials."</p>
                <div class="contact__actions">
                    <a href=PROFILE.mailto() class="button button--dark">
                        <Icon kind=IconKind::Mail size=16/>
                        " Email"
                    </a>
                    <a href=PROFILE.github_url target="_blank" rel="noreferrer" class="button button--light">
                        <Icon kind=IconKind::Github size=16/>
                        " GitHub"
                    </a>
                    <a href=PROFILE.linkedin_url target="_blank" rel="noreferrer" class="button button--light">
                        <Icon kind=IconKind::Linkedin size=16/>
                        " LinkedIn"
                    </a>
                    <button class="button button--light" class:button--done=copied on:click=on_copy>
                        {move || if copied() { "Copied!" } else { "Copy email" }}
                    </button>
                </div>
            </div>
        </PageSection>
    }
}
