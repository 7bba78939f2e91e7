use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::tilt_card::TiltCard;
use crate::content::Project;

/// Project tile with tags and optional "Live"/"Code" links.
#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <TiltCard class="project-card-wrap">
            <div class="card project-card">
                <div class="project-card__sheen"></div>
                <div class="project-card__head">
                    <div>
                        <h3 class="card__title">{project.title}</h3>
                        <p class="card__text">{project.desc}</p>
                    </div>
                    <Icon kind=IconKind::Code size=20/>
                </div>
                <div class="project-card__tags">
                    {project.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                </div>
                <div class="project-card__links">
                    {project
                        .link
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noreferrer" class="project-card__live">
                                    "Live " <Icon kind=IconKind::ExternalLink size=14/>
                                </a>
                            }
                        })}
                    {project
                        .repo
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noreferrer" class="project-card__code">
                                    "Code " <Icon kind=IconKind::Github size=14/>
                                </a>
                            }
                        })}
                </div>
            </div>
        </TiltCard>
    }
}
