use leptos::prelude::*;

use crate::content::Role;

#[component]
pub fn TimelineItem(role: &'static Role) -> impl IntoView {
    view! {
        <div class="timeline-item">
            <span class="timeline-item__dot"></span>
            <div class="timeline-item__body">
                <div class="timeline-item__head">
                    <h4 class="timeline-item__role">
                        {role.role} " • " <span class="timeline-item__company">{role.company}</span>
                    </h4>
                    <span class="timeline-item__period">{role.period}</span>
                </div>
                <ul class="timeline-item__points">
                    {role.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
