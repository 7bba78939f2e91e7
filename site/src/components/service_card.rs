use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::tilt_card::TiltCard;
use crate::content::Service;

#[component]
pub fn ServiceCard(service: &'static Service) -> impl IntoView {
    view! {
        <TiltCard>
            <div class="card service-card">
                <div class="service-card__icon">
                    <Icon kind=service.icon/>
                </div>
                <h3 class="card__title">{service.title}</h3>
                <p class="card__text">{service.desc}</p>
            </div>
        </TiltCard>
    }
}
