//! The single portfolio page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::sections::{
    AboutSection, ContactSection, ExperienceSection, ProjectsSection, ServicesSection, SkillsSection,
};
use crate::content::HOME_ID;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div id=HOME_ID class="page">
            <Navbar/>
            <main>
                <Hero/>
                <ServicesSection/>
                <ProjectsSection/>
                <SkillsSection/>
                <ExperienceSection/>
                <AboutSection/>
                <ContactSection/>
            </main>
            <Footer/>
        </div>
    }
}
