//! Static page copy.
//!
//! DESIGN
//! ======
//! The page has no data source: everything it shows is a `'static` record
//! here, so components stay presentational and the copy can be checked in
//! tests (anchors resolve, section ids are unique).

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use effects::decor::DecorVariant;

use crate::components::icon::IconKind;

/// Module script that registers the `<spline-viewer>` custom element.
pub const SCENE_VIEWER_SCRIPT: &str = "https://unpkg.com/@splinetool/viewer@1.9.82/build/spline-viewer.js";

/// Id of the page root; the brand link scrolls here.
pub const HOME_ID: &str = "home";

pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub brand: &'static str,
    pub badge: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub scene_url: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Your Name",
    email: "youremail@example.com",
    github_url: "https://github.com/",
    linkedin_url: "https://linkedin.com/",
    brand: "DevPortfolio",
    badge: "Tech • Portfolio • Interactive • Modern",
    headline: "building playful, modern web experiences.",
    tagline: "Full-stack developer crafting delightful products with Rust, WebAssembly, and cloud-native backends.",
    scene_url: "https://prod.spline.design/VJLoxp84lCdVfdZu/scene.splinecode",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub static NAV_LINKS: [NavLink; 6] = [
    NavLink { href: "#projects", label: "Projects" },
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#skills", label: "Skills" },
    NavLink { href: "#experience", label: "Experience" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#contact", label: "Contact" },
];

/// A page section: its anchor id and optional floating decor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub decor: Option<(u32, DecorVariant)>,
}

pub const SERVICES: Section = Section { id: "services", decor: Some((5, DecorVariant::Blue)) };
pub const PROJECTS: Section = Section { id: "projects", decor: Some((6, DecorVariant::Purple)) };
pub const SKILLS: Section = Section { id: "skills", decor: Some((4, DecorVariant::Pink)) };
pub const EXPERIENCE: Section = Section { id: "experience", decor: None };
pub const ABOUT: Section = Section { id: "about", decor: None };
pub const CONTACT: Section = Section { id: "contact", decor: Some((5, DecorVariant::Blue)) };

/// Sections in page order.
pub static SECTIONS: [Section; 6] = [SERVICES, PROJECTS, SKILLS, EXPERIENCE, ABOUT, CONTACT];

pub struct Service {
    pub icon: IconKind,
    pub title: &'static str,
    pub desc: &'static str,
}

pub static SERVICE_LIST: [Service; 3] = [
    Service {
        icon: IconKind::Rocket,
        title: "Web Apps",
        desc: "High-quality frontends with smooth animations, accessibility, and responsive design.",
    },
    Service {
        icon: IconKind::Layers,
        title: "APIs & Backends",
        desc: "Reliable REST/WebSocket services, authentication, and databases with best practices.",
    },
    Service {
        icon: IconKind::Briefcase,
        title: "Product Engineering",
        desc: "From idea to launch: prototypes, iterations, and measurable outcomes.",
    },
];

pub struct Project {
    pub title: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
    pub repo: Option<&'static str>,
}

pub static PROJECT_LIST: [Project; 3] = [
    Project {
        title: "Realtime Chat App",
        desc: "WebSockets powered chat with rooms, typing indicators, and message search.",
        tags: &["Leptos", "Axum", "WebSockets"],
        link: Some("#"),
        repo: Some("#"),
    },
    Project {
        title: "3D Product Showcase",
        desc: "Interactive 3D viewer using Spline and custom shaders for lighting and depth.",
        tags: &["Spline", "WebGL", "UX"],
        link: Some("#"),
        repo: Some("#"),
    },
    Project {
        title: "Task Manager",
        desc: "Kanban-style productivity tool with offline support and sync.",
        tags: &["Rust", "PWA", "Postgres"],
        link: Some("#"),
        repo: Some("#"),
    },
];

pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static str,
}

pub static SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup { title: "Frontend", items: "Leptos, WebAssembly, CSS, Animation" },
    SkillGroup { title: "Backend", items: "Axum, Tokio, REST, WebSockets" },
    SkillGroup { title: "Data & Cloud", items: "Postgres, SQLx, Docker, CI/CD" },
    SkillGroup { title: "Extras", items: "Spline, WebGL, Testing, Design Systems" },
];

pub struct Role {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

pub static ROLES: [Role; 2] = [
    Role {
        role: "Senior Frontend Engineer",
        company: "TechCo",
        period: "2022 to Present",
        points: &[
            "Led migration to a WebAssembly frontend, reducing bundle size by 38%.",
            "Built design system components, improving dev velocity by 2x.",
            "Shipped real-time features with WebSockets and optimistic UI.",
        ],
    },
    Role {
        role: "Full-stack Developer",
        company: "Startup Inc.",
        period: "2020 to 2022",
        points: &[
            "Delivered 10+ features end-to-end from API to UI.",
            "Implemented CI/CD pipelines and containerized services.",
            "Collaborated closely with product and design to iterate quickly.",
        ],
    },
];

pub const ABOUT_TEXT: &str = "I'm a developer focused on crafting interactive, high-performance web apps. \
I love blending solid engineering with delightful user experiences, from real-time systems to immersive 3D.";

/// One decorative hero layer; `depth` is carried as text in `data-depth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallaxLayer {
    pub depth: &'static str,
    pub class: &'static str,
}

pub static HERO_LAYERS: [ParallaxLayer; 3] = [
    ParallaxLayer { depth: "0.2", class: "hero-parallax__layer hero-parallax__layer--a" },
    ParallaxLayer { depth: "0.4", class: "hero-parallax__layer hero-parallax__layer--b" },
    ParallaxLayer { depth: "0.6", class: "hero-parallax__layer hero-parallax__layer--c" },
];
