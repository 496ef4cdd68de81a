//! The portfolio page: header, every content section, and footer.

use leptos::prelude::*;

use crate::components::about::AboutSection;
use crate::components::contact::ContactSection;
use crate::components::education::EducationSection;
use crate::components::experience::ExperienceSection;
use crate::components::hero::HeroSection;
use crate::components::projects::ProjectsSection;
use crate::components::resume_section::ResumeSection;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::tech_stack::TechStackSection;
use crate::page_model::PageModel;

/// Lays out the projected page content in section order.
#[component]
pub fn HomePage(page: PageModel) -> impl IntoView {
    let show_education = page.has_education();
    let PageModel {
        brand,
        hero,
        summary,
        tech_stack,
        projects,
        experience,
        education,
        certifications,
        resume_href,
        contact_links,
        navigation,
        footer,
    } = page;
    let footer_links = contact_links.clone();

    view! {
        <div class="site">
            <SiteHeader brand navigation/>
            <main>
                <HeroSection hero/>
                <AboutSection summary/>
                <TechStackSection cards=tech_stack/>
                <ProjectsSection categories=projects/>
                <ExperienceSection entries=experience/>
                {show_education.then(|| view! { <EducationSection education certifications/> })}
                <ResumeSection href=resume_href/>
                <ContactSection links=contact_links/>
            </main>
            <SiteFooter text=footer links=footer_links/>
        </div>
    }
}
