use askama::Template;
use axum::response::IntoResponse;

use crate::content::{
    experiences, profile, projects, skill_categories, social_links, stats, Experience, Profile,
    Project, SkillCategory, SocialLink, Stat,
};
use crate::routes::render;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub skill_categories: Vec<SkillCategory>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
}

pub async fn page() -> impl IntoResponse {
    render(IndexTemplate {
        profile: profile(),
        stats: stats(),
        skill_categories: skill_categories(),
        experiences: experiences(),
        projects: projects(),
        social_links: social_links(),
    })
}
