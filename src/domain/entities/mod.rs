//! Domain Entities
//!
//! Page content and the contact form.

pub mod contact;
pub mod content;

pub use contact::{looks_like_email, ContactError, ContactField, ContactForm, ContactMessage};
pub use content::{
    Portfolio, Profile, Project, Section, Skill, SocialLink, SECTION_ABOUT, SECTION_CONTACT,
    SECTION_PROJECTS, SECTION_SKILLS,
};
