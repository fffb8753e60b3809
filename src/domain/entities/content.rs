//! Portfolio content
//!
//! Static data rendered by the page: profile, projects, skills and links.

use crate::domain::value_objects::SectionId;

pub const SECTION_ABOUT: &str = "sobre-mi";
pub const SECTION_PROJECTS: &str = "proyectos";
pub const SECTION_SKILLS: &str = "skills";
pub const SECTION_CONTACT: &str = "contacto";

/// A navigable page section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub nav_label: &'static str,
    pub nav_icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
    pub tech: &'static str,
}

impl Project {
    /// `#` is a placeholder for "nothing to open yet".
    pub fn link(&self) -> Option<&'static str> {
        if self.link == "#" || self.link.is_empty() {
            None
        } else {
            Some(self.link)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// `#rrggbb`
    pub color: &'static str,
}

impl Skill {
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub welcome_title: &'static str,
    pub greeting: &'static str,
    pub tagline: &'static str,
    pub role: &'static str,
    pub about: &'static [&'static str],
    pub quote: &'static str,
    pub footer: &'static str,
}

/// Everything the page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    pub sections: Vec<Section>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub links: Vec<SocialLink>,
}

impl Portfolio {
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "MATÍAS.EXE",
                welcome_title: "BIENVENIDO A: MATÍAS // DEV1989",
                greeting: "Hola visitante, gracias por pasar 👋",
                tagline: "Técnico en Desarrollo de Software • Full Stack Developer • Entusiasta del UI/UX",
                role: "Técnico en Desarrollo de Software",
                about: &[
                    "Soy Técnico en Desarrollo de Software, apasionado por crear experiencias digitales funcionales y estéticamente atractivas que resuelvan problemas reales.",
                    "Me especializo en desarrollo full-stack con énfasis en React, PHP/Laravel y diseño de interfaces de usuario.",
                ],
                quote: "\"El código es el puente entre las ideas y la realidad.\"",
                footer: "MATÍAS // DEV1990. Hecho con ❤️ y Rust.",
            },
            sections: vec![
                Section {
                    id: SectionId::from(SECTION_ABOUT),
                    title: "Sobre mí",
                    nav_label: "Sobre mí",
                    nav_icon: "👤",
                },
                Section {
                    id: SectionId::from(SECTION_PROJECTS),
                    title: "Proyectos",
                    nav_label: "Proyectos",
                    nav_icon: "🚀",
                },
                Section {
                    id: SectionId::from(SECTION_SKILLS),
                    title: "Skills",
                    nav_label: "Skills",
                    nav_icon: "💻",
                },
                Section {
                    id: SectionId::from(SECTION_CONTACT),
                    title: "Contacto",
                    nav_label: "Contacto",
                    nav_icon: "📧",
                },
            ],
            projects: vec![
                Project {
                    id: 1,
                    title: "15 Segundos",
                    description: "Juego de reflejos mentales hecho 100% en React. Pon a prueba tu velocidad de procesamiento mental.",
                    icon: "⏱️",
                    link: "https://15-segundos.vercel.app/",
                    tech: "React, CSS3, JavaScript",
                },
                Project {
                    id: 2,
                    title: "Actúa o Muere!",
                    description: "Juego de interpretaciones para grupos de teatro o similares. Hecho en React, también disponible para Android.",
                    icon: "🎭",
                    link: "https://actua-o-mori.vercel.app/",
                    tech: "React, PWA, Android",
                },
                Project {
                    id: 3,
                    title: "Este Portfolio",
                    description: "Portfolio personal con animaciones sutiles, diseño moderno y estilo minimalista, ahora en la terminal.",
                    icon: "✨",
                    link: "#",
                    tech: "Rust, crossterm",
                },
                Project {
                    id: 4,
                    title: "Próximo Proyecto",
                    description: "Siempre trabajando en algo nuevo. Mantente atento para ver qué viene después...",
                    icon: "🚀",
                    link: "#",
                    tech: "Por definir",
                },
            ],
            skills: vec![
                Skill { name: "HTML/CSS", color: "#e34f26" },
                Skill { name: "JavaScript", color: "#f7df1e" },
                Skill { name: "React", color: "#61dafb" },
                Skill { name: "PHP/Laravel", color: "#777bb4" },
                Skill { name: "MySQL", color: "#4479a1" },
                Skill { name: "UI/UX", color: "#ff6b6b" },
            ],
            links: vec![
                SocialLink {
                    label: "Email",
                    url: "mailto:matirom77@gmail.com",
                },
                SocialLink {
                    label: "GitHub",
                    url: "https://github.com/chkx77/",
                },
                SocialLink {
                    label: "LinkedIn",
                    url: "https://www.linkedin.com/in/matias-romero-838925373/",
                },
            ],
        }
    }

    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin()
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
