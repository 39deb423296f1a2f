//! Copy and data shown on the page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub count: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub progress: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelStyle {
    Rings,
    Meters,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillPanel {
    pub id: &'static str,
    pub label: &'static str,
    pub style: PanelStyle,
    pub skills: &'static [Skill],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterButton {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    /// Space-separated filter ids this card belongs to.
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HiddenField {
    pub name: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteContent {
    pub owner: &'static str,
    pub greeting: &'static str,
    pub phrases: &'static [&'static str],
    pub nav: &'static [NavLink],
    pub stats: &'static [Stat],
    pub skill_bars: &'static [Skill],
    pub panels: &'static [SkillPanel],
    pub initial_panel: &'static str,
    pub filters: &'static [FilterButton],
    pub projects: &'static [Project],
    pub submit_label: &'static str,
    pub hidden_fields: &'static [HiddenField],
    pub email: &'static str,
}

pub const SITE: SiteContent = SiteContent {
    owner: "Jordan Lee",
    greeting: "Hi, I'm",
    phrases: &[
        " Data Analyst Enthusiast",
        "Passionate in Data Science",
        "Problem Solver",
    ],
    nav: &[
        NavLink { id: "home", label: "Home" },
        NavLink { id: "about", label: "About" },
        NavLink { id: "skills", label: "Skills" },
        NavLink { id: "projects", label: "Projects" },
        NavLink { id: "contact", label: "Contact" },
    ],
    stats: &[
        Stat { label: "Projects Completed", count: 15 },
        Stat { label: "Certifications", count: 8 },
        Stat { label: "Datasets Explored", count: 50 },
    ],
    skill_bars: &[
        Skill { name: "Python", progress: 90 },
        Skill { name: "SQL", progress: 85 },
        Skill { name: "Data Visualization", progress: 80 },
        Skill { name: "Statistics", progress: 75 },
    ],
    panels: &[
        SkillPanel {
            id: "technical",
            label: "Technical",
            style: PanelStyle::Rings,
            skills: &[
                Skill { name: "Python", progress: 90 },
                Skill { name: "SQL", progress: 85 },
                Skill { name: "R", progress: 70 },
                Skill { name: "Excel", progress: 88 },
            ],
        },
        SkillPanel {
            id: "tools",
            label: "Tools",
            style: PanelStyle::Meters,
            skills: &[
                Skill { name: "Tableau", progress: 80 },
                Skill { name: "Power BI", progress: 75 },
                Skill { name: "Jupyter", progress: 92 },
                Skill { name: "Git", progress: 70 },
            ],
        },
        SkillPanel {
            id: "soft",
            label: "Soft Skills",
            style: PanelStyle::Meters,
            skills: &[
                Skill { name: "Communication", progress: 90 },
                Skill { name: "Critical Thinking", progress: 88 },
                Skill { name: "Teamwork", progress: 85 },
            ],
        },
    ],
    initial_panel: "technical",
    filters: &[
        FilterButton { id: "all", label: "All" },
        FilterButton { id: "analysis", label: "Analysis" },
        FilterButton { id: "visualization", label: "Visualization" },
        FilterButton { id: "ml", label: "Machine Learning" },
    ],
    projects: &[
        Project {
            title: "Retail Sales Dashboard",
            summary: "Interactive dashboard tracking regional sales and seasonality.",
            category: "analysis visualization",
            tags: &["Tableau", "SQL"],
            href: "https://github.com/jordanlee",
        },
        Project {
            title: "Customer Churn Model",
            summary: "Gradient boosted classifier flagging at-risk subscribers.",
            category: "ml analysis",
            tags: &["Python", "scikit-learn"],
            href: "https://github.com/jordanlee",
        },
        Project {
            title: "Air Quality Explorer",
            summary: "Exploratory analysis of city sensor data with maps and trends.",
            category: "visualization",
            tags: &["Python", "Plotly"],
            href: "https://github.com/jordanlee",
        },
        Project {
            title: "Housing Price Forecast",
            summary: "Regression study of listing prices against neighborhood features.",
            category: "ml",
            tags: &["R", "Statistics"],
            href: "https://github.com/jordanlee",
        },
    ],
    submit_label: "Send Message",
    hidden_fields: &[
        HiddenField { name: "_subject", value: "New portfolio message" },
        HiddenField { name: "_captcha", value: "false" },
        HiddenField { name: "_template", value: "table" },
    ],
    email: "hello@jordanlee.dev",
};
