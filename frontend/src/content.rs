// Page copy and links.

pub const OWNER: &str = "Satya Swaroop Voora";
pub const ROLE: &str = "Growth Operator";
pub const SPLINE_SCENE: &str = "https://prod.spline.design/VJLoxp84lCdVfdZu/scene.splinecode";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Rocket,
    TrendingUp,
    Megaphone,
    Layers,
    Users,
    Handshake,
    Mail,
    Github,
    Twitter,
    Linkedin,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::ArrowRight => "→",
            Icon::Rocket => "🚀",
            Icon::TrendingUp => "📈",
            Icon::Megaphone => "📣",
            Icon::Layers => "🗂",
            Icon::Users => "👥",
            Icon::Handshake => "🤝",
            Icon::Mail => "✉",
            Icon::Github => "⌨",
            Icon::Twitter => "✦",
            Icon::Linkedin => "in",
        }
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Expertise", href: "#expertise" },
    NavLink { label: "Case Studies", href: "#work" },
    NavLink { label: "Contact", href: "#contact" },
];

pub struct Capability {
    pub icon: Icon,
    pub label: &'static str,
}

pub const CAPABILITIES: &[Capability] = &[
    Capability { icon: Icon::TrendingUp, label: "Growth Strategy" },
    Capability { icon: Icon::Megaphone, label: "Product Marketing" },
    Capability { icon: Icon::Layers, label: "Product Management" },
    Capability { icon: Icon::Users, label: "Community Development" },
    Capability { icon: Icon::Handshake, label: "Partnerships" },
];

pub struct ExpertiseCard {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const EXPERTISE: &[ExpertiseCard] = &[
    ExpertiseCard {
        icon: Icon::TrendingUp,
        title: "Growth Systems",
        desc: "North-star metrics, growth loops, and experimentation frameworks that scale compounding growth.",
    },
    ExpertiseCard {
        icon: Icon::Megaphone,
        title: "Product Marketing",
        desc: "Messaging, positioning, and GTM plans that bridge user insight with product value.",
    },
    ExpertiseCard {
        icon: Icon::Layers,
        title: "Product Management",
        desc: "Roadmapping, discovery, and cross-functional alignment to ship outcomes, not just features.",
    },
    ExpertiseCard {
        icon: Icon::Users,
        title: "Community Development",
        desc: "Programs and playbooks that turn users into advocates and reduce CAC over time.",
    },
    ExpertiseCard {
        icon: Icon::Handshake,
        title: "Partnerships",
        desc: "Strategic integrations and co-marketing that unlock new distribution channels.",
    },
];

pub struct CaseStudy {
    pub title: &'static str,
    pub metric: &'static str,
    pub bullets: &'static [&'static str],
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "B2B SaaS PLG Transformation",
        metric: "ARR +42% in 9 months",
        bullets: &[
            "Redesigned activation to reduce time-to-value by 60%",
            "Built pricing experiment framework; increased ARPA 18%",
            "Launched partner integrations driving 25% new signups",
        ],
    },
    CaseStudy {
        title: "Community-led Growth Engine",
        metric: "CAC -35%, NPS +22",
        bullets: &[
            "Shipped ambassador program and tiered rewards",
            "Codified UGC playbook to scale organic reach",
            "Deployed referral-based onboarding paths",
        ],
    },
    CaseStudy {
        title: "Enterprise GTM Realignment",
        metric: "Win rate +15pp",
        bullets: &[
            "Clarified ICP and multi-threaded deal strategy",
            "Tightened PMM-sales feedback loop",
            "ROI narrative and proof-library revamp",
        ],
    },
];

pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: Icon::Linkedin, label: "LinkedIn", href: "https://linkedin.com" },
    SocialLink { icon: Icon::Twitter, label: "Twitter", href: "https://twitter.com" },
    SocialLink { icon: Icon::Github, label: "GitHub", href: "https://github.com" },
    SocialLink { icon: Icon::Mail, label: "Email", href: "mailto:hello@example.com" },
];
