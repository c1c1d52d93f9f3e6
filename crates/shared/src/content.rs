//! Literal page content. Everything here lives for the lifetime of the page.

use serde::Serialize;

use crate::domain::{
    Accent, ContactInfo, ExperienceEntry, Icon, NavBinding, NavPlacement, Profile, ProjectEntry,
    SectionId, SkillGroup, TextRun, TimelineSide,
};

pub const PROFILE: Profile = Profile {
    name: "Abhishek Harkar",
    mark: "<AH />",
    availability: "Available for Hire",
    headline: "GenAI Full Stack Engineer | DevOps Practitioner | System Architect",
    quote: "\"Building intelligent agents and scalable systems that bridge the gap between AI and production.\"",
    about: &[
        TextRun {
            text: "I am a passionate Computer Science Engineer specializing in ",
            highlight: false,
        },
        TextRun {
            text: "Generative AI",
            highlight: true,
        },
        TextRun {
            text: " and ",
            highlight: false,
        },
        TextRun {
            text: "Full Stack Development",
            highlight: true,
        },
        TextRun {
            text: ". With a strong foundation in DevOps and cloud infrastructure, I don't just build models—I deploy scalable, production-ready AI solutions. My expertise spans building autonomous agents, RAG pipelines, and real-time streaming platforms. I am currently focused on solving complex problems using LangChain, LangGraph, and Azure OpenAI.",
            highlight: false,
        },
    ],
};

pub const CONTACT: ContactInfo = ContactInfo {
    phone: "+91 9373581139",
    email: "abhishekharkar@gmail.com",
    github_url: "https://github.com/AKIS-4",
    linkedin_url: "https://www.linkedin.com/in/abhishek-harkar-595647276",
    copyright: "© 2026 Abhishek Harkar. Built with AI.",
};

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "GenAI Full Stack Intern",
        organization: "GenAIKit Software Solution Pvt Ltd",
        period: "Oct 2025 – Present | Remote",
        bullets: &[
            "Built and shipped Generative AI applications using FastAPI, LangChain, LangGraph, and Azure OpenAI.",
            "Designed RAG pipelines and ML microservices, reducing client manual workload by 40%.",
        ],
        side: TimelineSide::Left,
    },
    ExperienceEntry {
        title: "DevOps Intern",
        organization: "Pearl Thoughts",
        period: "July 2025 – Aug 2025 | Remote",
        bullets: &[
            "Deployed headless backends (Strapi, Medusa) using Terraform and GitHub Actions.",
            "Managed infrastructure via AWS CodeDeploy and CloudWatch for reliable CI/CD.",
        ],
        side: TimelineSide::Right,
    },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Real-Time AI Interviewer",
        description: "Engineered a voice-to-voice interview assistant utilizing RAG to contextualize questions based on candidate resumes. The system handles real-time audio processing to conduct natural conversations, reducing manual recruiter screening time by nearly 40%.",
        stack: &["FastAPI", "Next.js", "LiveKit", "Azure OpenAI", "RAG"],
        icon: Icon::Cpu,
        accent: Accent::Purple,
    },
    ProjectEntry {
        title: "Live Video Streaming Platform",
        description: "Architected a high-performance video streaming platform capable of RTMP ingest, FFmpeg-based transcoding, and HLS segmentation. Deployed on AWS to handle multi-resolution delivery with low latency, ensuring scalable user interaction.",
        stack: &["AWS (EC2, S3, Route53)", "Nginx RTMP", "FFmpeg", "React", "Node.js"],
        icon: Icon::Server,
        accent: Accent::Green,
    },
    ProjectEntry {
        title: "Agentic Cloud IDE",
        description: "Developed a web-based Integrated Development Environment embedded with an autonomous coding agent. The system features a secure, containerized architecture using AWS ECS to provision isolated runtime environments for every user session.",
        stack: &[
            "React",
            "FastAPI",
            "Claude SDK",
            "LangGraph",
            "Azure Anthropic",
            "AWS ECS",
            "WebSockets",
        ],
        icon: Icon::Terminal,
        accent: Accent::Blue,
    },
    ProjectEntry {
        title: "Clinical LLM Fine-Tuning",
        description: "Built a domain-specific summarization model for healthcare by fine-tuning Mistral 7B using LoRA. Curated a dataset of 10k+ medical documents to optimize training workflows, resulting in a 25% increase in summarization accuracy.",
        stack: &["Mistral 7B", "LoRA/PEFT", "FastAPI", "Gradio", "Python"],
        icon: Icon::Cpu,
        accent: Accent::Teal,
    },
    ProjectEntry {
        title: "OCR-Enhanced RAG Pipeline",
        description: "Designed an advanced Retrieval-Augmented Generation system specifically for complex, unstructured data. Integrates OCR to accurately extract and analyze information from scanned PDFs, images, and embedded tables for precise query retrieval.",
        stack: &["LangChain", "PyTesseract (OCR)", "React", "FastAPI", "Python"],
        icon: Icon::Code,
        accent: Accent::Yellow,
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        items: &["Python", "C/C++", "SQL", "JavaScript"],
    },
    SkillGroup {
        category: "GenAI & ML",
        items: &["LangChain", "LangGraph", "Azure OpenAI", "RAG", "Fine-tuning"],
    },
    SkillGroup {
        category: "Web Frameworks",
        items: &["React.js", "Node.js", "FastAPI", "Next.js"],
    },
    SkillGroup {
        category: "DevOps & Cloud",
        items: &["Docker", "Kubernetes", "AWS", "Terraform", "GitHub Actions"],
    },
];

pub const NAV_BINDINGS: &[NavBinding] = &[
    NavBinding {
        label: "<AH />",
        target: SectionId::Home,
        placement: NavPlacement::Brand,
    },
    NavBinding {
        label: "About",
        target: SectionId::About,
        placement: NavPlacement::NavLink,
    },
    NavBinding {
        label: "Experience",
        target: SectionId::Experience,
        placement: NavPlacement::NavLink,
    },
    NavBinding {
        label: "Projects",
        target: SectionId::Projects,
        placement: NavPlacement::NavLink,
    },
    NavBinding {
        label: "Skills",
        target: SectionId::Skills,
        placement: NavPlacement::NavLink,
    },
    NavBinding {
        label: "Contact Me",
        target: SectionId::Contact,
        placement: NavPlacement::NavCta,
    },
    NavBinding {
        label: "View Projects",
        target: SectionId::Projects,
        placement: NavPlacement::HeroCta,
    },
    NavBinding {
        label: "Contact Me",
        target: SectionId::Contact,
        placement: NavPlacement::HeroCta,
    },
];

/// Everything the renderer needs, bundled so alternate content can be injected in tests.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub contact: ContactInfo,
    pub experience: &'static [ExperienceEntry],
    pub projects: &'static [ProjectEntry],
    pub skills: &'static [SkillGroup],
    pub nav: &'static [NavBinding],
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: PROFILE,
            contact: CONTACT,
            experience: EXPERIENCE,
            projects: PROJECTS,
            skills: SKILLS,
            nav: NAV_BINDINGS,
        }
    }
}

impl SiteContent {
    pub fn nav_in(&self, placement: NavPlacement) -> impl Iterator<Item = &NavBinding> + '_ {
        self.nav
            .iter()
            .filter(move |binding| binding.placement == placement)
    }
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
