//! Static site content rendered into the portfolio sections.

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub fn profile() -> Profile {
    Profile {
        name: "Sumama Khan",
        role: "Full Stack Developer",
        tagline: "Have a project in mind or want to collaborate? Feel free to reach out!",
        location: "Mumbai, India",
        email: "sumamakhan800@gmail.com",
    }
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            value: "1.5+",
            label: "Years of Experience",
        },
        Stat {
            value: "20+",
            label: "Projects Completed",
        },
        Stat {
            value: "20+",
            label: "Technologies",
        },
        Stat {
            value: "600+",
            label: "DSA Problems",
        },
    ]
}

pub fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            name: "Frontend",
            skills: &[
                "HTML5",
                "CSS3/SCSS",
                "JavaScript",
                "TypeScript",
                "React",
                "Next.js",
                "Tailwind CSS",
            ],
        },
        SkillCategory {
            name: "Backend",
            skills: &[
                "Node.js",
                "Express",
                "MongoDB",
                "PostgreSQL",
                "RESTful APIs",
                "GraphQL",
            ],
        },
        SkillCategory {
            name: "Tools & Others",
            skills: &["Git/GitHub", "Docker", "AWS", "Jest", "CI/CD", "Figma"],
        },
    ]
}

pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            title: "Full Stack Developer",
            company: "MESCO Trust",
            period: "May 2024 - Present",
            description: "Designed and developed a modern NGO website featuring responsive \
                design, dynamic routing, and optimized load times. Integrated Strapi CMS with a \
                custom service layer, reduced bundle size by 60% and API calls by 70%, and added \
                a Razorpay payment gateway with scalable deployment on PM2, Nginx and Cloudflare.",
            skills: &[
                "TypeScript",
                "React",
                "Node.js",
                "Strapi",
                "Razorpay",
                "PostgreSQL",
            ],
        },
        Experience {
            title: "AI Engineer",
            company: "Outlier",
            period: "Dec 2024 - June 2025",
            description: "Worked freelance on 5+ projects for AI-related companies, developing \
                and optimizing prompts for generative AI models and gaining hands-on experience \
                with LLM training and prompt engineering.",
            skills: &["Python", "SQL", "Prompt Engineering", "Generative AI"],
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "E-commerce Platform",
            description: "A full-featured e-commerce platform with product listings, cart \
                functionality, user authentication, and payment processing.",
        },
        Project {
            title: "Task Management App",
            description: "A responsive task management application with drag-and-drop \
                functionality, user authentication, and real-time updates.",
        },
        Project {
            title: "Social Media Dashboard",
            description: "An analytics dashboard for social media managers with data \
                visualization, reporting, and scheduling features.",
        },
        Project {
            title: "Booking System API",
            description: "A RESTful API for a booking system with authentication, \
                authorization, and resource management.",
        },
        Project {
            title: "Weather App",
            description: "A weather application that provides current conditions and forecasts \
                based on user location or search.",
        },
        Project {
            title: "Blog Platform",
            description: "A content management system for blogs with rich text editing, \
                categories, and user management.",
        },
    ]
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            name: "GitHub",
            url: "https://github.com/sumamakhan761",
        },
        SocialLink {
            name: "LinkedIn",
            url: "https://linkedin.com/in/sumama-khan",
        },
        SocialLink {
            name: "Twitter",
            url: "https://twitter.com/sumamakhan761",
        },
    ]
}
