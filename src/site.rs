//! Static content of the portfolio page.

pub struct Site {
    pub brand: &'static str,
    pub owner: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub nav: &'static [Link],
    pub stats: &'static [Stat],
    pub about: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub experience: &'static [Position],
    pub projects: &'static [Project],
    pub speaking_intro: &'static str,
    pub talks: &'static [Talk],
    pub contact_intro: &'static str,
    pub socials: &'static [Link],
}

pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("https://")
    }
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Position {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

pub struct Talk {
    pub title: &'static str,
    pub video_id: &'static str,
    pub caption: &'static str,
    pub tags: &'static [&'static str],
}

impl Talk {
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.video_id)
    }
}

pub static SITE: Site = Site {
    brand: "techie.lady()",
    owner: "Ifeoluwa Oluwafemi",
    role: "Backend Engineer",
    tagline: "Designing and developing high-volume, low-latency enterprise applications",
    nav: &[
        Link { label: "About", href: "#about" },
        Link { label: "Experience", href: "#experience" },
        Link { label: "Projects", href: "#projects" },
        Link { label: "Speaking", href: "#speaking" },
        Link { label: "Contact", href: "#contact" },
    ],
    stats: &[
        Stat { value: "6+", label: "Years Experience" },
        Stat { value: "5", label: "Companies" },
        Stat { value: "100+", label: "Projects" },
        Stat { value: "1K+", label: "Followers" },
    ],
    about: &[
        "I'm a backend engineer with clear knowledge of software development life cycles. \
         Inquisitive, energetic, and skilled in Design Thinking, with a strong foundation in logic \
         and cross-platform coding.",
        "An enthusiastic team player and deep creative thinker, experienced in designing and \
         developing high-volume, low-latency enterprise applications for fin-tech, health-tech, \
         and retail sectors.",
    ],
    skills: &[
        "Java",
        "JavaScript",
        "Node.js",
        "Spring Boot",
        "Kotlin",
        "NestJS",
        "MongoDB",
        "PostgreSQL",
        "MySQL",
        "MSSQL",
        "REST APIs",
        "Microservices",
        "Docker",
        "Azure DevOps",
        "GitHub",
        "Agile",
    ],
    experience: &[
        Position {
            title: "Backend Engineer",
            company: "PaveHQ",
            period: "Apr 2023 - Present",
            highlights: &[
                "Building scalable backend systems using Java and Spring Boot",
                "Designing and implementing enterprise applications",
                "Working remotely with distributed teams",
            ],
        },
        Position {
            title: "Back-end Engineer",
            company: "Enyata",
            period: "Mar 2022 - Dec 2024",
            highlights: &[
                "Collaborated with designers, product owners, and engineers to build software products",
                "Built applications using JavaScript/Java with NestJS and Spring Boot frameworks",
                "Worked on diverse projects in fin-tech, health-tech, and retail sectors",
                "Utilized agile development tools like Azure DevOps and GitHub",
            ],
        },
        Position {
            title: "Back End Developer",
            company: "Onhova",
            period: "Oct 2020 - Mar 2022",
            highlights: &[
                "Built inventory and procurement management system",
                "Worked with Java, MongoDB, and Spring Boot",
                "Connected wholesale and retail distributors through platform",
                "Enhanced stock replenishment practices for small businesses",
            ],
        },
        Position {
            title: "Back End Engineer",
            company: "Integrated Software Services LTD.",
            period: "Feb 2021 - Oct 2021",
            highlights: &[
                "Followed SDLC process using Confluence and Jira for collaboration",
                "Worked with Java, MSSQL, Liferay, MongoDB, Vaadin, MySQL",
                "Built REST and SOAP web services",
                "Worked on credit bureau and NIBSS (Nigeria Inter-Bank Settlement System) web services",
            ],
        },
        Position {
            title: "Backend Developer",
            company: "Semicolon",
            period: "Sep 2019 - Oct 2020",
            highlights: &[
                "Started backend development journey with Java",
                "Built foundational skills in server-side programming",
                "Learned software development best practices",
            ],
        },
    ],
    projects: &[
        Project {
            name: "Inventory Management System",
            summary: "Built procurement platform connecting wholesale and retail distributors, \
                      enabling price discovery and seamless stock replenishment for small businesses",
            tags: &["Java", "Spring Boot", "MongoDB"],
        },
        Project {
            name: "Banking Web Services",
            summary: "Developed credit bureau and NIBSS (Nigeria Inter-Bank Settlement System) web \
                      services using REST and SOAP protocols",
            tags: &["Java", "MSSQL", "REST/SOAP"],
        },
        Project {
            name: "Enterprise Applications",
            summary: "Designed high-volume, low-latency applications for fin-tech, health-tech, and \
                      retail sectors using microservices architecture",
            tags: &["JavaScript", "NestJS", "Azure"],
        },
        Project {
            name: "WTM Ethiopia Workshop",
            summary: "Led workshop on Backend Development with Node.js and Express.js for Women \
                      Techmakers Ethiopia, teaching RESTful APIs and best practices",
            tags: &["Node.js", "Express.js", "Teaching"],
        },
    ],
    speaking_intro: "I'm passionate about sharing knowledge and empowering the next generation of \
                     developers. Here are some of my speaking engagements and workshops.",
    talks: &[
        Talk {
            title: "Backend Web Development",
            video_id: "rT3_qBXA9rc",
            caption: "WTM Ethiopia Workshop - Introduction to Backend Development with Node.js and \
                      Express.js",
            tags: &["Node.js", "Express.js", "Workshop"],
        },
        Talk {
            title: "Introduction to Backend",
            video_id: "JmpR_rSz0fs",
            caption: "Women Techmakers Ethiopia - Teaching backend fundamentals and best practices",
            tags: &["Teaching", "Speaking", "WTM"],
        },
    ],
    contact_intro: "I'm always interested in hearing about new opportunities, collaborations, or \
                    connecting with fellow engineers. Whether it's about backend architecture, \
                    teaching opportunities, or innovative projects - let's talk!",
    socials: &[
        Link { label: "o.ifeoluwah@gmail.com", href: "mailto:o.ifeoluwah@gmail.com" },
        Link { label: "GitHub", href: "https://github.com/Ifeoluwa5983" },
        Link { label: "LinkedIn", href: "https://www.linkedin.com/in/ifeoluwa-oluwafemi/" },
    ],
};
