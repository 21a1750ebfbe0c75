use log::warn;

#[derive(Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub image: &'static str,
}

pub static SERVICES: [Service; 6] = [
    Service {
        id: "custom-software-development",
        title: "Custom Software Development",
        description: "Tailor-made software solutions designed to address your unique business challenges and operational requirements.",
        icon: "</>",
        features: &[
            "Enterprise application development",
            "Web application development",
            "Mobile application development",
            "API development and integration",
            "Legacy system modernization",
        ],
        image: "https://images.pexels.com/photos/7988079/pexels-photo-7988079.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Service {
        id: "data-analytics",
        title: "Data Analytics & BI Solutions",
        description: "Transform raw data into actionable insights with our advanced analytics and visualization solutions.",
        icon: "📊",
        features: &[
            "Business intelligence implementation",
            "Predictive analytics",
            "Data visualization dashboards",
            "Real-time analytics",
            "Data warehouse solutions",
        ],
        image: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Service {
        id: "cloud-services",
        title: "Cloud Services",
        description: "Seamless cloud migration, management, and optimization services for improved scalability and performance.",
        icon: "🌐",
        features: &[
            "Cloud migration strategies",
            "Multi-cloud management",
            "Cloud-native application development",
            "Serverless architecture",
            "Cloud cost optimization",
        ],
        image: "https://images.pexels.com/photos/5474282/pexels-photo-5474282.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Service {
        id: "cybersecurity",
        title: "Cybersecurity Solutions",
        description: "Comprehensive security services to protect your digital assets against evolving cyber threats.",
        icon: "🔒",
        features: &[
            "Security assessment and auditing",
            "Threat detection and response",
            "Security architecture design",
            "Compliance management",
            "Security training and awareness",
        ],
        image: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Service {
        id: "ai-ml",
        title: "AI & Machine Learning",
        description: "Cutting-edge AI solutions that analyze data, derive insights, and automate decision-making processes.",
        icon: "🧠",
        features: &[
            "Machine learning model development",
            "Natural language processing",
            "Computer vision solutions",
            "Intelligent automation",
            "AI strategy consulting",
        ],
        image: "https://images.pexels.com/photos/8386434/pexels-photo-8386434.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Service {
        id: "it-consulting",
        title: "IT Consulting",
        description: "Strategic technology consulting to help businesses leverage IT for growth, efficiency, and competitive advantage.",
        icon: "👥",
        features: &[
            "Digital transformation strategy",
            "IT roadmap development",
            "Technology assessment",
            "Process optimization",
            "IT governance and compliance",
        ],
        image: "https://images.pexels.com/photos/3182812/pexels-photo-3182812.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
];

#[derive(Debug, PartialEq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ServiceDetail {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub process: &'static [ProcessStep],
    pub benefits: &'static [&'static str],
    pub expertise: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub stats: &'static [Stat],
}

static DETAILS: [(&str, ServiceDetail); 1] = [(
    "custom-software-development",
    ServiceDetail {
        title: "Custom Software Development",
        description: "We design and develop tailor-made software solutions that address your unique business challenges, streamline operations, and enhance productivity.",
        long_description: "Our team of skilled developers creates custom software applications that perfectly align with your business processes and objectives. We combine cutting-edge technologies with proven methodologies to deliver robust, scalable, and secure solutions that give you a competitive edge.",
        process: &[
            ProcessStep {
                title: "Requirements Analysis",
                description: "We work closely with you to understand your business needs, processes, and objectives to define the software requirements.",
            },
            ProcessStep {
                title: "Design & Architecture",
                description: "Our architects design the system architecture and user interfaces that will best meet your requirements.",
            },
            ProcessStep {
                title: "Development",
                description: "Using agile methodologies, we develop your software in iterative cycles, providing regular updates and gathering feedback.",
            },
            ProcessStep {
                title: "Testing & QA",
                description: "We perform rigorous testing to ensure your software is bug-free, secure, and meets all requirements.",
            },
            ProcessStep {
                title: "Deployment",
                description: "We deploy your software to your preferred environment, ensuring a smooth transition and minimal disruption.",
            },
            ProcessStep {
                title: "Support & Maintenance",
                description: "We provide ongoing support and maintenance to keep your software running smoothly and up-to-date.",
            },
        ],
        benefits: &[
            "Tailored to your exact business requirements",
            "Improved operational efficiency and productivity",
            "Enhanced competitive advantage",
            "Greater flexibility and scalability",
            "Better user experience and adoption",
        ],
        expertise: &[
            "Enterprise application development",
            "Web application development",
            "Mobile application development",
            "API development and integration",
            "Legacy system modernization",
            "Database design and development",
        ],
        technologies: &[
            "Frontend: React, Angular, Vue.js",
            "Backend: Node.js, .NET, Java, Python",
            "Mobile: React Native, Flutter",
            "Databases: SQL, NoSQL, GraphQL",
            "Cloud: AWS, Azure, Google Cloud",
            "DevOps: CI/CD, Docker, Kubernetes",
        ],
        image: "https://images.pexels.com/photos/7988079/pexels-photo-7988079.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        stats: &[
            Stat { value: "500+", label: "Projects Completed" },
            Stat { value: "98%", label: "Client Satisfaction" },
            Stat { value: "15+", label: "Years of Experience" },
            Stat { value: "50+", label: "Expert Developers" },
        ],
    },
)];

pub static DEFAULT_DETAIL: ServiceDetail = ServiceDetail {
    title: "Our Service",
    description: "We provide comprehensive technology solutions designed to transform your business and drive innovation.",
    long_description: "At Basel Dynamics Tech, we offer a wide range of technology services tailored to meet your specific business needs. Our team of experts combines deep technical expertise with industry knowledge to deliver solutions that drive growth, efficiency, and competitive advantage.",
    process: &[
        ProcessStep {
            title: "Discovery",
            description: "We thoroughly assess your requirements and objectives to understand your unique challenges and opportunities.",
        },
        ProcessStep {
            title: "Strategy",
            description: "We develop a tailored strategy that aligns with your business goals and outlines the path to successful implementation.",
        },
        ProcessStep {
            title: "Implementation",
            description: "Our expert team executes the plan using industry best practices and cutting-edge technologies.",
        },
        ProcessStep {
            title: "Optimization",
            description: "We continuously monitor and optimize the solution to ensure it delivers maximum value to your business.",
        },
    ],
    benefits: &[
        "Enhanced operational efficiency",
        "Improved decision-making through data-driven insights",
        "Increased agility and adaptability",
        "Reduced costs and resource requirements",
        "Strengthened competitive advantage",
    ],
    expertise: &[
        "Digital transformation",
        "Technology strategy",
        "Process optimization",
        "Systems integration",
        "Innovation management",
    ],
    technologies: &[
        "Cloud computing",
        "Artificial intelligence",
        "Machine learning",
        "Big data analytics",
        "Internet of Things (IoT)",
        "Blockchain",
    ],
    image: "https://images.pexels.com/photos/3184306/pexels-photo-3184306.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    stats: &[
        Stat { value: "10+", label: "Years of Excellence" },
        Stat { value: "200+", label: "Satisfied Clients" },
        Stat { value: "95%", label: "Client Retention" },
        Stat { value: "24/7", label: "Support" },
    ],
};

pub fn find_detail(id: &str) -> Option<&'static ServiceDetail> {
    DETAILS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, detail)| detail)
}

pub fn detail_or_default(id: &str) -> &'static ServiceDetail {
    find_detail(id).unwrap_or_else(|| {
        warn!("No service details for '{}', showing default", id);
        &DEFAULT_DETAIL
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_service_with_details_resolves() {
        let detail = detail_or_default("custom-software-development");
        assert_eq!(detail.title, "Custom Software Development");
        assert_eq!(detail.process.len(), 6);
    }

    #[test]
    fn listed_service_without_details_gets_default() {
        assert!(SERVICES.iter().any(|service| service.id == "ai-ml"));
        assert_eq!(detail_or_default("ai-ml"), &DEFAULT_DETAIL);
    }

    #[test]
    fn typo_in_link_renders_default_instead_of_failing() {
        assert_eq!(detail_or_default("custom-sofware-development").title, "Our Service");
    }
}
