use log::warn;

use crate::search::Searchable;

#[derive(Debug, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub image: &'static str,
}

impl Searchable for Product {
    fn category(&self) -> &str {
        self.category
    }

    fn search_text(&self) -> [&str; 2] {
        [self.name, self.description]
    }
}

pub static PRODUCTS: [Product; 6] = [
    Product {
        id: "data-analyzer-pro",
        name: "Data Analyzer Pro",
        category: "Analytics",
        description: "Advanced data analytics platform with real-time insights and customizable dashboards.",
        icon: "📊",
        image: "https://images.pexels.com/photos/669615/pexels-photo-669615.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Product {
        id: "secure-vault",
        name: "SecureVault",
        category: "Cybersecurity",
        description: "Enterprise-grade security solution for data protection and threat prevention.",
        icon: "🔒",
        image: "https://images.pexels.com/photos/5380642/pexels-photo-5380642.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Product {
        id: "cloudshift",
        name: "CloudShift",
        category: "Cloud Services",
        description: "Seamless cloud migration and management platform for businesses of all sizes.",
        icon: "🌐",
        image: "https://images.pexels.com/photos/5474282/pexels-photo-5474282.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Product {
        id: "codeforge",
        name: "CodeForge",
        category: "Development",
        description: "Collaborative coding environment with integrated testing and deployment tools.",
        icon: "</>",
        image: "https://images.pexels.com/photos/270348/pexels-photo-270348.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Product {
        id: "database-commander",
        name: "Database Commander",
        category: "Data Management",
        description: "Comprehensive database management system with advanced querying capabilities.",
        icon: "🗄",
        image: "https://images.pexels.com/photos/325111/pexels-photo-325111.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Product {
        id: "serverwatch",
        name: "ServerWatch",
        category: "Infrastructure",
        description: "Real-time server monitoring and performance optimization platform.",
        icon: "🖥",
        image: "https://images.pexels.com/photos/325229/pexels-photo-325229.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
];

#[derive(Debug, PartialEq)]
pub struct ProductDetail {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub use_cases: &'static [&'static str],
    pub image: &'static str,
    pub tech_specs: &'static [&'static str],
}

static DETAILS: [(&str, ProductDetail); 2] = [
    (
        "data-analyzer-pro",
        ProductDetail {
            name: "Data Analyzer Pro",
            tagline: "Transform raw data into actionable insights",
            description: "Data Analyzer Pro is a comprehensive analytics platform designed to help businesses make data-driven decisions. With intuitive dashboards, advanced visualization tools, and powerful AI-driven analytics capabilities, it transforms complex data into clear, actionable insights.",
            features: &[
                "Real-time data processing and analysis",
                "Customizable dashboards and reporting",
                "AI-powered predictive analytics",
                "Integration with multiple data sources",
                "Automated report generation",
                "Role-based access control",
            ],
            benefits: &[
                "Make data-driven decisions with confidence",
                "Identify trends and patterns before your competitors",
                "Improve operational efficiency",
                "Reduce time spent on manual data analysis",
                "Scale your analytics as your business grows",
            ],
            use_cases: &[
                "Marketing campaign performance analysis",
                "Financial forecasting and planning",
                "Customer behavior analysis",
                "Supply chain optimization",
                "Sales performance tracking",
            ],
            image: "https://images.pexels.com/photos/669615/pexels-photo-669615.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            tech_specs: &[
                "Cloud-based SaaS solution",
                "RESTful API for custom integrations",
                "GDPR compliant data handling",
                "Advanced encryption for data security",
                "Scalable architecture for organizations of all sizes",
            ],
        },
    ),
    (
        "secure-vault",
        ProductDetail {
            name: "SecureVault",
            tagline: "Enterprise-grade security for your digital assets",
            description: "SecureVault provides comprehensive security solutions for businesses of all sizes. With advanced threat detection, encryption, and access control features, it protects your most valuable digital assets from both external threats and internal vulnerabilities.",
            features: &[
                "Advanced threat detection and prevention",
                "End-to-end encryption for all data",
                "Multi-factor authentication",
                "Real-time security monitoring",
                "Automated security updates",
                "Compliance management tools",
            ],
            benefits: &[
                "Protect sensitive business and customer data",
                "Maintain compliance with industry regulations",
                "Prevent costly data breaches and security incidents",
                "Build customer trust with robust security measures",
                "Simplify security management across your organization",
            ],
            use_cases: &[
                "Financial services security compliance",
                "Healthcare data protection",
                "Intellectual property safeguarding",
                "Customer data protection",
                "Remote work security",
            ],
            image: "https://images.pexels.com/photos/5380642/pexels-photo-5380642.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            tech_specs: &[
                "On-premise or cloud deployment options",
                "Integration with existing security infrastructure",
                "AI-powered threat intelligence",
                "Automated incident response",
                "Comprehensive audit logging and reporting",
            ],
        },
    ),
];

pub static DEFAULT_DETAIL: ProductDetail = ProductDetail {
    name: "Product Details",
    tagline: "Innovative solutions for modern challenges",
    description: "Explore our comprehensive product offerings designed to transform your business operations and drive growth. Each product is built with cutting-edge technology and designed for seamless integration with your existing systems.",
    features: &[
        "Intuitive user interface",
        "Scalable architecture",
        "Enterprise-grade security",
        "Comprehensive documentation and support",
        "Regular updates and enhancements",
        "Flexible deployment options",
    ],
    benefits: &[
        "Improve operational efficiency",
        "Reduce costs and resource requirements",
        "Enhance data security and compliance",
        "Gain competitive advantage",
        "Future-proof your business operations",
    ],
    use_cases: &[
        "Business process optimization",
        "Digital transformation initiatives",
        "Legacy system modernization",
        "Cross-department collaboration",
        "Data-driven decision making",
    ],
    image: "https://images.pexels.com/photos/8370752/pexels-photo-8370752.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    tech_specs: &[
        "Cloud-native architecture",
        "API-first design for easy integration",
        "Containerized deployment options",
        "Horizontal scaling capabilities",
        "Comprehensive security features",
    ],
};

pub fn find_detail(id: &str) -> Option<&'static ProductDetail> {
    DETAILS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, detail)| detail)
}

/// Unknown ids render the generic record instead of a 404.
pub fn detail_or_default(id: &str) -> &'static ProductDetail {
    find_detail(id).unwrap_or_else(|| {
        warn!("No product details for '{}', showing default", id);
        &DEFAULT_DETAIL
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{categories, filter};

    #[test]
    fn known_id_resolves_to_its_record() {
        assert_eq!(detail_or_default("secure-vault").name, "SecureVault");
    }

    #[test]
    fn unknown_id_falls_back_to_default_record() {
        assert!(find_detail("secure-vualt").is_none());
        assert_eq!(detail_or_default("secure-vualt"), &DEFAULT_DETAIL);
        assert_eq!(detail_or_default("").name, "Product Details");
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, product) in PRODUCTS.iter().enumerate() {
            assert!(PRODUCTS[i + 1..].iter().all(|other| other.id != product.id));
        }
    }

    #[test]
    fn one_product_per_category_chip() {
        let chips = categories(&PRODUCTS);
        assert_eq!(chips.len(), PRODUCTS.len() + 1);
        assert_eq!(filter(&PRODUCTS, "", "Infrastructure")[0].id, "serverwatch");
    }
}
