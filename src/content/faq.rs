use crate::search::Searchable;

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

impl Searchable for Faq {
    fn category(&self) -> &str {
        self.category
    }

    fn search_text(&self) -> [&str; 2] {
        [self.question, self.answer]
    }
}

pub const FAQ_CATEGORIES: [&str; 6] = ["All", "General", "Technical", "Services", "Support", "Security"];

pub static FAQS: [Faq; 8] = [
    Faq {
        question: "How do I request a demo of your products?",
        answer: "You can request a demo by visiting our Contact page and filling out the demo request form. Alternatively, you can email us at info@baseldtsolutions.com or call our sales team at +91 80 1234 5678.",
        category: "General",
    },
    Faq {
        question: "What is your typical project timeline?",
        answer: "Project timelines vary depending on the scope and complexity of the project. Typically, small to medium projects take 4-12 weeks, while larger enterprise solutions may take 3-6 months or more. We provide a detailed timeline during the initial consultation.",
        category: "Services",
    },
    Faq {
        question: "Do you offer technical support for your products?",
        answer: "Yes, we offer comprehensive technical support for all our products. We provide tiered support options including standard business hours support, extended hours support, and 24/7 premium support for critical systems.",
        category: "Support",
    },
    Faq {
        question: "How do you ensure the security of your software solutions?",
        answer: "We implement industry best practices for security throughout our development lifecycle. This includes regular security audits, penetration testing, secure coding practices, and staying up-to-date with the latest security patches and updates.",
        category: "Security",
    },
    Faq {
        question: "Can your solutions integrate with our existing systems?",
        answer: "Yes, our solutions are designed with interoperability in mind. We can integrate with most enterprise systems through APIs, webhooks, and other integration methods. During the requirements phase, we'll assess your existing systems and recommend the best integration approach.",
        category: "Technical",
    },
    Faq {
        question: "What training do you provide for new implementations?",
        answer: "We offer comprehensive training programs tailored to your team's needs. This includes user training, administrator training, and technical training for your IT staff. Training can be delivered in-person or remotely, and we provide detailed documentation for reference.",
        category: "Services",
    },
    Faq {
        question: "What is your pricing model?",
        answer: "Our pricing models vary depending on the product or service. We offer subscription-based pricing for our SaaS products, project-based pricing for custom development, and hourly rates for consulting services. Contact our sales team for a customized quote.",
        category: "General",
    },
    Faq {
        question: "How do you handle data migration from legacy systems?",
        answer: "We have extensive experience with data migration. Our process includes data assessment, cleaning, mapping, migration execution, and validation. We work closely with your team to ensure data integrity throughout the migration process.",
        category: "Technical",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{filter, ALL_CATEGORIES};

    #[test]
    fn every_faq_category_has_a_chip() {
        assert!(FAQS.iter().all(|faq| FAQ_CATEGORIES.contains(&faq.category)));
    }

    #[test]
    fn answers_are_searchable() {
        let found = filter(&FAQS, "webhooks", ALL_CATEGORIES);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "Technical");
    }

    #[test]
    fn category_narrows_search_results() {
        assert_eq!(filter(&FAQS, "", "General").len(), 2);
        assert_eq!(filter(&FAQS, "pricing", "General").len(), 1);
        assert!(filter(&FAQS, "pricing", "Security").is_empty());
    }
}
