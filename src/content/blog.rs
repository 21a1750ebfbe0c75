use crate::search::Searchable;

#[derive(Debug, PartialEq)]
pub struct Author {
    pub name: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub author: Author,
}

impl Searchable for BlogPost {
    fn category(&self) -> &str {
        self.category
    }

    fn search_text(&self) -> [&str; 2] {
        [self.title, self.excerpt]
    }
}

pub static POSTS: [BlogPost; 6] = [
    BlogPost {
        id: "ai-revolution-business",
        title: "The AI Revolution: How Machine Learning is Transforming Business",
        excerpt: "Explore how artificial intelligence and machine learning are revolutionizing business operations across industries.",
        date: "May 15, 2025",
        read_time: "7 min read",
        category: "Artificial Intelligence",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        author: Author {
            name: "Dr. Sarah Chen",
            avatar: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        },
    },
    BlogPost {
        id: "cloud-migration-strategies",
        title: "Cloud Migration Strategies for Enterprise Applications",
        excerpt: "A comprehensive guide to planning and executing successful cloud migrations for large-scale enterprise applications.",
        date: "April 28, 2025",
        read_time: "10 min read",
        category: "Cloud Computing",
        image: "https://images.pexels.com/photos/1181271/pexels-photo-1181271.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        author: Author {
            name: "Michael Johnson",
            avatar: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        },
    },
    BlogPost {
        id: "cybersecurity-trends-2025",
        title: "Cybersecurity Trends to Watch in 2025",
        excerpt: "Stay ahead of emerging threats with our analysis of the top cybersecurity trends that will define the landscape in 2025.",
        date: "April 10, 2025",
        read_time: "8 min read",
        category: "Cybersecurity",
        image: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        author: Author {
            name: "Alexandra Patel",
            avatar: "https://images.pexels.com/photos/1036623/pexels-photo-1036623.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        },
    },
    BlogPost {
        id: "data-analytics-business-growth",
        title: "Leveraging Data Analytics for Sustainable Business Growth",
        excerpt: "Discover how data analytics can drive decision-making and foster sustainable growth in today's competitive business environment.",
        date: "March 22, 2025",
        read_time: "6 min read",
        category: "Data Analytics",
        image: "https://images.pexels.com/photos/186461/pexels-photo-186461.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        author: Author {
            name: "David Rodriguez",
            avatar: "https://images.pexels.com/photos/91227/pexels-photo-91227.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        },
    },
    BlogPost {
        id: "blockchain-enterprise-applications",
        title: "Blockchain Beyond Cryptocurrency: Enterprise Applications",
        excerpt: "Explore real-world enterprise applications of blockchain technology beyond the cryptocurrency space.",
        date: "March 8, 2025",
        read_time: "9 min read",
        category: "Blockchain",
        image: "https://images.pexels.com/photos/844124/pexels-photo-844124.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        author: Author {
            name: "Emma Thompson",
            avatar: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        },
    },
    BlogPost {
        id: "iot-industrial-transformation",
        title: "IoT and the Industrial Transformation",
        excerpt: "How the Internet of Things is revolutionizing industrial processes and creating smarter, more efficient operations.",
        date: "February 15, 2025",
        read_time: "7 min read",
        category: "IoT",
        image: "https://images.pexels.com/photos/2007647/pexels-photo-2007647.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        author: Author {
            name: "James Wilson",
            avatar: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{categories, filter, ALL_CATEGORIES};

    #[test]
    fn every_post_category_is_offered_as_a_chip() {
        assert_eq!(
            categories(&POSTS),
            vec![
                "All",
                "Artificial Intelligence",
                "Cloud Computing",
                "Cybersecurity",
                "Data Analytics",
                "Blockchain",
                "IoT",
            ]
        );
    }

    #[test]
    fn search_hits_excerpt_text() {
        let found = filter(&POSTS, "INDUSTRIAL processes", ALL_CATEGORIES);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "iot-industrial-transformation");
    }

    #[test]
    fn search_inside_a_category() {
        assert!(filter(&POSTS, "blockchain", "Cloud Computing").is_empty());
        assert_eq!(filter(&POSTS, "", "Cybersecurity").len(), 1);
    }
}
