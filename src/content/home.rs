pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        icon: "</>",
        title: "Custom Software Development",
        description: "Tailor-made software solutions designed to address your unique business challenges and operational requirements.",
    },
    Feature {
        icon: "🏢",
        title: "Enterprise Applications",
        description: "Robust, scalable applications that streamline processes, enhance productivity and drive business growth.",
    },
    Feature {
        icon: "🧠",
        title: "AI & Machine Learning",
        description: "Cutting-edge AI solutions that analyze data, derive insights, and automate decision-making processes.",
    },
    Feature {
        icon: "🔒",
        title: "Cybersecurity Solutions",
        description: "Comprehensive security services to protect your digital assets against evolving cyber threats.",
    },
    Feature {
        icon: "🌐",
        title: "Cloud Services",
        description: "Seamless cloud migration, management, and optimization services for improved scalability and performance.",
    },
    Feature {
        icon: "📊",
        title: "Data Analytics",
        description: "Transform raw data into actionable insights with our advanced analytics and visualization solutions.",
    },
];

pub const ABOUT_BENEFITS: [&str; 6] = [
    "Advanced technological infrastructure",
    "Team of seasoned experts & specialists",
    "Innovative, future-ready solutions",
    "Dedicated 24/7 client support",
    "ISO certified secure development practices",
    "Proven track record of client success",
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub position: &'static str,
    pub image: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Basel Dynamics Tech's software solutions have completely transformed our business operations. The custom CRM they developed has increased our sales efficiency by 45%.",
        author: "Sarah Johnson",
        position: "CEO, TechVenture Inc.",
        image: "https://images.pexels.com/photos/762020/pexels-photo-762020.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Testimonial {
        quote: "The cybersecurity infrastructure implemented by Basel Dynamics Tech has provided us with peace of mind. Their proactive approach to security has prevented numerous potential breaches.",
        author: "Michael Chen",
        position: "CTO, Global Secure Systems",
        image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Testimonial {
        quote: "Working with Basel Dynamics Tech has been a game-changer for our data analytics capabilities. Their AI solutions have helped us uncover insights we never thought possible.",
        author: "Priya Sharma",
        position: "Data Director, AnalyticsFirst",
        image: "https://images.pexels.com/photos/3796217/pexels-photo-3796217.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
];

/// Carousel index after stepping `forward` or back, wrapping at both ends.
pub fn step_carousel(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps_both_ways() {
        let len = TESTIMONIALS.len();
        assert_eq!(step_carousel(0, len, false), len - 1);
        assert_eq!(step_carousel(len - 1, len, true), 0);
        assert_eq!(step_carousel(1, len, true), 2);
        assert_eq!(step_carousel(1, len, false), 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        assert_eq!(step_carousel(0, 0, true), 0);
        assert_eq!(step_carousel(0, 0, false), 0);
    }
}
