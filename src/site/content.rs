//! Landing page content.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PreviewDish {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PreviewGroup {
    pub title: &'static str,
    pub dishes: &'static [PreviewDish],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct About {
    pub story: &'static str,
    pub mission: &'static str,
    pub vision: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub address: &'static str,
    pub phone: &'static str,
    pub map_embed_url: &'static str,
}

/// Everything the landing page renders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub name: &'static str,
    pub tagline: &'static str,
    /// Footer blurb
    pub summary: &'static str,
    pub about: About,
    pub menu_preview: &'static [PreviewGroup],
    pub testimonials: &'static [Testimonial],
    pub contact: Contact,
    pub opening_hours: &'static [OpeningHours],
    /// Absolute URL of the full menu page
    pub menu_url: String,
}

pub const RESTAURANT_NAME: &str = "Eden's Restaurant";

const TAGLINE: &str = "Experience Culinary Excellence";

const SUMMARY: &str =
    "A culinary haven where local meets international, creating an unforgettable dining experience.";

const ABOUT: About = About {
    story: "Located at Pacific University in Nairobi, Eden's Restaurant brings together the best of local and \
international cuisine. Our chefs craft each dish with passion and precision, using only the freshest \
ingredients to create memorable dining experiences.",
    mission: "To provide high quality meals and outstanding service in a welcoming environment that makes every \
guest feel at home.",
    vision: "To become the leading restaurant in the region and expand throughout the country, known for \
innovating cuisine across cultures.",
};

static LOCAL_CUISINE: &[PreviewDish] = &[
    PreviewDish {
        name: "Nyama Choma",
        description: "Traditional Kenyan roasted meat served with kachumbari salad",
        price: "KSh 950",
    },
    PreviewDish {
        name: "Ugali with Sukuma Wiki",
        description: "Kenyan staple cornmeal with sautéed collard greens",
        price: "KSh 650",
    },
    PreviewDish {
        name: "Swahili Fish Curry",
        description: "Fresh fish cooked in coconut curry with aromatic spices",
        price: "KSh 1,100",
    },
];

static INTERNATIONAL_CUISINE: &[PreviewDish] = &[
    PreviewDish {
        name: "Mediterranean Pasta",
        description: "Fresh pasta with sun-dried tomatoes, olives, and feta cheese",
        price: "KSh 850",
    },
    PreviewDish {
        name: "Asian Stir Fry",
        description: "Vegetables and choice of protein in a savory sauce with rice",
        price: "KSh 900",
    },
    PreviewDish {
        name: "Classic Burger",
        description: "Juicy beef patty with cheese, lettuce, and special sauce",
        price: "KSh 750",
    },
];

static MENU_PREVIEW: &[PreviewGroup] = &[
    PreviewGroup {
        title: "Local Cuisine",
        dishes: LOCAL_CUISINE,
    },
    PreviewGroup {
        title: "International Cuisine",
        dishes: INTERNATIONAL_CUISINE,
    },
];

static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Local Professional",
        quote: "Eden's Restaurant is my go-to place for business lunches. The service is impeccable and the food is consistently excellent.",
    },
    Testimonial {
        name: "David Mwangi",
        role: "University Professor",
        quote: "The fusion of local and international cuisine is brilliantly executed. I bring all my visiting colleagues here for an authentic yet innovative dining experience.",
    },
    Testimonial {
        name: "Emma Chen",
        role: "Tourist",
        quote: "During my visit to Nairobi, Eden's Restaurant was recommended to me, and it did not disappoint. The warm ambiance and delicious food made my trip memorable.",
    },
];

static OPENING_HOURS: &[OpeningHours] = &[
    OpeningHours {
        days: "Monday - Friday",
        hours: "10:00 AM - 10:00 PM",
    },
    OpeningHours {
        days: "Saturday - Sunday",
        hours: "11:00 AM - 11:00 PM",
    },
];

const CONTACT: Contact = Contact {
    address: "Pacific University, Thika Road, Nairobi, Kenya",
    phone: "+254 712 345 678",
    map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3988.7234567890123!2d36.833116405256995!3d-1.3236791572231377!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMcKwMTknMjUuMiJTIDM2wrA0OScxMS4yIkU!5e0!3m2!1sen!2ske!4v1234567890123!5m2!1sen!2ske",
};

impl SiteContent {
    pub fn new(menu_url: String) -> Self {
        Self {
            name: RESTAURANT_NAME,
            tagline: TAGLINE,
            summary: SUMMARY,
            about: ABOUT,
            menu_preview: MENU_PREVIEW,
            testimonials: TESTIMONIALS,
            contact: CONTACT,
            opening_hours: OPENING_HOURS,
            menu_url,
        }
    }
}
