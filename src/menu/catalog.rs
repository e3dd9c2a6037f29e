//! The restaurant's static menu catalog.

use super::models::{Category, MenuItem, MenuSection, MenuSectionView};

macro_rules! image {
    ($path:literal) => {
        Some(concat!(
            "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/",
            $path
        ))
    };
}

/// Every orderable item, grouped by section and in menu order.
pub static CATALOG: &[MenuItem] = &[
    // Starters
    MenuItem {
        id: "starter-1",
        name: "Salt & Pepper Squid",
        description: "Served with pickled cucumber roasted beetroot crème fraîche",
        price: "KSh 850",
        price_value: 850,
        category: Category::Starter,
        spicy: Some(false),
        vegetarian: Some(false),
        image: image!("Salt%20and%20Pepper%20squid-DtH2LCIKCiGeOWwgtkaqio8BzIJjTI.jpeg"),
    },
    MenuItem {
        id: "starter-2",
        name: "Thai Salmon and Shrimp",
        description: "Seasoned and grilled salmon, red mashed potatoes sautéed green beans and thai chili sauce",
        price: "KSh 1,200",
        price_value: 1200,
        category: Category::Starter,
        spicy: Some(true),
        vegetarian: Some(false),
        image: image!("Thai%20Salmon%20and%20Shrimp-JlenzHf7QXOWoCukFz0JjHdWQispH3.jpeg"),
    },
    MenuItem {
        id: "starter-3",
        name: "Shrimp Cocktail",
        description: "Chilled jumbo prawns served with classic tangy cocktail sauce de lemon",
        price: "KSh 950",
        price_value: 950,
        category: Category::Starter,
        spicy: Some(false),
        vegetarian: Some(false),
        image: image!("Shrimp%20Cocktail-vk2kRV73Pz9PW1z2TdJxktRq0Ib6Vh.jpeg"),
    },
    // Main courses
    MenuItem {
        id: "main-1",
        name: "Ugali Served with Nyama Choma",
        description: "Maize porridge paired with grilled meat",
        price: "KSh 1,100",
        price_value: 1100,
        category: Category::MainCourse,
        spicy: Some(false),
        vegetarian: Some(false),
        image: image!("Ugali%20Served%20with%20Nyama%20Choma-eZmXfiGOb1zktlRsGDkKRcsoQPcHIZ.jpeg"),
    },
    MenuItem {
        id: "main-2",
        name: "Nyama Choma Served with Ugali & Kachumbari",
        description: "Grilled meat accompanied by maize porridge and a tomato-onion salad",
        price: "KSh 1,200",
        price_value: 1200,
        category: Category::MainCourse,
        spicy: Some(false),
        vegetarian: Some(false),
        image: image!("Nyama%20Choma%20Served%20with%20Ugali%20%26%20Kachumbari-T3O2pnvwjzfazFCGd7E616EHlZrWAX.jpeg"),
    },
    MenuItem {
        id: "main-3",
        name: "Grilled Salmon",
        description: "Salmon fillet grilled with a honey-mustard glaze",
        price: "KSh 1,400",
        price_value: 1400,
        category: Category::MainCourse,
        spicy: Some(false),
        vegetarian: Some(false),
        image: image!("Grilled%20Salmon-A3kUXbk4pY1HiANlZvkz5nLbRELxRT.jpeg"),
    },
    MenuItem {
        id: "main-4",
        name: "Bulgogi",
        description: "Korean marinated grilled beef with a sweet-savory flavour",
        price: "KSh 1,300",
        price_value: 1300,
        category: Category::MainCourse,
        spicy: Some(false),
        vegetarian: Some(false),
        image: image!("Bulgogi-UugpzZfESjU0SVWd1iYOPNPUlf3VZO.jpeg"),
    },
    MenuItem {
        id: "main-5",
        name: "Oysters on the Half Shell",
        description: "Fresh oysters served with mignonette sauce",
        price: "KSh 1,500",
        price_value: 1500,
        category: Category::MainCourse,
        spicy: Some(false),
        vegetarian: Some(false),
        image: image!("Oysters%20on%20the%20Half%20Shell-Cbzmkv9XdbUIvJKk8Af2Sqfgl21aUP.jpeg"),
    },
    // Desserts
    MenuItem {
        id: "dessert-1",
        name: "Red Velvet Cake",
        description: "Fluffy cocoa layered cake with sweet cream cheese frosting",
        price: "KSh 450",
        price_value: 450,
        category: Category::Dessert,
        spicy: Some(false),
        vegetarian: Some(true),
        image: image!("Red%20velvet%20cake-hh6MZE3pVIdOj2SWVKlSNPVfh7j2Xl.jpeg"),
    },
    MenuItem {
        id: "dessert-2",
        name: "Strawberry Shortcake",
        description: "Layers of fresh strawberries, light vanilla sponge cake and creamy custard",
        price: "KSh 500",
        price_value: 500,
        category: Category::Dessert,
        spicy: Some(false),
        vegetarian: Some(true),
        image: image!("Strawberry%20Shortcake-oWnfur6TpLCpiaAWliiXm28KTeaCkX.jpeg"),
    },
    MenuItem {
        id: "dessert-3",
        name: "Ice Cream",
        description: "Choice vanilla, strawberry or chocolate. No-sugar-added ice cream is also available",
        price: "KSh 300",
        price_value: 300,
        category: Category::Dessert,
        spicy: Some(false),
        vegetarian: Some(true),
        image: image!("Ice%20cream-FQD02AroejyLRa8U8EHdIRjQDs6Vxi.jpeg"),
    },
    // Drinks
    MenuItem {
        id: "drink-1",
        name: "Fresh Lemonade",
        description: "Freshly squeezed lemon juice with a hint of mint",
        price: "KSh 250",
        price_value: 250,
        category: Category::NonAlcoholic,
        spicy: None,
        vegetarian: None,
        image: image!("Fresh%20Lemonade-UNiiTSdklxuqHsOmkJj0W1UpLb3HxA.jpeg"),
    },
    MenuItem {
        id: "drink-2",
        name: "Mojito Mocktail",
        description: "Refreshing mint and lime mocktail",
        price: "KSh 350",
        price_value: 350,
        category: Category::NonAlcoholic,
        spicy: None,
        vegetarian: None,
        image: image!("Mojito%20Mocktail-kcMbutje4LD4eYe8uj8X5RLc94Wny3.jpeg"),
    },
    MenuItem {
        id: "drink-3",
        name: "Sparkling Rose",
        description: "Light and bubbly rosé wine",
        price: "KSh 650",
        price_value: 650,
        category: Category::Alcoholic,
        spicy: None,
        vegetarian: None,
        image: image!("Sparkling%20Rose-LfbKMi2n2CU0kXt07Q3g6Ky5EhVscT.jpeg"),
    },
    MenuItem {
        id: "drink-4",
        name: "Mimosa",
        description: "Classic champagne and orange juice cocktail",
        price: "KSh 550",
        price_value: 550,
        category: Category::Alcoholic,
        spicy: None,
        vegetarian: None,
        image: image!("Mimosa-iOTj42OjzqhzDZMhofYiojlL7b6uep.jpeg"),
    },
    MenuItem {
        id: "drink-5",
        name: "Two Islands",
        description: "House special cocktail blend",
        price: "KSh 600",
        price_value: 600,
        category: Category::Alcoholic,
        spicy: None,
        vegetarian: None,
        image: image!("Two%20Islands-y5hPWTWExn8RYA9KdHsnh9ACq8ddjw.jpeg"),
    },
];

/// Looks up a catalog item by its identifier.
pub fn find_item(id: &str) -> Option<&'static MenuItem> {
    CATALOG.iter().find(|item| item.id == id)
}

/// Items listed under `section`, in menu order.
pub fn items_in(section: MenuSection) -> Vec<MenuItem> {
    CATALOG
        .iter()
        .filter(|item| item.category.section() == section)
        .copied()
        .collect()
}

/// The full menu page: all four sections in display order.
pub fn menu_sections() -> Vec<MenuSectionView> {
    MenuSection::ALL
        .into_iter()
        .map(|section| MenuSectionView {
            section,
            title: section.title(),
            items: items_in(section),
        })
        .collect()
}
