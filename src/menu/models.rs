//! Menu Domain Models
//!
//! Catalog records are compiled into the binary, so every string field
//! borrows from static data and items can be copied freely into carts.

use serde::Serialize;

// =============================================================================
// Categories
// =============================================================================

/// Category label printed on each menu card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Starter")]
    Starter,
    #[serde(rename = "Main Course")]
    MainCourse,
    #[serde(rename = "Dessert")]
    Dessert,
    #[serde(rename = "Non-Alcoholic")]
    NonAlcoholic,
    #[serde(rename = "Alcoholic")]
    Alcoholic,
}

impl Category {
    /// The menu page section this category is listed under.
    pub fn section(self) -> MenuSection {
        match self {
            Category::Starter => MenuSection::Starters,
            Category::MainCourse => MenuSection::MainCourses,
            Category::Dessert => MenuSection::Desserts,
            Category::NonAlcoholic | Category::Alcoholic => MenuSection::Drinks,
        }
    }
}

/// The four fixed sections of the menu page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuSection {
    Starters,
    MainCourses,
    Desserts,
    Drinks,
}

impl MenuSection {
    pub const ALL: [MenuSection; 4] = [
        MenuSection::Starters,
        MenuSection::MainCourses,
        MenuSection::Desserts,
        MenuSection::Drinks,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MenuSection::Starters => "Starters",
            MenuSection::MainCourses => "Main Courses",
            MenuSection::Desserts => "Desserts",
            MenuSection::Drinks => "Drinks",
        }
    }
}

// =============================================================================
// Menu Items
// =============================================================================

/// An orderable dish or drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier within the catalog (e.g. `starter-1`)
    pub id: &'static str,

    pub name: &'static str,

    pub description: &'static str,

    /// Display price, already formatted (e.g. `KSh 1,200`)
    pub price: &'static str,

    /// Numeric price in Kenyan shillings, used for totals
    pub price_value: u32,

    pub category: Category,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spicy: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegetarian: Option<bool>,

    /// Photo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
}

/// One section of the menu page together with its items
#[derive(Debug, Serialize)]
pub struct MenuSectionView {
    pub section: MenuSection,
    pub title: &'static str,
    pub items: Vec<MenuItem>,
}
