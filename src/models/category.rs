/// Product categories that get extra attribute pickers on the detail page.
/// Anything the store reports outside the recognized set maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Jewelery,
    Electronics,
    MensClothing,
    WomensClothing,
    Other,
}

/// One labeled dropdown: a placeholder followed by its fixed options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeGroup {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub options: &'static [&'static str],
}

const JEWELERY_GROUPS: &[AttributeGroup] = &[
    AttributeGroup {
        label: "Material",
        placeholder: "Select material",
        options: &["Gold", "Silver", "Platinum", "Stainless steel"],
    },
    AttributeGroup {
        label: "Stone type",
        placeholder: "Select stone type",
        options: &["Diamond", "Ruby", "Emerald", "Sapphire", "Pearl"],
    },
];

const ELECTRONICS_GROUPS: &[AttributeGroup] = &[
    AttributeGroup {
        label: "Storage capacity",
        placeholder: "Select capacity",
        options: &["64GB", "128GB", "256GB", "512GB", "1TB"],
    },
    AttributeGroup {
        label: "Color",
        placeholder: "Select color",
        options: &["Black", "White", "Gray", "Blue", "Gold"],
    },
    AttributeGroup {
        label: "Screen size",
        placeholder: "Select screen size",
        options: &["5\"", "6.1\"", "10\"", "13\"", "15\""],
    },
];

// Men's and women's clothing share one table.
const CLOTHING_GROUPS: &[AttributeGroup] = &[
    AttributeGroup {
        label: "Size",
        placeholder: "Select size",
        options: &["S", "M", "L", "XL", "XXL"],
    },
    AttributeGroup {
        label: "Material",
        placeholder: "Select material",
        options: &["Cotton", "Polyester", "Wool", "Cotton blend"],
    },
    AttributeGroup {
        label: "Style",
        placeholder: "Select style",
        options: &["Casual", "Sporty", "Formal"],
    },
];

impl Category {
    /// Maps a route category tag to a variant. The match is exact and
    /// case-sensitive, mirroring the tags the store API reports.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "jewelery" => Category::Jewelery,
            "electronics" => Category::Electronics,
            "men's clothing" => Category::MensClothing,
            "women's clothing" => Category::WomensClothing,
            _ => Category::Other,
        }
    }

    /// The attribute pickers rendered for this category. `Other` gets none.
    pub fn attribute_groups(self) -> &'static [AttributeGroup] {
        match self {
            Category::Jewelery => JEWELERY_GROUPS,
            Category::Electronics => ELECTRONICS_GROUPS,
            Category::MensClothing | Category::WomensClothing => CLOTHING_GROUPS,
            Category::Other => &[],
        }
    }
}
