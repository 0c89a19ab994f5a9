use storefront::components::stars::filled_stars;
use storefront::models::category::Category;

#[test]
fn recognized_tags_parse_exactly() {
    assert_eq!(Category::parse("jewelery"), Category::Jewelery);
    assert_eq!(Category::parse("electronics"), Category::Electronics);
    assert_eq!(Category::parse("men's clothing"), Category::MensClothing);
    assert_eq!(Category::parse("women's clothing"), Category::WomensClothing);
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(Category::parse("Jewelery"), Category::Other);
    assert_eq!(Category::parse("ELECTRONICS"), Category::Other);
    assert_eq!(Category::parse("Men's Clothing"), Category::Other);
}

#[test]
fn unknown_tags_get_no_attribute_groups() {
    assert_eq!(Category::parse("groceries"), Category::Other);
    assert_eq!(Category::parse(""), Category::Other);
    assert!(Category::Other.attribute_groups().is_empty());
}

#[test]
fn jewelery_has_material_and_stone_pickers() {
    let groups = Category::Jewelery.attribute_groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label, "Material");
    assert_eq!(
        groups[0].options,
        ["Gold", "Silver", "Platinum", "Stainless steel"]
    );
    assert_eq!(groups[1].label, "Stone type");
    assert_eq!(
        groups[1].options,
        ["Diamond", "Ruby", "Emerald", "Sapphire", "Pearl"]
    );
}

#[test]
fn electronics_has_storage_color_and_screen_pickers() {
    let groups = Category::Electronics.attribute_groups();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].label, "Storage capacity");
    assert_eq!(groups[0].options, ["64GB", "128GB", "256GB", "512GB", "1TB"]);
    assert_eq!(groups[1].label, "Color");
    assert_eq!(groups[1].options, ["Black", "White", "Gray", "Blue", "Gold"]);
    assert_eq!(groups[2].label, "Screen size");
    assert_eq!(groups[2].options, ["5\"", "6.1\"", "10\"", "13\"", "15\""]);
}

#[test]
fn both_clothing_categories_share_one_table() {
    let mens = Category::MensClothing.attribute_groups();
    let womens = Category::WomensClothing.attribute_groups();
    assert_eq!(mens, womens);
    assert_eq!(mens.len(), 3);
    assert_eq!(mens[0].label, "Size");
    assert_eq!(mens[0].options, ["S", "M", "L", "XL", "XXL"]);
    assert_eq!(mens[1].label, "Material");
    assert_eq!(mens[2].label, "Style");
    assert_eq!(mens[2].options, ["Casual", "Sporty", "Formal"]);
}

#[test]
fn every_group_opens_with_a_select_placeholder() {
    for category in [
        Category::Jewelery,
        Category::Electronics,
        Category::MensClothing,
        Category::WomensClothing,
    ] {
        for group in category.attribute_groups() {
            assert!(
                group.placeholder.starts_with("Select "),
                "placeholder for {} should be a Select prompt",
                group.label
            );
        }
    }
}

#[test]
fn star_summary_rounds_to_nearest_whole_star() {
    assert_eq!(filled_stars(3.7), 4);
    assert_eq!(filled_stars(3.2), 3);
    assert_eq!(filled_stars(0.0), 0);
    assert_eq!(filled_stars(0.4), 0);
    assert_eq!(filled_stars(4.9), 5);
}

#[test]
fn star_summary_is_clamped_to_the_scale() {
    assert_eq!(filled_stars(7.3), 5);
    assert_eq!(filled_stars(-1.0), 0);
}
