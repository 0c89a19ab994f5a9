pub mod category_options;
pub mod product_detail;
pub mod review_form;
pub mod reviews_list;
pub mod stars;
