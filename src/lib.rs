pub mod config;
pub mod content;
pub mod head;
pub mod logger;
pub mod post_list;
pub mod site_builder;
pub mod text_utils;
pub mod util;
pub mod view;
mod test_data;
