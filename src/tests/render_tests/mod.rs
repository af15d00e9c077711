mod category_tests;
mod content_tests;
