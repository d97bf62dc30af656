mod exchange_tests;
mod lifecycle_tests;
mod property_tests;
