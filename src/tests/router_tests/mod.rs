mod auth_flow_tests;
mod favorites_tests;
mod listings_tests;
mod owner_tests;
mod pages_tests;
