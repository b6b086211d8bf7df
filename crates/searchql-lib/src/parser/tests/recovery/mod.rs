mod unclosed_tests;
mod unexpected_tests;
mod validation_tests;
