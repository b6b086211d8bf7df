mod clauses_tests;
mod fields_tests;
mod phrases_tests;
mod trivia_tests;
