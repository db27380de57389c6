pub mod dump;
pub mod inspect;
pub mod loader;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod inspect_tests;
