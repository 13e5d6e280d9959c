//! Chart definitions: what each chart shows, independent of how it is drawn.
pub mod catalog;
pub mod spec;

#[cfg(test)]
mod catalog_test;
#[cfg(test)]
mod spec_test;
