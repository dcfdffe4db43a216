pub mod fixed;
pub mod json;

#[cfg(test)]
mod tests;

pub use fixed::FixedLoader;
pub use json::JsonFileLoader;
