mod navigator;
mod stack;


pub use navigator::Navigator;
pub use stack::NavStack;
