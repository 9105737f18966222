pub mod price;
pub mod token;

pub use price::*;
pub use token::*;
