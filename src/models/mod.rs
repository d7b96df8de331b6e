pub mod card;
pub mod set;
pub mod sub;

pub use card::*;
pub use set::*;
pub use sub::*;
