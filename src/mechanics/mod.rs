pub mod dice;
pub mod stoch;
pub mod trial;

pub use dice::*;
pub use stoch::*;
pub use trial::*;
