pub mod dice;
pub mod policy;
pub mod score;
pub mod stoch;

pub use dice::*;
pub use policy::*;
pub use score::*;
