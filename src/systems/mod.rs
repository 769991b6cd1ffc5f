pub mod sdk;
pub mod playout;
pub mod assess;
pub mod select;
