pub mod auction;
pub mod fees;
pub mod safe_math;
