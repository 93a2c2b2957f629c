pub mod aggregate;
pub mod bias;
pub mod merge;
pub mod palette;
pub mod recommend;
pub mod selection;
pub mod telemetry;
