pub mod mapping;
pub mod report;
pub mod widgets;
