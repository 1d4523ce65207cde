pub mod age;
pub mod disposition;
pub mod level;
pub mod patient;
