pub mod answer;
pub mod config;
pub mod question;
pub mod response;
pub mod result;
