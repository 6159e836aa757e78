pub mod canned;
pub mod google;
