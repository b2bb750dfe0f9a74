pub mod answer_area;
pub mod bulletin;
pub mod lectures;
pub mod members;
pub mod menu;
pub mod notice;
pub mod question_nav;
pub mod review;
pub mod token_bank;
