pub mod comment;
pub mod follow;
pub mod group;
pub mod local_user;
pub mod person;
pub mod post;
