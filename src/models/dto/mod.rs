pub mod question_record;
pub mod request;
pub mod response;
