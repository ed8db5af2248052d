pub mod answer;
pub mod question;
pub mod quiz;
pub use answer::{Answer, AnswerId};
pub use question::Question;
pub use quiz::Quiz;
