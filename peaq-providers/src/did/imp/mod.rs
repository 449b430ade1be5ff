pub mod peaq;
