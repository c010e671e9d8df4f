#![forbid(unsafe_code)]

pub mod greetings;
