pub mod contact;
pub mod page;
pub mod run;
pub mod timeline;
