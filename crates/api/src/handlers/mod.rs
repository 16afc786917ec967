pub mod contact;
pub mod pages;
pub mod projects;
pub mod services;
pub mod site;
