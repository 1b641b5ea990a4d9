pub mod activities_service;
pub mod email;
pub mod signup_service;
