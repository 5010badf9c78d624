pub mod session_token;
pub mod url;
