pub mod bounds;
pub mod selection;
pub mod session;
pub mod validator;
pub mod window;
