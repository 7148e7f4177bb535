mod blog;
mod home;
mod navbar;
mod projects;

pub use blog::Blog;
pub use home::Home;
pub use navbar::Navbar;
pub use projects::Projects;
