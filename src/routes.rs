use dioxus::prelude::*;
use crate::views::{ Blog, Home, Navbar, Projects };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
    #[route("/blog")]
    Blog,
    #[route("/projects")]
    Projects,
}
