mod domain;
mod group;
mod role;
mod server;
mod user;
