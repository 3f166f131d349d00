mod pages;
mod properties;
mod schema;
