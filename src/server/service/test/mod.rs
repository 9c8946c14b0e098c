mod asset;
mod auth;
mod customer;
mod network;
mod support;
