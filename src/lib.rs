#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod algorithm;
pub mod collection;
pub mod compass;
pub mod config;
pub mod dashboard;
pub mod datastore;
pub mod event;
pub mod gnss;
pub mod location;
pub mod sync;
pub mod types;

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;
