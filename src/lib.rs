#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;

mod array;
mod error;
mod list;

pub use self::{
    array::Array,
    error::OutOfRange,
    list::LinkedList,
};
