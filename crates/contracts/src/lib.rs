//! Shared contracts of the cloud console.
//!
//! Everything here is platform independent: the navigation registry, the
//! wizard composer and its schema contract, list/detail selection state and
//! the resource records exchanged with the REST API.

pub mod domain;
pub mod shared;
