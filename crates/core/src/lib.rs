//! pagepurge_core - purge-key derivation and the store/hook seams.
//!
//! Everything here is free of network I/O. Backends live in the
//! `pagepurge` crate and plug in through [`purge::PurgeStore`].

pub mod purge;
