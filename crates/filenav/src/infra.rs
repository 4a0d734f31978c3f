//! Adapters over the host system: directory enumeration, volume state, and
//! the storage-access consent flow.

pub mod access;
pub mod filesystem;
pub mod mount;
