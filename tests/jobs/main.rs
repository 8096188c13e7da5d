//! Integration tests for the job workers.
//!
//! Each test submits a job to a `JobRunner` over the fixture store of
//! `wellops-testing`, then checks the calls that reached the store, the
//! reported result and what the store holds afterwards.

mod create;
mod delete;
mod mnemonic;
mod modify;
mod runner;
