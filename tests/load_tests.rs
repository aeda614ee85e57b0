//! Concurrent Buildings Suite
//!
//! Runs hundreds of independently seeded buildings on scoped threads and
//! requires every day to equal the one produced by a plain sequential loop,
//! plus a coarse throughput check for building full reports in bulk.
//!
//! Both tests are `#[ignore]`d; run them explicitly with
//! `cargo test --test load_tests -- --ignored`.

mod load;
