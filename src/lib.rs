//! In-memory cache of the Node.js release schedule.
//!
//! The schedule (per-release-line start, end-of-life, LTS, and maintenance
//! dates) is fetched once from the Node.js Release working group's published
//! JSON document and held in a [`schedule::store::ScheduleStore`], which
//! answers synchronous queries for the rest of the process's life.

pub mod schedule;
