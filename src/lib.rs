//! Course-catalog extraction pipeline for the mate.academy listing.
//!
//! The listing page enumerates course entries; each entry links to a detail
//! page carrying a description, enrollment modes, a module/topic breakdown
//! and a duration. The pipeline turns that markup into an ordered set of
//! immutable [`record::CourseRecord`]s and feeds two sinks sharing one
//! canonical column list: a stdout table and a CSV file.

pub mod assemble;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod record;
