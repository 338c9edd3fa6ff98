//! # jar-audit
//!
//! Decide which jars in a library directory are needed by a Java source tree.
//!
//! ## Architecture
//!
//! - **scan**: jar discovery in the library directory and lazy `.java` file walking
//! - **catalog**: jar inventory of class names and package wildcards
//! - **imports**: textual `import` extraction with platform-namespace filtering
//! - **registry**: class-to-jar ownership index (last write wins)
//! - **resolve**: used/unused tagging of jars against the used-class set
//! - **audit**: one full run driven by an immutable [`config::AuditConfig`]
//! - **report**: text and JSON rendering of the selected partition
//!
//! Import extraction is purely lexical. It does not understand comments or
//! string literals, and it never resolves names beyond exact string equality.

pub mod audit;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod imports;
pub mod registry;
pub mod report;
pub mod resolve;
pub mod scan;
