//! `SeaORM` entity definitions.

pub mod loan;
