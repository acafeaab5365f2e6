use existence::{driver::Driver, Sqlite};

use crate::Setup;

pub struct SetupSqlite;

impl Setup for SetupSqlite {
    fn driver(&self) -> existence::Result<Box<dyn Driver>> {
        Ok(Box::new(Sqlite::new("sqlite::memory:")?))
    }
}
