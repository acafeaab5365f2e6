use existence::{driver::Driver, Memory};

use crate::Setup;

pub struct SetupMemory;

impl Setup for SetupMemory {
    fn driver(&self) -> existence::Result<Box<dyn Driver>> {
        Ok(Box::new(Memory::new()))
    }
}
