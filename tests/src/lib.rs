pub mod db;

pub use exec_log::ExecLog;

// Re-export for use in macros - needs to be public for macro expansion
pub use existence_test::ExistenceTest;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};

pub mod models;

mod require_existence;
pub use require_existence::RequireExistence;

pub use existence::{
    schema::ModelDef,
    stmt::{Type, Value},
    Association, Db, Entity, Error, On, Reason, Record, Schema, ValidatesExistence, Validations,
};

use existence::driver::Driver;
use std::ops::Deref;

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    fn driver(&self) -> existence::Result<Box<dyn Driver>>;

    /// Build a database for `schema` on a fresh driver, with its storage
    /// pushed and an empty operation log.
    async fn setup(&self, schema: Schema) -> TestDb {
        init_tracing();

        let driver = LoggingDriver::new(self.driver().unwrap());
        let log = ExecLog::new(driver.ops_log_handle());
        let db = Db::builder().schema(schema).build(driver).unwrap();
        db.push_schema().await.unwrap();

        TestDb { db, log }
    }
}

/// A database handle together with the log of operations it sent to the
/// driver.
pub struct TestDb {
    pub db: Db,
    pub log: ExecLog,
}

impl Deref for TestDb {
    type Target = Db;

    fn deref(&self) -> &Db {
        &self.db
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        #[cfg(feature = "memory")]
        mod memory {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::ExistenceTest::new(
                        $crate::db::memory::SetupMemory
                    );

                    test.run_test(|setup| async move {
                        super::$f(setup).await;
                    });
                }
            )*
        }

        #[cfg(feature = "sqlite")]
        mod sqlite {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::ExistenceTest::new(
                        $crate::db::sqlite::SetupSqlite
                    );

                    test.run_test(|setup| async move {
                        super::$f(setup).await;
                    });
                }
            )*
        }
    };
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident,
        )+
    ) => {
        $crate::tests!( $(
            $( #[$attrs] )*
            $f
        ),+ );
    }
}
