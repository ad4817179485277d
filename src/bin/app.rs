//! Application with a nested database command group
//!
//! ```bash
//! app --port=9090 start
//! app database --path=app.db create
//! ```

use std::process::ExitCode;

use simplecli::{Command, Describe};

#[derive(Default)]
struct Database {
    path: String,
}

impl Command for Database {
    fn describe(cli: &mut Describe<Self>) {
        cli.option("Path", |db| &mut db.path).tag("database file");

        cli.operation("Create", |db, ()| {
            if db.path.is_empty() {
                println!("Creating database.");
            } else {
                println!("Creating database at {}.", db.path);
            }
        })
        .about("Create the database");
        cli.operation("Drop", |_, ()| println!("Dropping database."))
            .about("Drop the database");
    }
}

struct App {
    database: Database,
    port: i32,
}

impl Command for App {
    fn describe(cli: &mut Describe<Self>) {
        cli.group("Database", |app| &mut app.database);
        cli.option("Port", |app| &mut app.port).tag("port to listen on");

        cli.operation("Start", |app, ()| println!("Listening app at {}.", app.port))
            .about("Start the app");
        cli.operation("Reload", |_, ()| println!("Reloading app."))
            .about("Reload the app");
        cli.operation("Kill", |_, ()| println!("Stopping app."))
            .about("Kill the app");
    }
}

fn main() -> ExitCode {
    simplecli::init_logging();
    simplecli::handle(&mut App {
        database: Database::default(),
        port: 8080,
    })
}
