// note: this example assumes you've analyzed the previous one

use inj::descriptor::TypeDescriptor;
use inj::injector::Injector;
use inj::instance::InstancePtr;
use inj::{interface, interface_impl};
use std::io::{stdout, Write};

// marks the trait as usable with register_as()
#[interface]
trait Logger {
    fn log(&self, message: &str);
}

struct StdoutLogger;

// tells the injector StdoutLogger can be registered as dyn Logger
#[interface_impl]
impl Logger for StdoutLogger {
    fn log(&self, message: &str) {
        let _ = writeln!(stdout(), "{message}");
    }
}

fn greet(logger: InstancePtr<dyn Logger>, name: String) {
    logger.log(&format!("Hello {name}!"));
}

//noinspection DuplicatedCode
fn main() {
    let mut injector = Injector::new();

    // the value is stored as InstancePtr<dyn Logger>, not as StdoutLogger
    injector
        .register_as(StdoutLogger, TypeDescriptor::of::<dyn Logger>())
        .expect("error registering logger");

    // this fails, since i32 does not implement Logger
    if let Err(error) = injector.register_as(42, TypeDescriptor::of::<dyn Logger>()) {
        println!("{error}");
    }

    // values missing from the injector can come from additional scopes
    let mut fallback = Injector::new();
    fallback.register("world".to_string());

    // prints "Hello world!"
    injector
        .call(greet, &[&fallback])
        .expect("error calling greet");
}
