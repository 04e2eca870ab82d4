// note: this example assumes you've analyzed the previous ones

use inj::callable::Callable;
use inj::injector::Injector;
use std::any::Any;

#[derive(Clone, Debug)]
struct RequestId(u64);

#[derive(Clone, Debug)]
struct Database(&'static str);

fn handle(database: Database, request: RequestId) -> String {
    format!("request {} served from {}", request.0, database.0)
}

fn main() {
    // long-lived values live in one injector
    let mut application = Injector::new();
    application.register(Database("primary"));

    // short-lived ones can be supplied per call as additional scopes, searched in order
    for id in 0..3 {
        let mut request = Injector::new();
        request.register(RequestId(id));

        let response = application
            .call(handle, &[&request])
            .expect("error handling request");
        println!("{response}");
    }

    // functions can be type-erased and invoked without knowing their signature
    let handlers: Vec<Box<dyn Any>> = vec![
        Box::new(Callable::new(|database: Database| database.0.len())),
        Box::new("not a function"),
    ];

    for handler in handlers {
        match application.call_dynamic(handler, &[]) {
            Ok(result) => println!("{:?}", result.downcast_ref::<usize>()),
            Err(error) => println!("{error}"),
        }
    }
}
